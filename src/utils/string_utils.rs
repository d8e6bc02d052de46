//! # 문자열 유틸리티
//!
//! 검증 에러 경로를 JSON 필드 이름으로 맞추는 데 사용됩니다.

/// snake_case 식별자를 JSON 필드 이름(camelCase)으로 변환합니다.
///
/// 이미 camelCase인 입력은 그대로 반환합니다.
///
/// ```rust
/// use blog_service_backend::utils::string_utils::to_camel_case;
///
/// assert_eq!(to_camel_case("featured_image_url"), "featuredImageUrl");
/// assert_eq!(to_camel_case("firstName"), "firstName");
/// ```
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            // 선행 밑줄은 무시
            upper_next = !result.is_empty();
            continue;
        }

        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
