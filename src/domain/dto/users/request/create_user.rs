//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::validators::validate_password_strength;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 구조적 오류(필수 필드 누락, 타입 불일치)는 JSON 역직렬화 단계에서,
/// 제약 조건 위반은 `validate()`에서 필드별로 모두 수집됩니다.
///
/// ```json
/// {
///   "firstName": "John",
///   "lastName": "Doe",
///   "email": "john.doe@example.com",
///   "password": "Passw0rd!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 이름 (3-96자)
    #[validate(length(min = 3, max = 96, message = "이름은 3-96자 사이여야 합니다"))]
    pub first_name: String,

    /// 성 (선택, 3-96자)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 96, message = "성은 3-96자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}
