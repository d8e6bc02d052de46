//! 게시물 메타 옵션 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::dto::validators::validate_not_empty_value;

/// 게시물에 붙는 임의의 key/value 쌍
///
/// `value`는 어떤 JSON 타입이든 허용하지만 `null`이나 빈 문자열은 거부합니다.
/// 두 필드 모두 누락 시 기본값으로 채운 뒤 검증 단계에서 거부되므로
/// 누락된 필드도 다른 위반과 함께 보고됩니다.
///
/// ```json
/// { "key": "author", "value": "John Doe" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PostMetaOption {
    #[serde(default)]
    #[validate(length(min = 1, message = "메타 옵션 키는 비어 있을 수 없습니다"))]
    pub key: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_empty_value"))]
    pub value: Value,
}
