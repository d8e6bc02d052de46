//! 사용자 수정(patch) 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::validators::validate_password_strength;

/// 사용자 부분 수정 요청 DTO
///
/// [`CreateUserRequest`](super::CreateUserRequest)와 같은 필드 규칙을 적용하지만
/// 모든 필드가 선택 사항이며, 대상 식별자 `id`만 필수입니다.
/// 전달되지 않은 필드는 응답 echo에도 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 96, message = "이름은 3-96자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 96, message = "성은 3-96자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: Option<String>,
}
