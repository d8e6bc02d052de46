//! 게시물 수정(patch) 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::posts::request::PostMetaOption;
use crate::domain::dto::validators::{
    validate_image_url, validate_iso8601, validate_json_string, validate_slug, validate_tags,
};
use crate::domain::models::{PostStatus, PostType};

/// 게시물 부분 수정 요청 DTO
///
/// [`CreatePostRequest`](super::CreatePostRequest)의 모든 필드를 선택 사항으로 다시 선언하고
/// 수정 대상 식별자 `id`를 필수로 요구합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchPostRequest {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 4, message = "제목은 4자 이상이어야 합니다"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_json_string"))]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_image_url"))]
    pub featured_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_iso8601"))]
    pub publish_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub meta_options: Option<Vec<PostMetaOption>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_alone_is_valid() {
        let request: PatchPostRequest = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_id_is_required() {
        assert!(serde_json::from_value::<PatchPostRequest>(json!({ "title": "Hello" })).is_err());
    }

    #[test]
    fn test_present_fields_follow_create_rules() {
        let request: PatchPostRequest = serde_json::from_value(json!({
            "id": 1,
            "title": "abc",
            "slug": "Bad Slug",
            "schema": "{a:1}",
            "featuredImageUrl": "javascript:alert(1)"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 4);
    }
}
