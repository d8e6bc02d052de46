//! 게시물 생성 요청 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::posts::request::PostMetaOption;
use crate::domain::dto::validators::{
    parse_iso8601, validate_image_url, validate_iso8601, validate_json_string, validate_slug,
    validate_tags,
};
use crate::domain::models::{PostStatus, PostType};

/// 새 게시물 생성 요청 DTO
///
/// `postType`, `status`는 닫힌 열거형이므로 목록에 없는 값은 역직렬화 단계에서 거부됩니다.
/// 나머지 제약은 `validate()`에서 모두 수집됩니다.
///
/// ```json
/// {
///   "title": "My Awesome Post",
///   "postType": "post",
///   "slug": "my-awesome-post",
///   "status": "draft",
///   "schema": "{ \"@context\": \"https://schema.org\", \"@type\": \"Person\" }",
///   "featuredImageUrl": "http://localhost.com/images/image1.jpg",
///   "publishOn": "2024-03-16T07:46:32+0000",
///   "tags": ["nestjs", "nestjs-tutorial"],
///   "metaOptions": [{ "key": "author", "value": "John Doe" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 4, message = "제목은 4자 이상이어야 합니다"))]
    pub title: String,

    pub post_type: PostType,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    pub status: PostStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// 직렬화된 JSON 문자열
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

impl CreatePostRequest {
    /// 검증을 통과한 `publishOn`을 UTC 시각으로 반환합니다.
    pub fn publish_at(&self) -> Option<DateTime<Utc>> {
        self.publish_on.as_deref().and_then(parse_iso8601)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use serde_json::json;

    fn valid_payload() -> serde_json::Value {
        json!({
            "title": "My Awesome Post",
            "postType": "post",
            "slug": "my-url",
            "status": "draft",
            "content": "This is the detailed content of the post...",
            "schema": "{\"a\":1}",
            "featuredImageUrl": "http://localhost.com/images/image1.jpg",
            "publishOn": "2024-03-16T07:46:32+0000",
            "tags": ["nestjs", "nestjs-tutorial"],
            "metaOptions": [{ "key": "author", "value": "John Doe" }]
        })
    }

    fn parse(payload: serde_json::Value) -> CreatePostRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_valid_payload_passes() {
        let request = parse(valid_payload());
        assert!(request.validate().is_ok());
        assert_eq!(request.post_type, PostType::Post);
        assert_eq!(request.status, PostStatus::Draft);
        assert!(request.publish_at().is_some());
    }

    #[test]
    fn test_only_required_fields() {
        let request = parse(json!({
            "title": "Hello",
            "postType": "page",
            "slug": "hello",
            "status": "published"
        }));
        assert!(request.validate().is_ok());
        assert_eq!(request.publish_at(), None);
    }

    #[test]
    fn test_slug_examples() {
        for (slug, ok) in [
            ("my-url", true),
            ("a1-b2-c3", true),
            ("My-Url", false),
            ("-leading", false),
            ("trailing-", false),
            ("double--dash", false),
        ] {
            let mut payload = valid_payload();
            payload["slug"] = json!(slug);
            assert_eq!(parse(payload).validate().is_ok(), ok, "slug {}", slug);
        }
    }

    #[test]
    fn test_schema_must_be_json() {
        let mut payload = valid_payload();
        payload["schema"] = json!("{a:1}");
        assert!(parse(payload).validate().is_err());
    }

    #[test]
    fn test_unknown_enum_member_is_rejected() {
        let mut payload = valid_payload();
        payload["postType"] = json!("article");
        assert!(serde_json::from_value::<CreatePostRequest>(payload).is_err());

        let mut payload = valid_payload();
        payload["status"] = json!("archived");
        assert!(serde_json::from_value::<CreatePostRequest>(payload).is_err());
    }

    #[test]
    fn test_multiple_violations_are_collected() {
        let mut payload = valid_payload();
        payload["title"] = json!("abc");
        payload["featuredImageUrl"] = json!("not a url");
        payload["publishOn"] = json!("yesterday");
        payload["tags"] = json!(["ok-tag", "no"]);

        let errors = parse(payload).validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 4);
    }

    #[test]
    fn test_featured_image_url_allows_only_web_schemes() {
        for (url, ok) in [
            ("http://localhost.com/images/image1.jpg", true),
            ("example.com/images/a.jpg", true),
            ("javascript:alert(1)", false),
            ("mailto:a@b.com", false),
        ] {
            let mut payload = valid_payload();
            payload["featuredImageUrl"] = json!(url);
            assert_eq!(parse(payload).validate().is_ok(), ok, "{}", url);
        }
    }

    #[test]
    fn test_meta_options_are_validated_element_wise() {
        let mut payload = valid_payload();
        payload["metaOptions"] = json!([
            { "key": "author", "value": "John Doe" },
            { "key": "", "value": null }
        ]);

        let errors = AppError::from(parse(payload).validate().unwrap_err());
        let fields: Vec<&str> = errors.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["metaOptions[1].key", "metaOptions[1].value"]);
    }
}
