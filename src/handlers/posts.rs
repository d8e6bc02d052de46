//! # 게시물 HTTP 핸들러
//!
//! | Method | Path | 입력 | 응답 |
//! |--------|------|------|------|
//! | GET | `/posts/{userId}` | 정수 `userId` | 200, 게시물 2건 |
//! | POST | `/posts` | [`CreatePostRequest`] | 201, 본문 없음 |
//! | PATCH | `/posts` | [`PatchPostRequest`] | 200, 본문 없음 |

use actix_web::{HttpResponse, get, patch, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::{CreatePostRequest, PatchPostRequest};
use crate::services::posts::PostService;

/// 특정 사용자의 게시물 조회
///
/// ```bash
/// curl http://localhost:3000/posts/123
/// ```
#[get("/{user_id}")]
pub async fn get_posts(user_id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let posts = service.find_all(user_id.into_inner());

    Ok(HttpResponse::Ok().json(posts))
}

/// 게시물 생성
///
/// 저장소가 없으므로 검증된 요청을 로그로만 남기고 본문 없는 201을 반환합니다.
#[post("")]
pub async fn create_post(
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!(
        "게시물 생성 요청: {:?} (publishAt={:?})",
        payload,
        payload.publish_at()
    );

    Ok(HttpResponse::Created().finish())
}

/// 게시물 부분 수정
#[patch("")]
pub async fn update_post(
    payload: web::Json<PatchPostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!("게시물 수정 요청: {:?}", payload);

    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::routes::configure_all_routes;

    fn valid_post() -> Value {
        json!({
            "title": "My Awesome Post",
            "postType": "post",
            "slug": "my-awesome-post",
            "status": "draft",
            "schema": "{\"a\":1}",
            "publishOn": "2024-03-16T07:46:32+0000",
            "tags": ["nestjs", "nestjs-tutorial"],
            "metaOptions": [{ "key": "author", "value": "John Doe" }]
        })
    }

    #[actix_web::test]
    async fn test_get_posts_embeds_user() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/posts/7").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 2);
        for post in &body {
            assert_eq!(
                post["user"],
                json!({ "id": 1234, "firstName": "Alice", "email": "alice@doe.com" })
            );
        }
        assert_eq!(body[0]["title"], "Test Tile");
        assert_eq!(body[1]["content"], "Test Content 2");
    }

    #[actix_web::test]
    async fn test_create_post_returns_created_without_body() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post().uri("/posts").set_json(valid_post()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_create_post_rejects_bad_slug_and_schema() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let mut payload = valid_post();
        payload["slug"] = json!("double--dash");
        payload["schema"] = json!("{a:1}");

        let req = test::TestRequest::post().uri("/posts").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let constraints: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["constraint"].as_str().unwrap())
            .collect();
        assert_eq!(constraints, vec!["json", "slug"]);
    }

    #[actix_web::test]
    async fn test_create_post_rejects_unknown_status() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let mut payload = valid_post();
        payload["status"] = json!("archived");

        let req = test::TestRequest::post().uri("/posts").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["constraint"], "invalid_value");
    }

    #[actix_web::test]
    async fn test_get_posts_rejects_non_integer_user_id() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "userId");
        assert_eq!(body["details"][0]["constraint"], "invalid_type");
    }

    #[actix_web::test]
    async fn test_create_post_reports_meta_option_paths() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let mut payload = valid_post();
        payload["metaOptions"] = json!([{ "key": "", "value": "x" }]);

        let req = test::TestRequest::post().uri("/posts").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "metaOptions[0].key");
    }

    #[actix_web::test]
    async fn test_update_post() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::patch()
            .uri("/posts")
            .set_json(json!({ "id": 1, "status": "published" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::patch()
            .uri("/posts")
            .set_json(json!({ "status": "published" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
