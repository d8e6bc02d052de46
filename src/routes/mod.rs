//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별 scope로 그룹화하여 등록합니다.
//! 인증 미들웨어는 어떤 라우트에도 적용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use blog_service_backend::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::handlers;

/// 시작 배너에 출력할 라우트 목록 (Method, Path)
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/users"),
    ("GET", "/users/{id}"),
    ("POST", "/users"),
    ("PATCH", "/users"),
    ("GET", "/posts/{userId}"),
    ("POST", "/posts"),
    ("PATCH", "/posts"),
];

/// 모든 라우트를 설정합니다
///
/// extractor 에러 설정도 함께 등록하므로 테스트에서 `App::new().configure(...)`만
/// 호출해도 실제 서버와 같은 400 응답 형식을 얻습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .app_data(handlers::query_config())
        .app_data(handlers::path_config());

    cfg.service(handlers::app::root)
        .service(handlers::app::health_check);

    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 사용자 관련 라우트
///
/// ```bash
/// curl "http://localhost:3000/users?limit=10&page=1"
/// curl http://localhost:3000/users/1234
/// curl -X PATCH http://localhost:3000/users \
///   -H "Content-Type: application/json" \
///   -d '{"id":1,"firstName":"Alice"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::patch_user),
    );
}

/// 게시물 관련 라우트
///
/// ```bash
/// curl http://localhost:3000/posts/1234
/// curl -X POST http://localhost:3000/posts \
///   -H "Content-Type: application/json" \
///   -d '{"title":"My Post","postType":"post","slug":"my-post","status":"draft"}'
/// ```
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(handlers::posts::get_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::update_post),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/comments").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_non_json_body_is_rejected() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
    }

    // actix_web::test 임포트가 내장 #[test] 속성을 가림
    #[actix_web::test]
    async fn test_route_table_is_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(ROUTES.iter().all(|route| seen.insert(*route)));
    }
}
