//! # 사용자 HTTP 핸들러
//!
//! | Method | Path | 입력 | 응답 |
//! |--------|------|------|------|
//! | GET | `/users` | `limit`(기본 10), `page`(기본 1) | 200, 사용자 요약 2건 |
//! | GET | `/users/{id}` | 정수 `id` | 200, 고정 샘플 레코드 |
//! | POST | `/users` | [`CreateUserRequest`] | 201, 안내 문구 (저장하지 않음) |
//! | PATCH | `/users` | [`PatchUserRequest`] | 200, 검증된 요청 echo |

use std::collections::HashMap;

use actix_web::{HttpResponse, get, patch, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::{CreateUserRequest, GetUsersParam, PaginationQuery, PatchUserRequest};
use crate::services::users::UserService;

/// 사용자 목록 조회
///
/// `limit`, `page`는 정수여야 하며(아니면 해당 파라미터 이름과 함께 400)
/// 현재 결과에는 영향을 주지 않습니다.
///
/// ```bash
/// curl "http://localhost:3000/users?limit=1&page=2"
/// ```
#[get("")]
pub async fn get_users(
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let PaginationQuery { limit, page } = PaginationQuery::from_params(&query)?;

    let service = UserService::instance();
    let users = service.find_all(&GetUsersParam::default(), limit, page);

    Ok(HttpResponse::Ok().json(users))
}

/// ID로 사용자 조회
///
/// ```bash
/// curl http://localhost:3000/users/1234
/// ```
#[get("/{id}")]
pub async fn get_user(id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    log::info!("사용자 조회 파라미터: {:?}", GetUsersParam::by_id(id));

    let service = UserService::instance();
    let user = service.find_one_by_id(id);

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성
///
/// 저장소가 없으므로 검증된 요청을 로그로만 남깁니다. 비밀번호는 기록하지 않습니다.
///
/// ```bash
/// curl -X POST http://localhost:3000/users \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"John","email":"john@doe.com","password":"Passw0rd!"}'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!(
        "사용자 생성 요청: firstName={}, lastName={:?}, email={}",
        payload.first_name,
        payload.last_name,
        payload.email
    );

    Ok(HttpResponse::Created()
        .content_type("text/plain; charset=utf-8")
        .body("You sent a post request to users endpoint"))
}

/// 사용자 부분 수정
///
/// 검증된 요청을 그대로 돌려줍니다.
#[patch("")]
pub async fn patch_user(payload: web::Json<PatchUserRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    Ok(HttpResponse::Ok().json(payload.into_inner()))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::routes::configure_all_routes;

    fn valid_user() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "password": "Passw0rd!"
        })
    }

    #[actix_web::test]
    async fn test_get_users_returns_two_records() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            vec![
                json!({ "firstName": "John", "email": "john@doe.com" }),
                json!({ "firstName": "Alice", "email": "alice@doe.com" }),
            ]
        );
    }

    #[actix_web::test]
    async fn test_get_users_ignores_limit() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users?limit=1&page=3").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 2);
    }

    #[actix_web::test]
    async fn test_get_users_rejects_non_integer_limit() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users?limit=abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"].as_array().unwrap().len(), 1);
        assert_eq!(body["details"][0]["field"], "limit");
        assert_eq!(body["details"][0]["constraint"], "invalid_type");
    }

    #[actix_web::test]
    async fn test_get_users_reports_both_pagination_fields() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users?limit=abc&page=x").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "limit");
        assert_eq!(body["details"][1]["field"], "page");
    }

    #[actix_web::test]
    async fn test_get_user_returns_fixed_record_for_any_id() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let expected = json!({ "id": 1234, "firstName": "Alice", "email": "alice@doe.com" });

        for uri in ["/users/1234", "/users/9999"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, expected);
        }
    }

    #[actix_web::test]
    async fn test_get_user_rejects_non_integer_id() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "id");
        assert_eq!(body["details"][0]["constraint"], "invalid_type");
        assert!(body["details"][0]["message"].as_str().unwrap().contains("`id`"));
    }

    #[actix_web::test]
    async fn test_create_user_accepts_valid_payload() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post().uri("/users").set_json(valid_user()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = test::read_body(resp).await;
        assert_eq!(body, "You sent a post request to users endpoint");
    }

    #[actix_web::test]
    async fn test_create_user_reports_every_violation() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let mut payload = valid_user();
        payload["firstName"] = json!("Jo");
        payload["email"] = json!("not-an-email");

        let req = test::TestRequest::post().uri("/users").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["email", "firstName"]);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_missing_field() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "firstName": "John" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "email");
        assert_eq!(body["details"][0]["constraint"], "missing_field");
    }

    #[actix_web::test]
    async fn test_patch_user_echoes_payload() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let payload = json!({ "id": 1, "firstName": "Alice" });
        let req = test::TestRequest::patch().uri("/users").set_json(&payload).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, payload);
    }

    #[actix_web::test]
    async fn test_patch_user_requires_id() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::patch()
            .uri("/users")
            .set_json(json!({ "firstName": "Alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
