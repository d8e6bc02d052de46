//! # HTTP Handlers
//!
//! 요청을 추출·검증한 뒤 서비스로 위임하는 엔드포인트 함수들입니다.
//!
//! ## 검증 흐름
//!
//! 1. **추출**: `web::Json`, `web::Query`, `web::Path`가 구조를 해석합니다.
//!    실패하면 아래 extractor 설정의 에러 핸들러가 위반 필드를 찾아
//!    `AppError::ValidationError`(400)로 변환합니다.
//! 2. **검증**: 핸들러가 `payload.validate()?`를 호출하면 위반된 모든 필드가
//!    `AppError::ValidationFailed`(400)로 보고됩니다.
//! 3. **위임**: 검증을 통과한 값만 서비스로 전달됩니다.
//!
//! - [`app`] - `GET /`, `GET /health`
//! - [`users`] - `/users`
//! - [`posts`] - `/posts`

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::error::Category;

use crate::core::errors::{AppError, FieldViolation};
use crate::utils::string_utils::to_camel_case;

pub mod app;
pub mod users;
pub mod posts;

fn reject(kind: &str, req: &HttpRequest, violation: FieldViolation) -> actix_web::Error {
    log::warn!(
        "⚠️ {} 추출 실패 - {} {}: {} ({})",
        kind,
        req.method(),
        req.path(),
        violation.field,
        violation.message
    );
    AppError::ValidationError(violation).into()
}

/// JSON 본문 추출 실패를 400 검증 에러로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| reject("JSON", req, json_violation(&err)))
}

/// 쿼리 문자열 추출 실패를 400 검증 에러로 변환합니다.
///
/// 개별 파라미터의 타입 검사는 각 쿼리 DTO가 담당하며, 여기서는 문자열 맵으로도
/// 해석할 수 없는 쿼리만 처리합니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let violation = match err {
            QueryPayloadError::Deserialize(e) => {
                FieldViolation::new("query", "invalid_type", e.to_string())
            }
            other => FieldViolation::new("query", "payload", other.to_string()),
        };
        reject("Query", req, violation)
    })
}

/// 경로 파라미터 추출 실패 (`/users/abc` 등)를 400 검증 에러로 변환합니다.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let detail = match &err {
            PathError::Deserialize(e) => e.to_string(),
            other => other.to_string(),
        };
        let field = offending_segment(req, &detail);
        let message = format!("경로 파라미터 `{}` 값이 올바르지 않습니다: {}", field, detail);

        reject("Path", req, FieldViolation::new(field, "invalid_type", message))
    })
}

/// 에러 메시지에 값이 등장하는 경로 세그먼트의 이름. 찾지 못하면 첫 세그먼트입니다.
fn offending_segment(req: &HttpRequest, detail: &str) -> String {
    let segments = req.match_info();

    segments
        .iter()
        .find(|(_, value)| detail.contains(&format!("\"{}\"", value)))
        .or_else(|| segments.iter().next())
        .map(|(name, _)| to_camel_case(name))
        .unwrap_or_else(|| "path".to_string())
}

fn json_violation(err: &JsonPayloadError) -> FieldViolation {
    match err {
        JsonPayloadError::Deserialize(e) => deserialize_violation(e),
        JsonPayloadError::ContentType => FieldViolation::new(
            "body",
            "content_type",
            "요청 본문의 Content-Type은 application/json이어야 합니다",
        ),
        other => FieldViolation::new("body", "payload", other.to_string()),
    }
}

/// serde_json 에러 분류로 위반 필드와 코드를 결정합니다.
///
/// serde_json은 누락 필드 외에는 경로를 알려주지 않으므로 나머지는 `body`로 보고합니다.
fn deserialize_violation(err: &serde_json::Error) -> FieldViolation {
    let message = err.to_string();

    match err.classify() {
        Category::Data => {
            if let Some(field) = backticked(&message, "missing field ") {
                FieldViolation::new(field.to_owned(), "missing_field", message.clone())
            } else if message.starts_with("unknown variant") {
                FieldViolation::new("body", "invalid_value", message)
            } else {
                FieldViolation::new("body", "invalid_type", message)
            }
        }
        Category::Syntax | Category::Eof | Category::Io => {
            FieldViolation::new("body", "malformed_json", message)
        }
    }
}

/// `prefix` 바로 뒤의 `` `name` ``에서 `name`을 꺼냅니다.
fn backticked<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    message
        .strip_prefix(prefix)?
        .strip_prefix('`')?
        .split('`')
        .next()
}
