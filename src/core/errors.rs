//! # 애플리케이션 에러 시스템
//!
//! 모든 HTTP 핸들러가 공유하는 통합 에러 타입을 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 반환한 에러를 일관된 JSON 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! 단일 메시지 에러:
//!
//! ```json
//! { "error": "Not found: post 42" }
//! ```
//!
//! 검증 실패 (400 Bad Request). 추출 단계 실패와 제약 조건 위반이 같은 형식을 사용합니다:
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "details": [
//!     { "field": "firstName", "constraint": "length", "message": "이름은 3-96자 사이여야 합니다" },
//!     { "field": "metaOptions[0].key", "constraint": "length", "message": "메타 옵션 키는 비어 있을 수 없습니다" }
//!   ]
//! }
//! ```
//!
//! 추출 단계 실패의 `constraint`:
//!
//! | 코드 | 원인 |
//! |------|------|
//! | `missing_field` | 필수 필드 누락 |
//! | `invalid_type` | 타입 불일치, 정수가 아닌 경로/쿼리 값 |
//! | `invalid_value` | 열거형에 없는 값 |
//! | `malformed_json` | JSON 문법 오류 |
//! | `content_type` | `application/json`이 아닌 본문 |
//! | `payload` | 본문 크기 초과 등 기타 |

use std::borrow::Cow;

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::utils::string_utils::to_camel_case;

/// 검증에 실패한 단일 필드 정보
///
/// `field`는 JSON 상의 경로(camelCase)이며, 중첩 리스트는 `metaOptions[1].value`
/// 처럼 인덱스를 포함합니다. `constraint`는 위반한 규칙의 코드입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// ## 상태 코드 매핑
///
/// - `ValidationError`, `ValidationFailed` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `InternalError` → 500 Internal Server Error
///
/// 서비스 계층은 샘플 데이터만 다루므로 실제로 발생하는 에러는
/// 요청 검증 실패뿐입니다. 나머지 변형은 저장소가 실제 구현으로
/// 교체될 때를 위한 것입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문/쿼리/경로를 구조적으로 해석할 수 없는 경우
    ///
    /// 필수 필드 누락, JSON 타입 불일치, 열거형에 없는 값 등
    /// 역직렬화 단계에서 발견되는 오류입니다. serde는 첫 오류에서 멈추므로 위반은 하나입니다.
    #[error("Validation error: {}: {}", .0.field, .0.message)]
    ValidationError(FieldViolation),

    /// 필드 제약 조건 위반 (위반된 모든 필드를 포함)
    #[error("Validation failed: {} field(s) rejected", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 검증 실패 상세 목록을 반환합니다. 검증 에러가 아니면 빈 슬라이스입니다.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AppError::ValidationError(violation) => std::slice::from_ref(violation),
            AppError::ValidationFailed(violations) => violations,
            _ => &[],
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => serde_json::json!({
                "error": "Validation failed",
                "details": self.violations(),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(&errors, None, &mut violations);

        // HashMap 순회 순서에 의존하지 않도록 정렬
        violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.constraint.cmp(&b.constraint)));

        AppError::ValidationFailed(violations)
    }
}

/// `ValidationErrors` 트리를 평탄화합니다.
///
/// 구조체 중첩은 `parent.child`, 리스트 중첩은 `parent[index].child` 경로가 됩니다.
fn collect_violations(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut Vec<FieldViolation>,
) {
    for (field, kind) in errors.errors() {
        let name = to_camel_case(&field.to_string());
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name,
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("{} 값이 올바르지 않습니다", path)));
                    out.push(FieldViolation::new(
                        path.clone(),
                        error.code.to_string(),
                        message.to_string(),
                    ));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_violations(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}[{}]", path, index);
                    collect_violations(nested, Some(&item_path), out);
                }
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
