//! 루트 및 헬스체크 핸들러

use actix_web::{HttpResponse, get};
use serde_json::json;

/// `GET /` - 아무 작업도 하지 않고 빈 200 응답을 반환합니다.
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "blog_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "features": {
///     "storage": "in-memory sample data",
///     "validation": "validator",
///     "dependency_injection": "ServiceLocator"
///   }
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "in-memory sample data",
            "validation": "validator",
            "dependency_injection": "ServiceLocator"
        }
    }))
}
