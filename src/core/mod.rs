//! # Core Framework Module
//!
//! 서비스 계층 전체가 공유하는 기반 기능입니다.
//!
//! - [`registry`] - `ServiceLocator` 기반 싱글톤 의존성 주입
//! - [`errors`] - `AppError`와 HTTP 에러 응답 변환
//!
//! ## 새 서비스 추가 절차
//!
//! 1. 구조체 정의, 의존성은 `Arc<T>` 필드로 선언
//! 2. `instance()`에서 `ServiceLocator::get::<T>()`로 의존성 해결
//! 3. `inventory::submit!`으로 `ServiceRegistration` 등록
//!
//! ```text
//! ❌ Circular dependency detected: ... is already being initialized
//! ```
//! 위 메시지가 보이면 의존성 방향을 단방향으로 재설계해야 합니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
