//! # Data Transfer Objects
//!
//! HTTP 요청 본문을 표현하는 DTO와 검증 규칙입니다.
//! 모든 검증은 핸들러에서 서비스 호출 전에 수행되며, 서비스는 검증하지 않습니다.
//!
//! ```text
//! JSON ──serde──► DTO ──validate()──► Handler ──► Service
//!        │                 │
//!        └─ 구조 오류 ──────┴─ 제약 위반 ──► AppError (400)
//! ```

pub mod validators;
pub mod users;
pub mod posts;

pub use users::{CreateUserRequest, GetUsersParam, PaginationQuery, PatchUserRequest};
pub use posts::{CreatePostRequest, PatchPostRequest, PostMetaOption};
