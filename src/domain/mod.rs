//! # Domain Layer
//!
//! - [`entities`] - 디렉터리 서비스가 반환하는 레코드 (`User`, `Post`)
//! - [`models`] - 공유 값 타입 (`PostType`, `PostStatus`)
//! - [`dto`] - 요청 DTO와 검증 규칙

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Post, User};
pub use models::{PostStatus, PostType};
