//! # Domain Models
//!
//! 요청 DTO와 엔티티가 공유하는 값 타입입니다.

pub mod posts;

pub use posts::*;
