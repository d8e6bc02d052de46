//! # Domain Entities
//!
//! 리포지토리와 서비스 사이를 오가는 레코드 타입입니다.
//! 현재 저장소는 상수 샘플 데이터이므로 엔티티는 읽기 전용으로만 생성됩니다.
//!
//! ```text
//! Post ──embeds──► User
//! ```

pub mod users;
pub mod posts;

pub use users::User;
pub use posts::Post;
