//! 게시물 엔티티 모듈

pub mod post;

pub use post::Post;
