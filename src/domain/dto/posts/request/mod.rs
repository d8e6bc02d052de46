//! # 게시물 관련 요청 DTO 모듈

pub mod meta_option;
pub mod create_post;
pub mod patch_post;

pub use meta_option::PostMetaOption;
pub use create_post::CreatePostRequest;
pub use patch_post::PatchPostRequest;
