//! # 게시물 DTO 모듈
//!
//! | DTO | 엔드포인트 |
//! |-----|-----------|
//! | [`CreatePostRequest`] | `POST /posts` |
//! | [`PatchPostRequest`] | `PATCH /posts` |

pub mod request;

pub use request::*;
