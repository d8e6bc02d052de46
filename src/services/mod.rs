//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 `instance()`로 접근하는 싱글톤이며, 의존성은
//! `ServiceLocator::get`으로 해결됩니다. 서비스는 입력을 검증하지 않습니다.
//!
//! ```text
//! PostService ──► UserService ──► AuthService
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, posts::PostService};
//!
//! let users = UserService::instance().find_all(&GetUsersParam::default(), 10, 1);
//! let posts = PostService::instance().find_all(1234);
//! ```

pub mod app_service;
pub mod users;
pub mod auth;
pub mod posts;
