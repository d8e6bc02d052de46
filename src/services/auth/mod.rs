//! 인증 서비스 모듈

pub mod auth_service;

pub use auth_service::*;
