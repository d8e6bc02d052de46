//! 블로그 서비스 백엔드
//!
//! 사용자와 게시물에 대한 CRUD 형태의 HTTP 엔드포인트를 제공하는 서비스입니다.
//! 비즈니스 로직은 고정된 샘플 데이터를 반환하는 자리표시자이며,
//! 핵심은 **요청 검증**과 **모듈 간 의존성 배선**입니다.
//!
//! # Features
//!
//! - **요청 검증**: `validator` derive 기반 필드 제약 검증, 위반 필드 전체 보고
//! - **서비스 레지스트리**: `inventory` 기반 컴포넌트 등록과 지연 싱글톤 생성
//! - **스텁 인증**: 항상 성공하는 인증 서비스 (라우트에는 적용하지 않음)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /posts, /, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 추출 + 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← PostService → UserService → AuthService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 고정 샘플 데이터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blog_service_backend::services::posts::PostService;
//!
//! let posts = PostService::instance().find_all(1234);
//! assert_eq!(posts.len(), 2);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
