//! # 데이터 액세스 계층
//!
//! 상수 샘플 데이터를 감싼 읽기 전용 리포지토리입니다.
//! 각 리포지토리는 `RepositoryRegistration`으로 레지스트리에 등록되며
//! 서비스는 `ServiceLocator::get`으로 주입받습니다.
//!
//! - [`users::UserRepository`] - 사용자 요약 목록, 단건 레코드
//! - [`posts::PostRepository`] - 게시물 샘플

pub mod users;
pub mod posts;
