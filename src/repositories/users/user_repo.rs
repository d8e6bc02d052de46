//! 사용자 샘플 데이터 리포지토리
//!
//! 영구 저장소 대신 상수 샘플 레코드를 제공하는 읽기 전용 데이터 액세스 컴포넌트입니다.
//! 서비스는 이 타입을 통해서만 사용자 데이터에 접근하므로, 실제 저장소로 교체해도
//! 핸들러와 서비스 시그니처는 바뀌지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::domain::entities::User;

/// 단건 조회 시 항상 반환되는 샘플 사용자 ID
pub const SAMPLE_USER_ID: i64 = 1234;

pub struct UserRepository {
    summaries: Vec<User>,
    record: User,
}

impl UserRepository {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn new() -> Self {
        Self {
            summaries: vec![
                User::summary("John", "john@doe.com"),
                User::summary("Alice", "alice@doe.com"),
            ],
            record: User::with_id(SAMPLE_USER_ID, "Alice", "alice@doe.com"),
        }
    }

    /// 전체 사용자 요약 목록
    pub fn find_all(&self) -> Vec<User> {
        self.summaries.clone()
    }

    /// ID와 무관하게 고정 샘플 레코드를 반환합니다.
    pub fn find_by_id(&self, id: i64) -> User {
        log::debug!("사용자 조회 요청 id={} → 샘플 레코드 반환", id);
        self.record.clone()
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        "users"
    }

    async fn init(&self) -> AppResult<()> {
        log::info!(
            "📚 {} 샘플 데이터 로드: 요약 {}건, 단건 레코드 id={}",
            self.collection_name(),
            self.summaries.len(),
            SAMPLE_USER_ID
        );
        Ok(())
    }
}

fn user_repository_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(UserRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_returns_two_summaries() {
        let users = UserRepository::instance().find_all();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "John");
        assert_eq!(users[1].email, "alice@doe.com");
        assert!(users.iter().all(|u| u.id.is_none()));
    }

    #[test]
    fn test_find_by_id_ignores_id() {
        let repo = UserRepository::instance();
        assert_eq!(repo.find_by_id(1), repo.find_by_id(9999));
        assert_eq!(repo.find_by_id(1).id, Some(SAMPLE_USER_ID));
    }

    #[actix_web::test]
    async fn test_repository_metadata() {
        let repo = UserRepository::instance();
        assert_eq!(repo.name(), "user_repository");
        assert_eq!(repo.collection_name(), "users");
        assert!(repo.init().await.is_ok());
    }
}
