//! # 사용자 디렉터리 서비스
//!
//! 사용자 목록과 단건 조회를 제공합니다. 데이터는 `UserRepository`의 샘플 레코드이며,
//! 목록 조회 시 `AuthService::is_auth` 결과를 기록만 하고 접근 제어에는 사용하지 않습니다.
//!
//! ```text
//! UserService ──► AuthService ──► UserRepository
//!      └──────────────────────────► UserRepository
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::GetUsersParam;
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::AuthService;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 연산은 실패하지 않습니다. 입력 검증은 핸들러의 책임입니다.
pub struct UserService {
    auth_service: Arc<AuthService>,
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn new(auth_service: Arc<AuthService>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            auth_service,
            user_repo,
        }
    }

    /// 사용자 목록 조회
    ///
    /// `params`, `limit`, `page`는 현재 결과에 영향을 주지 않습니다.
    pub fn find_all(&self, params: &GetUsersParam, limit: i64, page: i64) -> Vec<User> {
        let is_auth = self.auth_service.is_auth();
        log::info!("isAuth: {}", is_auth);
        log::debug!("find_all params={:?}, limit={}, page={}", params, limit, page);

        self.user_repo.find_all()
    }

    /// ID로 사용자 조회. `id`와 무관하게 고정 샘플 레코드를 반환합니다.
    pub fn find_one_by_id(&self, id: i64) -> User {
        self.user_repo.find_by_id(id)
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }
}

fn user_service_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(UserService::new(
        ServiceLocator::try_get::<AuthService>()?,
        ServiceLocator::try_get::<UserRepository>()?,
    )))
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_ignores_filter_and_pagination() {
        let service = UserService::instance();

        let default_page = service.find_all(&GetUsersParam::default(), 10, 1);
        let limited = service.find_all(&GetUsersParam::by_id(7), 1, 99);

        assert_eq!(default_page.len(), 2);
        assert_eq!(default_page, limited);
    }

    #[test]
    fn test_find_one_by_id_returns_fixed_record() {
        let service = UserService::instance();

        let expected = User::with_id(1234, "Alice", "alice@doe.com");
        assert_eq!(service.find_one_by_id(1234), expected);
        assert_eq!(service.find_one_by_id(9999), expected);
    }

    #[test]
    fn test_constructed_with_explicit_dependencies() {
        let repo = UserRepository::instance();
        let service = UserService::new(Arc::new(AuthService::new(repo.clone())), repo);

        assert_eq!(service.find_all(&GetUsersParam::default(), 10, 1).len(), 2);
    }
}
