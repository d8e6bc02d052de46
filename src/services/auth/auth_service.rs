//! # 인증 서비스 (Stand-in)
//!
//! 실제 자격 증명 검증 없이 고정 값을 반환하는 인증 협력자입니다.
//! 라우트에는 노출되지 않으며, 다른 서비스에 주입되는 용도로만 사용됩니다.
//!
//! ## 의존성 방향
//!
//! `AuthService`는 사용자 조회가 필요하지만 `UserService`가 아닌 `UserRepository`에
//! 의존합니다. `UserService`가 `AuthService`를 주입받으므로 반대 방향 참조는
//! 레지스트리에서 순환 참조로 거부됩니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::repositories::users::{SAMPLE_USER_ID, UserRepository};

/// `login`이 항상 반환하는 토큰
pub const SAMPLE_TOKEN: &str = "SAMPLE_TOKEN";

pub struct AuthService {
    user_repo: Arc<UserRepository>,
}

impl AuthService {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 로그인
    ///
    /// 인자와 무관하게 샘플 사용자를 조회한 뒤 결과를 버리고 고정 토큰을 반환합니다.
    pub fn login(&self, email: &str, _password: &str, id: i64) -> String {
        let _user = self.user_repo.find_by_id(SAMPLE_USER_ID);
        log::debug!("로그인 요청 email={}, id={}", email, id);

        SAMPLE_TOKEN.to_string()
    }

    /// 인증 여부. 항상 `true`입니다.
    pub fn is_auth(&self) -> bool {
        true
    }
}

#[async_trait]
impl Service for AuthService {
    fn name(&self) -> &str {
        "auth_service"
    }
}

fn auth_service_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(AuthService::new(ServiceLocator::try_get::<UserRepository>()?)))
}

inventory::submit! {
    ServiceRegistration {
        name: "auth_service",
        constructor: auth_service_constructor,
    }
}
