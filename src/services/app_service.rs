//! 애플리케이션 수준 서비스
//!
//! 인사말을 제공합니다. 라우트에서는 사용하지 않고 시작 로그에만 출력됩니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};

pub struct AppService;

impl AppService {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn get_hello(&self) -> &'static str {
        "Hello Menoko OG!"
    }
}

#[async_trait]
impl Service for AppService {
    fn name(&self) -> &str {
        "app_service"
    }
}

fn app_service_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(AppService))
}

inventory::submit! {
    ServiceRegistration {
        name: "app_service",
        constructor: app_service_constructor,
    }
}
