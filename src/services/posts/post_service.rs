//! # 게시물 디렉터리 서비스
//!
//! 사용자 조회 결과를 샘플 게시물에 묶어 반환합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::entities::Post;
use crate::repositories::posts::PostRepository;
use crate::services::users::UserService;

pub struct PostService {
    user_service: Arc<UserService>,
    post_repo: Arc<PostRepository>,
}

impl PostService {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn new(user_service: Arc<UserService>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            user_service,
            post_repo,
        }
    }

    /// 특정 사용자의 게시물 목록
    ///
    /// 작성자를 조회한 뒤 두 개의 샘플 게시물에 포함시켜 반환합니다.
    pub fn find_all(&self, user_id: i64) -> Vec<Post> {
        let user = self.user_service.find_one_by_id(user_id);

        self.post_repo.find_all_by_author(&user)
    }
}

#[async_trait]
impl Service for PostService {
    fn name(&self) -> &str {
        "post_service"
    }
}

fn post_service_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(PostService::new(
        ServiceLocator::try_get::<UserService>()?,
        ServiceLocator::try_get::<PostRepository>()?,
    )))
}

inventory::submit! {
    ServiceRegistration {
        name: "post_service",
        constructor: post_service_constructor,
    }
}
