//! 게시물 샘플 데이터 리포지토리
//!
//! 게시물 본문(제목/내용) 샘플을 제공합니다. 작성자는 서비스 계층에서
//! 사용자 조회 결과로 채워집니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::domain::entities::{Post, User};

/// (title, content)
const SAMPLE_POSTS: [(&str, &str); 2] = [
    ("Test Tile", "Test Content"),
    ("Test Tile 2", "Test Content 2"),
];

pub struct PostRepository;

impl PostRepository {
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 샘플 게시물 목록을 주어진 작성자와 묶어 반환합니다.
    pub fn find_all_by_author(&self, author: &User) -> Vec<Post> {
        SAMPLE_POSTS
            .iter()
            .map(|(title, content)| Post::new(author.clone(), title, content))
            .collect()
    }
}

#[async_trait]
impl Repository for PostRepository {
    fn name(&self) -> &str {
        "post_repository"
    }

    fn collection_name(&self) -> &str {
        "posts"
    }

    async fn init(&self) -> AppResult<()> {
        log::info!(
            "📚 {} 샘플 데이터 로드: {}건",
            self.collection_name(),
            SAMPLE_POSTS.len()
        );
        Ok(())
    }
}

fn post_repository_constructor() -> AppResult<Arc<dyn std::any::Any + Send + Sync>> {
    Ok(Arc::new(PostRepository))
}

inventory::submit! {
    RepositoryRegistration {
        name: "post_repository",
        constructor: post_repository_constructor,
    }
}
