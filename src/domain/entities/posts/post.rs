//! Post Entity Implementation
//!
//! 게시물 디렉터리가 반환하는 게시물 레코드입니다. 작성자 조회 결과를 그대로 포함합니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub user: User,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(user: User, title: &str, content: &str) -> Self {
        Self {
            user,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}
