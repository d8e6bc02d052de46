//! # 사용자 관련 요청 DTO 모듈

pub mod create_user;
pub mod patch_user;
pub mod get_users_param;

pub use create_user::CreateUserRequest;
pub use patch_user::PatchUserRequest;
pub use get_users_param::{GetUsersParam, PaginationQuery};
