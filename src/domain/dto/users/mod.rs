//! # 사용자 DTO 모듈
//!
//! | DTO | 엔드포인트 |
//! |-----|-----------|
//! | [`CreateUserRequest`] | `POST /users` |
//! | [`PatchUserRequest`] | `PATCH /users` |
//! | [`GetUsersParam`] | `GET /users/{id}` |
//! | [`PaginationQuery`] | `GET /users?limit=&page=` |

pub mod request;

pub use request::*;
