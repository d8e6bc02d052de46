//! User Entity Implementation
//!
//! 사용자 디렉터리가 반환하는 사용자 레코드입니다.
//! 목록 조회는 `id` 없이 요약 형태로, 단건 조회는 `id`를 포함한 형태로 직렬화됩니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub email: String,
}

impl User {
    /// 목록 조회용 요약 레코드 (`{firstName, email}`)
    pub fn summary(first_name: &str, email: &str) -> Self {
        Self {
            id: None,
            first_name: first_name.to_string(),
            email: email.to_string(),
        }
    }

    /// 식별자를 포함한 단건 레코드 (`{id, firstName, email}`)
    pub fn with_id(id: i64, first_name: &str, email: &str) -> Self {
        Self {
            id: Some(id),
            ..Self::summary(first_name, email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_serializes_without_id() {
        let user = User::summary("John", "john@doe.com");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "firstName": "John", "email": "john@doe.com" })
        );
    }

    #[test]
    fn test_record_serializes_with_id() {
        let user = User::with_id(1234, "Alice", "alice@doe.com");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "id": 1234, "firstName": "Alice", "email": "alice@doe.com" })
        );
    }
}
