//! 사용자 조회 경로/쿼리 파라미터

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::config::PaginationDefaults;

/// 사용자 조회 필터 (선택적 숫자 `id`)
///
/// `GET /users`는 빈 필터로, `GET /users/{id}`는 경로의 정수 `id`로 채워집니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUsersParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl GetUsersParam {
    pub fn by_id(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// `GET /users` 페이지네이션 쿼리
///
/// 값은 서비스까지 전달되지만 샘플 데이터에는 적용되지 않습니다.
/// 생략된 값은 기본값(limit 10, page 1)을 사용하고, 정수가 아닌 값은
/// 파라미터 이름과 함께 `invalid_type`으로 보고됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationQuery {
    pub limit: i64,
    pub page: i64,
}

impl PaginationQuery {
    /// 원시 쿼리 맵에서 페이지네이션 값을 읽습니다. 잘못된 파라미터를 모두 수집합니다.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let limit = parse_integer(params, "limit", PaginationDefaults::limit(), &mut errors);
        let page = parse_integer(params, "page", PaginationDefaults::page(), &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self { limit, page })
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            limit: PaginationDefaults::limit(),
            page: PaginationDefaults::page(),
        }
    }
}

fn parse_integer(
    params: &HashMap<String, String>,
    name: &'static str,
    default: i64,
    errors: &mut ValidationErrors,
) -> i64 {
    let Some(raw) = params.get(name) else {
        return default;
    };

    raw.trim().parse::<i64>().unwrap_or_else(|e| {
        let mut error = ValidationError::new("invalid_type").with_message(Cow::Owned(format!(
            "{}는 정수여야 합니다 (입력값: {:?}, {})",
            name, raw, e
        )));
        error.add_param(Cow::Borrowed("value"), raw);
        errors.add(name, error);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pagination_defaults_apply() {
        let query = PaginationQuery::from_params(&HashMap::new()).unwrap();
        assert_eq!(query, PaginationQuery { limit: 10, page: 1 });
        assert_eq!(query, PaginationQuery::default());
    }

    #[test]
    fn test_pagination_reads_integers() {
        let query = PaginationQuery::from_params(&params(&[("limit", "5"), ("page", "3")])).unwrap();
        assert_eq!(query, PaginationQuery { limit: 5, page: 3 });
    }

    #[test]
    fn test_pagination_reports_each_bad_parameter() {
        let errors =
            PaginationQuery::from_params(&params(&[("limit", "abc"), ("page", "1.5")])).unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["limit"][0].code, "invalid_type");
        assert_eq!(fields["page"][0].code, "invalid_type");
    }

    #[test]
    fn test_get_users_param_is_optional() {
        let param: GetUsersParam = serde_json::from_str("{}").unwrap();
        assert_eq!(param.id, None);

        let param: GetUsersParam = serde_json::from_str(r#"{"id": 1234}"#).unwrap();
        assert_eq!(param, GetUsersParam::by_id(1234));
    }
}
