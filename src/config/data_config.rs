//! 서버 및 요청 처리 설정 관리 모듈
//!
//! 서버 바인딩, Rate Limiting, CORS, 페이지네이션 기본값을 관리합니다.

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_name(&value))
            .unwrap_or(Environment::Production)
    }

    /// 알 수 없는 이름은 `Production`으로 취급합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경변수를 읽어 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 기본값: 3000
    pub fn port() -> u16 {
        env_or("PORT", 3000)
    }

    /// 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 기본값: 4
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    pub fn from_env() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", Self::DEFAULT_PER_SECOND).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", Self::DEFAULT_BURST_SIZE).max(1),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    pub const DEFAULT_ORIGINS: &'static str = "http://localhost:3000";

    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string());
        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// `GET /users` 페이지네이션 기본값
///
/// 값은 받아서 서비스까지 전달하지만 샘플 데이터에는 적용되지 않습니다.
pub struct PaginationDefaults;

impl PaginationDefaults {
    pub const LIMIT: i64 = 10;
    pub const PAGE: i64 = 1;

    pub fn limit() -> i64 {
        Self::LIMIT
    }

    pub fn page() -> i64 {
        Self::PAGE
    }
}
