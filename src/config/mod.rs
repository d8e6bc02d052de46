//! # 애플리케이션 설정 모듈
//!
//! 환경변수 기반 설정을 타입별 정적 접근자로 제공합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 미리 로드됩니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//! | `HOST` | `127.0.0.1` | 바인딩 주소 |
//! | `PORT` | `3000` | 바인딩 포트 |
//! | `WORKERS` | `4` | actix 워커 수 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` | 쉼표 구분 Origin 목록 |

pub mod data_config;

pub use data_config::*;
