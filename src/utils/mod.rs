//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 필드 이름 변환 등 문자열 처리
//! - [`display_terminal`] - 시작 시 터미널 출력 포맷팅

pub mod string_utils;
pub mod display_terminal;
