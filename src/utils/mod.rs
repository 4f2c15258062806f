//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 이메일 정규화
//! - [`time_utils`] - `bson::DateTime` ↔ `chrono` 변환

pub mod string_utils;
pub mod time_utils;
