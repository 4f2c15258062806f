//! # Configuration Module
//!
//! 사용자 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, MongoDB 연결, 로깅 설정
//! - [`user_config`] - 사용자 모델 설정 (재설정 토큰 유효 시간)
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"   # development, test, staging, production
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_accounts"
//! export USERS_COLLECTION="users"
//!
//! # 비밀번호 재설정
//! export RESET_TOKEN_TTL_MINUTES="60"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 환경 변수에 따라 `main.rs`에서 로드됩니다.

pub mod data_config;
pub mod user_config;

pub use data_config::*;
pub use user_config::*;
