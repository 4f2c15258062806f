//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 로컬 회원가입 (해시된 비밀번호 입력)
//! - Google 계정 조회/연결/생성
//! - 프로필 수정 및 비밀번호 재설정 토큰 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(user_repo));
//! let user = user_service.find_or_create_google_user(profile).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
