//! 사용자 계정 백엔드
//!
//! 인증 계층이 사용하는 사용자 계정 엔티티와 영속화 계층입니다.
//! 로컬(사용자명 + 해시된 비밀번호) 가입과 Google 계정 가입을 모두 지원합니다.
//!
//! # Features
//!
//! - **필드 검증**: `validator` 기반 필드 규칙과 조건부 필수 항목
//! - **저장 전 정규화**: 인증 방식 결정, 사용자명 자동 생성, 이메일 소문자 변환
//! - **안전 투영**: 비밀번호/Google ID/재설정 토큰을 제외한 외부 노출용 형태
//! - **Google 조회/생성**: Google ID → 이메일 연결 → 신규 생성
//! - **MongoDB**: sparse 유니크 인덱스를 사용하는 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 가입/조회/수정 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← normalize() 후 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserStore     │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_backend::repositories::users::{InMemoryUserStore, UserRepository};
//! use user_account_backend::services::users::UserService;
//!
//! let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));
//! let user_service = UserService::new(Arc::new(repo));
//!
//! let user = user_service.find_or_create_google_user(profile).await?;
//! let safe = user.to_safe();
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
