//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 계정의 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User, Credentials, UserDraft, normalize
//! └── DTOs      - 외부 입력(GoogleProfile, NewLocalUser, ProfileUpdate)과
//!                 외부 노출용 안전 투영(SafeUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
