//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`user`] - 정규화가 끝난 사용자 엔티티
//! - [`credentials`] - 로컬/외부 자격 증명 태그 유니온과 `AuthMethod`
//! - [`gender`] - 성별 열거형
//! - [`draft`] - 저장 전 초안과 필드 검증
//! - [`normalize`] - 초안 → 엔티티 정규화
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{normalize, UserDraft};
//!
//! // Google 계정: 사용자명이 없으면 자동 생성
//! let user = normalize(UserDraft {
//!     full_name: "Jane Doe".to_string(),
//!     google_id: Some("1180239".to_string()),
//!     ..Default::default()
//! })?;
//! assert!(user.username().starts_with("user_"));
//! ```

pub mod credentials;
pub mod draft;
pub mod gender;
pub mod normalize;
pub mod user;

pub use credentials::{AuthMethod, Credentials, FederatedCredentials, FederatedProvider, LocalCredentials};
pub use draft::UserDraft;
pub use gender::Gender;
pub use normalize::{normalize, synthesize_username};
pub use user::User;
