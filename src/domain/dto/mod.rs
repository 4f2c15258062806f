//! # Data Transfer Objects
//!
//! ## 변환 패턴
//! - **Request → Draft**: `impl From<NewLocalUser> for UserDraft`, `GoogleProfile::into_draft`
//! - **Entity → Response**: `impl From<&User> for SafeUser`
//!
//! 날짜/시간은 응답에서 ISO 8601 문자열로 직렬화됩니다.

pub mod users;

pub use users::*;
