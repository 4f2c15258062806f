//! # 사용자 관련 입력 DTO 모듈
//!
//! 외부 협력자(OAuth 클라이언트, 인증 계층, HTTP 계층)로부터 들어오는 데이터를
//! 구조화된 Rust 타입으로 표현합니다. `serde`로 역직렬화되며, 필요한 경우
//! `validator`로 검증합니다.
//!
//! - [`GoogleProfile`] - Google 로그인 프로필
//! - [`NewLocalUser`] - 로컬 회원가입 (해시된 비밀번호 포함)
//! - [`ProfileUpdate`] - 프로필 부분 수정

pub mod google_profile;
pub mod local_signup;
pub mod profile_update;

pub use google_profile::GoogleProfile;
pub use local_signup::NewLocalUser;
pub use profile_update::ProfileUpdate;
