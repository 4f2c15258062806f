//! # User Data Transfer Objects Module
//!
//! 사용자 계층 경계를 넘나드는 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── google_profile.rs   # OAuth 클라이언트 → Google 가입/로그인
//! │   ├── local_signup.rs     # 인증 계층 → 로컬 회원가입
//! │   └── profile_update.rs   # 프로필 부분 수정
//! └── response/
//!     └── safe_user.rs        # 외부 노출용 안전 투영
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
