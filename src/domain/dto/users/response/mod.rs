//! # 사용자 응답 DTO 모듈
//!
//! HTTP/세션 계층은 사용자 레코드를 직렬화하기 전에 반드시 [`SafeUser`]로 변환해야 합니다.
//! 원본 `User`는 직렬화 구현을 제공하지 않습니다.

pub mod safe_user;

pub use safe_user::SafeUser;
