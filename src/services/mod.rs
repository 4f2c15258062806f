//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시 리포지토리를 명시적으로 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(UserRepository::new(store)));
//! ```

pub mod users;
