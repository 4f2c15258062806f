//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 [`UserStore`](store::UserStore) 구현체를
//! 주입받아 동작합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserRepository};
//!
//! let user_repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod document;
pub mod memory_store;
pub mod mongo_store;
pub mod store;
pub mod user_repo;

pub use document::UserDocument;
pub use memory_store::InMemoryUserStore;
pub use mongo_store::MongoUserStore;
pub use store::{UserFilter, UserStore};
pub use user_repo::UserRepository;
