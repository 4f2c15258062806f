//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장 엔진은 [`UserStore`](users::UserStore) 포트 뒤에 숨겨지며, 애플리케이션 시작 시
//! 구현체를 골라 [`UserRepository`](users::UserRepository)에 주입합니다.
//!
//! # Features
//!
//! - MongoDB 저장소와 sparse 유니크 인덱스 관리
//! - 테스트용 메모리 저장소
//! - 저장 전 정규화를 거치는 단일 쓰기 경로
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserStore, UserRepository};
//!
//! let user_repo = UserRepository::new(Arc::new(MongoUserStore::new(&database)));
//! user_repo.ensure_indexes().await?;
//! ```

pub mod users;
