//! # 사용자 저장소 포트
//!
//! 저장 엔진이 제공해야 하는 기본 연산(생성/조회/교체/삭제)과 유니크 제약 보장을
//! 추상화합니다. 운영 환경에서는 [`MongoUserStore`](super::mongo_store::MongoUserStore),
//! 테스트에서는 [`InMemoryUserStore`](super::memory_store::InMemoryUserStore)를 주입합니다.
//!
//! ## 구현체가 지켜야 할 계약
//!
//! - `username`, `googleId`, `email`은 값이 있을 때만 컬렉션 전체에서 유일해야 합니다.
//! - 유니크 제약 위반은 `AppError::DuplicateKey { field }`로 보고합니다.
//! - 그 밖의 저장소 오류는 `AppError::DatabaseError`로 보고합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use crate::errors::AppResult;
use crate::repositories::users::document::UserDocument;

/// 단일 사용자 조회 조건
#[derive(Debug, Clone, PartialEq)]
pub enum UserFilter {
    Id(ObjectId),
    Username(String),
    GoogleId(String),
    /// 이미 소문자로 정규화된 이메일
    Email(String),
    ResetToken(String),
}

impl UserFilter {
    /// MongoDB 쿼리 문서로 변환
    pub fn to_document(&self) -> Document {
        match self {
            UserFilter::Id(id) => doc! { "_id": id },
            UserFilter::Username(username) => doc! { "username": username },
            UserFilter::GoogleId(google_id) => doc! { "googleId": google_id },
            UserFilter::Email(email) => doc! { "email": email },
            UserFilter::ResetToken(token) => doc! { "resetPasswordToken": token },
        }
    }

    /// 메모리 내 문서가 조건에 맞는지 확인
    pub fn matches(&self, document: &UserDocument) -> bool {
        match self {
            UserFilter::Id(id) => &document.id == id,
            UserFilter::Username(username) => document.username.as_ref() == Some(username),
            UserFilter::GoogleId(google_id) => document.google_id.as_ref() == Some(google_id),
            UserFilter::Email(email) => document.email.as_ref() == Some(email),
            UserFilter::ResetToken(token) => document.reset_password_token.as_ref() == Some(token),
        }
    }
}

/// 사용자 저장 엔진 포트
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 문서를 저장합니다.
    async fn insert(&self, document: &UserDocument) -> AppResult<()>;

    /// 같은 `_id`의 문서를 교체합니다. 대상이 없으면 `Ok(false)`.
    async fn replace(&self, document: &UserDocument) -> AppResult<bool>;

    async fn find_one(&self, filter: &UserFilter) -> AppResult<Option<UserDocument>>;

    /// 문서를 삭제합니다. 삭제된 문서가 없으면 `Ok(false)`.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    /// 유니크/조회 인덱스를 준비합니다.
    async fn ensure_indexes(&self) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_documents_use_stored_field_names() {
        assert_eq!(
            UserFilter::GoogleId("g-1".to_string()).to_document(),
            doc! { "googleId": "g-1" }
        );
        assert_eq!(
            UserFilter::ResetToken("t".to_string()).to_document(),
            doc! { "resetPasswordToken": "t" }
        );
    }
}
