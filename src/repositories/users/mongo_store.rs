//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 [`UserDocument`]를 저장합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `username_unique` | `username` | unique, sparse |
//! | `google_id_unique` | `googleId` | unique, sparse |
//! | `email_unique` | `email` | unique, sparse |
//! | `created_at_desc` | `createdAt: -1` | |
//! | `reset_token_lookup` | `resetPasswordToken` | sparse |
//!
//! 유니크 인덱스 위반(E11000)은 인덱스 이름으로 필드를 판별해
//! `AppError::DuplicateKey`로 변환합니다.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{
    document::UserDocument,
    store::{UserFilter, UserStore},
};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 이름 → 문서 필드명
const UNIQUE_INDEXES: [(&str, &str); 3] = [
    ("username_unique", "username"),
    ("google_id_unique", "googleId"),
    ("email_unique", "email"),
];

/// MongoDB 기반 [`UserStore`] 구현
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    /// 설정된 사용자 컬렉션(`USERS_COLLECTION`, 기본값 `users`)을 사용합니다.
    pub fn new(database: &Database) -> Self {
        Self::with_collection(database, &DatabaseConfig::users_collection())
    }

    pub fn with_collection(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection(collection_name),
        }
    }

    fn index_models() -> Vec<IndexModel> {
        let mut indexes: Vec<IndexModel> = UNIQUE_INDEXES
            .iter()
            .map(|(name, field)| {
                let mut keys = Document::new();
                keys.insert(*field, 1);

                IndexModel::builder()
                    .keys(keys)
                    .options(IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name(name.to_string())
                        .build())
                    .build()
            })
            .collect();

        indexes.push(IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build());

        indexes.push(IndexModel::builder()
            .keys(doc! { "resetPasswordToken": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("reset_token_lookup".to_string())
                .build())
            .build());

        indexes
    }
}

/// 드라이버 에러를 애플리케이션 에러로 변환합니다.
fn map_mongo_error(error: MongoError) -> AppError {
    let duplicate_message = match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE => Some(write_error.message.as_str()),
        ErrorKind::Command(command_error)
            if command_error.code == DUPLICATE_KEY_CODE => Some(command_error.message.as_str()),
        _ => None,
    };

    match duplicate_message {
        Some(message) => AppError::DuplicateKey {
            field: duplicate_field_from_message(message),
        },
        None => AppError::DatabaseError(error.to_string()),
    }
}

/// E11000 메시지에서 위반된 인덱스를 찾아 필드명을 돌려줍니다.
fn duplicate_field_from_message(message: &str) -> &'static str {
    UNIQUE_INDEXES
        .iter()
        .find(|(index, _)| message.contains(index))
        .map(|(_, field)| *field)
        .unwrap_or("unknown")
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, document: &UserDocument) -> AppResult<()> {
        self.collection
            .insert_one(document)
            .await
            .map_err(map_mongo_error)?;

        debug!("사용자 문서 저장: {}", document.id.to_hex());
        Ok(())
    }

    async fn replace(&self, document: &UserDocument) -> AppResult<bool> {
        let result = self.collection
            .replace_one(doc! { "_id": document.id }, document)
            .await
            .map_err(map_mongo_error)?;

        Ok(result.matched_count > 0)
    }

    async fn find_one(&self, filter: &UserFilter) -> AppResult<Option<UserDocument>> {
        self.collection
            .find_one(filter.to_document())
            .await
            .map_err(map_mongo_error)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection
            .create_indexes(Self::index_models())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("사용자 컬렉션 인덱스 준비 완료: {}", self.collection.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_from_server_message() {
        let message = "E11000 duplicate key error collection: app.users index: google_id_unique dup key: { googleId: \"g-1\" }";
        assert_eq!(duplicate_field_from_message(message), "googleId");

        let message = "E11000 duplicate key error collection: app.users index: email_unique dup key: { email: \"a@b.c\" }";
        assert_eq!(duplicate_field_from_message(message), "email");
    }

    #[test]
    fn test_unknown_index_is_reported_as_unknown() {
        assert_eq!(duplicate_field_from_message("E11000 index: _id_"), "unknown");
    }

    #[test]
    fn test_unique_indexes_are_sparse() {
        let models = MongoUserStore::index_models();
        assert_eq!(models.len(), 5);

        for model in models.iter().take(UNIQUE_INDEXES.len()) {
            let options = model.options.as_ref().unwrap();
            assert_eq!(options.unique, Some(true));
            assert_eq!(options.sparse, Some(true));
        }
    }
}
