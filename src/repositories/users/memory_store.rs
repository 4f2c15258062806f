//! 메모리 기반 사용자 저장소
//!
//! 테스트와 로컬 실행에 사용합니다. MongoDB의 sparse 유니크 인덱스와 같은 규칙으로
//! `username`, `googleId`, `email` 중복을 거부합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{
    document::UserDocument,
    store::{UserFilter, UserStore},
};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    documents: RwLock<HashMap<ObjectId, UserDocument>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> AppResult<usize> {
        let documents = self.documents.read().map_err(|_| Self::lock_error())?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock_error() -> AppError {
        AppError::InternalError("In-memory user store lock poisoned".to_string())
    }
}

type UniqueValue = fn(&UserDocument) -> Option<&String>;

fn username_of(document: &UserDocument) -> Option<&String> {
    document.username.as_ref()
}

fn google_id_of(document: &UserDocument) -> Option<&String> {
    document.google_id.as_ref()
}

fn email_of(document: &UserDocument) -> Option<&String> {
    document.email.as_ref()
}

const UNIQUE_FIELDS: [(&str, UniqueValue); 3] = [
    ("username", username_of),
    ("googleId", google_id_of),
    ("email", email_of),
];

/// 다른 문서와 겹치는 유니크 필드를 찾습니다. 같은 `_id`는 비교하지 않습니다.
fn conflicting_field(
    documents: &HashMap<ObjectId, UserDocument>,
    candidate: &UserDocument,
) -> Option<&'static str> {
    UNIQUE_FIELDS.iter().find_map(|(field, value_of)| {
        let value = value_of(candidate)?;
        documents
            .values()
            .filter(|other| other.id != candidate.id)
            .any(|other| value_of(other) == Some(value))
            .then_some(*field)
    })
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, document: &UserDocument) -> AppResult<()> {
        let mut documents = self.documents.write().map_err(|_| Self::lock_error())?;

        if documents.contains_key(&document.id) {
            return Err(AppError::DuplicateKey { field: "_id" });
        }
        if let Some(field) = conflicting_field(&documents, document) {
            return Err(AppError::DuplicateKey { field });
        }

        documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn replace(&self, document: &UserDocument) -> AppResult<bool> {
        let mut documents = self.documents.write().map_err(|_| Self::lock_error())?;

        if !documents.contains_key(&document.id) {
            return Ok(false);
        }
        if let Some(field) = conflicting_field(&documents, document) {
            return Err(AppError::DuplicateKey { field });
        }

        documents.insert(document.id, document.clone());
        Ok(true)
    }

    async fn find_one(&self, filter: &UserFilter) -> AppResult<Option<UserDocument>> {
        let documents = self.documents.read().map_err(|_| Self::lock_error())?;

        Ok(documents.values().find(|document| filter.matches(document)).cloned())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut documents = self.documents.write().map_err(|_| Self::lock_error())?;

        Ok(documents.remove(id).is_some())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        // 유니크 검사는 쓰기 시점에 수행
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::entities::users::{normalize, UserDraft};

    fn document(username: &str, email: Option<&str>) -> UserDocument {
        let user = normalize(UserDraft {
            full_name: "Store Test".to_string(),
            username: Some(username.to_string()),
            password: Some("hashed-secret".to_string()),
            email: email.map(str::to_string),
            ..Default::default()
        })
        .unwrap();
        UserDocument::from(&user)
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_username() {
        let store = InMemoryUserStore::new();
        store.insert(&document("alice", None)).await.unwrap();

        let err = store.insert(&document("alice", None)).await.unwrap_err();
        assert_eq!(err.duplicate_field(), Some("username"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_missing_values_do_not_conflict() {
        let store = InMemoryUserStore::new();
        store.insert(&document("alice", None)).await.unwrap();
        store.insert(&document("bob", None)).await.unwrap();

        assert_eq!(store.len().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_replace_ignores_own_values() {
        let store = InMemoryUserStore::new();
        let mut alice = document("alice", Some("alice@example.com"));
        store.insert(&alice).await.unwrap();

        alice.full_name = "Alice Renamed".to_string();
        assert!(store.replace(&alice).await.unwrap());

        let found = store.find_one(&UserFilter::Id(alice.id)).await.unwrap().unwrap();
        assert_eq!(found.full_name, "Alice Renamed");
    }

    #[actix_web::test]
    async fn test_replace_rejects_taken_email() {
        let store = InMemoryUserStore::new();
        store.insert(&document("alice", Some("shared@example.com"))).await.unwrap();
        let mut bob = document("bob", None);
        store.insert(&bob).await.unwrap();

        bob.email = Some("shared@example.com".to_string());
        let err = store.replace(&bob).await.unwrap_err();
        assert_eq!(err.duplicate_field(), Some("email"));
    }

    #[actix_web::test]
    async fn test_replace_and_delete_missing_document() {
        let store = InMemoryUserStore::new();
        let ghost = document("ghost", None);

        assert!(!store.replace(&ghost).await.unwrap());
        assert!(!store.delete(&ghost.id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryUserStore::new());
        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.documents.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(store.len(), Err(AppError::InternalError(_))));
        assert!(matches!(store.is_empty(), Err(AppError::InternalError(_))));
        assert!(matches!(
            store.find_one(&UserFilter::Username("alice".to_string())).await,
            Err(AppError::InternalError(_))
        ));
    }
}
