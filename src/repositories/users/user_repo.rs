//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 저장 엔진은 [`UserStore`] 구현체로 주입받으며, 모든 쓰기 경로에서
//! 저장 직전에 [`normalize`]를 실행합니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: `UserRepository::new(store)`
//! - **저장 전 정규화**: 생성/저장/수정 모두 같은 검증과 자격 증명 규칙을 거침
//! - **대소문자 무시 이메일 조회**: 저장 시와 조회 시 모두 소문자로 변환

use std::sync::Arc;
use log::debug;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::{normalize, User, UserDraft};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{
    document::UserDocument,
    store::{UserFilter, UserStore},
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **InvalidFields / ConsistencyError**: 정규화 단계에서 거부된 초안
/// - **DuplicateKey**: `username`, `googleId`, `email` 유니크 제약 위반
/// - **NotFound**: 수정 대상 레코드가 없음
/// - **DatabaseError**: 저장 엔진 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
/// let repo = UserRepository::new(store);
///
/// let user = repo.create(UserDraft {
///     full_name: "Jane Doe".to_string(),
///     google_id: Some("1180239".to_string()),
///     ..Default::default()
/// }).await?;
///
/// let found = repo.find_by_google_id("1180239").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 16진수 ObjectId 문자열을 파싱합니다.
    pub fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError(format!("Invalid user id: {}", id)))
    }

    /// 초안을 정규화하여 새 레코드로 저장합니다.
    pub async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let user = normalize(draft)?;
        self.store.insert(&UserDocument::from(&user)).await?;

        debug!("사용자 생성: {} ({})", user.id_string(), user.auth_method());
        Ok(user)
    }

    /// 기존 레코드를 다시 정규화하여 저장합니다.
    ///
    /// 변경된 필드와 관계없이 검증과 자격 증명 검사를 다시 수행합니다.
    pub async fn save(&self, user: &User) -> AppResult<User> {
        let normalized = normalize(user.to_draft())?;

        if !self.store.replace(&UserDocument::from(&normalized)).await? {
            return Err(AppError::NotFound(format!("User {} not found", normalized.id_string())));
        }

        debug!("사용자 저장: {}", normalized.id_string());
        Ok(normalized)
    }

    /// 레코드를 초안으로 불러와 수정한 뒤 저장합니다.
    pub async fn update<F>(&self, id: &ObjectId, edit: F) -> AppResult<User>
    where
        F: FnOnce(&mut UserDraft) + Send,
    {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id.to_hex())))?;

        let mut draft = current.to_draft();
        edit(&mut draft);

        let updated = normalize(draft)?;
        if !self.store.replace(&UserDocument::from(&updated)).await? {
            return Err(AppError::NotFound(format!("User {} not found", id.to_hex())));
        }

        Ok(updated)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.find_one(UserFilter::Id(*id)).await
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(UserFilter::Username(username.trim().to_string())).await
    }

    /// 이메일로 조회합니다. 입력은 소문자로 변환하여 비교합니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(UserFilter::Email(email.trim().to_lowercase())).await
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        self.find_one(UserFilter::GoogleId(google_id.trim().to_string())).await
    }

    pub async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        self.find_one(UserFilter::ResetToken(token.to_string())).await
    }

    /// 레코드를 삭제합니다. 삭제된 레코드가 없으면 `Ok(false)`.
    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            debug!("사용자 삭제: {}", id.to_hex());
        }
        Ok(deleted)
    }

    /// 저장 엔진의 인덱스를 준비합니다. 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.store.ensure_indexes().await
    }

    async fn find_one(&self, filter: UserFilter) -> AppResult<Option<User>> {
        self.store
            .find_one(&filter)
            .await?
            .map(User::try_from)
            .transpose()
    }
}
