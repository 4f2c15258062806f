//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 로컬 가입, Google 계정 조회/생성, 프로필 수정, 비밀번호 재설정, 삭제를 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │  Google Signup  │  │  Account Mgmt   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Local Signup  │  │ • By googleId   │  │ • Profile Edit  │  │
//! │  │ • Safe Project  │  │ • Link by Email │  │ • Reset Token   │  │
//! │  │                 │  │ • Create New    │  │ • Delete        │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      UserRepository                             │
//! │ • normalize() before every write                                │
//! │ • UserStore (MongoDB / in-memory)                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 원칙
//!
//! - 비밀번호는 이 계층에 들어오기 전에 해싱되어 있어야 합니다.
//! - 외부로 나가는 사용자 데이터는 [`SafeUser`] 투영만 사용합니다.

use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::DateTime;
use validator::Validate;
use crate::config::UserModelConfig;
use crate::domain::{
    dto::users::{
        request::{GoogleProfile, NewLocalUser, ProfileUpdate},
        response::SafeUser,
    },
    entities::users::{User, UserDraft},
};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::utils::time_utils::expires_after;

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// - **InvalidFields**: 필드 검증 실패 (실패한 필드 목록 포함)
/// - **ConsistencyError**: 로컬 계정의 자격 증명 누락
/// - **DuplicateKey**: 사용자명/Google ID/이메일 중복
/// - **GoogleUser**: Google 조회/생성 흐름의 모든 실패 (원인 보존)
/// - **AuthenticationError**: 만료되었거나 알 수 없는 재설정 토큰
/// - **NotFound**: 대상 사용자 없음
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = Arc::new(UserRepository::new(store));
/// let user_service = UserService::new(repo);
///
/// let user = user_service.find_or_create_google_user(GoogleProfile {
///     google_id: "109876543210987654321".to_string(),
///     email: Some("Jane.Doe@gmail.com".to_string()),
///     full_name: "Jane Doe".to_string(),
///     profile_pic: None,
/// }).await?;
///
/// let body = serde_json::to_string(&user.to_safe())?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn repository(&self) -> &UserRepository {
        &self.user_repo
    }

    /// 로컬 계정을 생성합니다.
    pub async fn register_local(&self, request: NewLocalUser) -> AppResult<User> {
        let user = self.user_repo.create(UserDraft::from(request)).await?;

        info!("로컬 사용자 등록: {} ({})", user.username(), user.id_string());
        Ok(user)
    }

    /// Google 프로필로 사용자를 찾거나 생성합니다.
    ///
    /// 1. `googleId`로 조회되면 그대로 반환
    /// 2. 이메일이 같은 계정이 있으면 Google ID를 연결하여 반환
    /// 3. 둘 다 없으면 새 Google 계정 생성
    ///
    /// 모든 실패는 `AppError::GoogleUser`로 감싸집니다. 동시 가입으로 생성이 유니크 제약에
    /// 걸린 경우 `is_duplicate_key()`가 `true`이므로 호출자는 다시 시도하면 됩니다.
    pub async fn find_or_create_google_user(&self, profile: GoogleProfile) -> AppResult<User> {
        self.resolve_google_user(profile)
            .await
            .map_err(AppError::google_user)
    }

    async fn resolve_google_user(&self, profile: GoogleProfile) -> AppResult<User> {
        profile.validate()?;

        if let Some(user) = self.user_repo.find_by_google_id(profile.google_id()).await? {
            info!("Google 사용자 로그인: {}", user.id_string());
            return Ok(user);
        }

        if let Some(email) = profile.normalized_email() {
            if let Some(mut user) = self.user_repo.find_by_email(&email).await? {
                if !user.link_google(profile.google_id().to_string()) {
                    warn!(
                        "이메일 {}의 사용자 {}는 이미 다른 Google 계정과 연결되어 있습니다",
                        email,
                        user.id_string()
                    );
                    return Ok(user);
                }

                let linked = self.user_repo.save(&user).await?;
                info!("기존 계정에 Google 계정 연결: {}", linked.id_string());
                return Ok(linked);
            }
        }

        let created = self.user_repo.create(profile.into_draft()).await?;
        info!("Google 사용자 생성: {} ({})", created.username(), created.id_string());
        Ok(created)
    }

    /// ID로 사용자를 조회하여 안전 투영으로 반환합니다.
    pub async fn get_safe_user(&self, id: &str) -> AppResult<SafeUser> {
        let id = UserRepository::parse_id(id)?;

        self.user_repo
            .find_by_id(&id)
            .await?
            .map(SafeUser::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id.to_hex())))
    }

    /// 프로필을 부분 수정합니다.
    ///
    /// 변경 필드와 관계없이 저장 전 정규화를 다시 거칩니다.
    pub async fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<SafeUser> {
        let id = UserRepository::parse_id(id)?;

        if update.is_empty() {
            return Err(AppError::ValidationError("No profile fields to update".to_string()));
        }

        let user = self.user_repo.update(&id, |draft| update.apply(draft)).await?;
        info!("사용자 프로필 수정: {}", user.id_string());
        Ok(user.to_safe())
    }

    /// 이메일에 해당하는 계정에 재설정 토큰을 발급합니다.
    ///
    /// `ttl`이 없으면 `UserModelConfig::reset_token_ttl()`을 사용합니다.
    pub async fn issue_password_reset(
        &self,
        email: &str,
        token: String,
        ttl: Option<chrono::Duration>,
    ) -> AppResult<User> {
        if token.trim().is_empty() {
            return Err(AppError::ValidationError("Reset token must not be empty".to_string()));
        }

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("No user with that email".to_string()))?;

        let expires = expires_after(ttl.unwrap_or_else(UserModelConfig::reset_token_ttl));
        let updated = self
            .user_repo
            .update(&user.id, |draft| {
                draft.reset_password_token = Some(token);
                draft.reset_password_expires = Some(expires);
            })
            .await?;

        info!("비밀번호 재설정 토큰 발급: {}", updated.id_string());
        Ok(updated)
    }

    /// 재설정 토큰으로 비밀번호 해시를 교체합니다.
    ///
    /// 토큰과 만료 시각은 성공 시 함께 제거됩니다.
    pub async fn complete_password_reset(&self, token: &str, new_password_hash: String) -> AppResult<User> {
        let invalid = || AppError::AuthenticationError("Password reset token is invalid or has expired".to_string());

        let mut user = self
            .user_repo
            .find_by_reset_token(token)
            .await?
            .ok_or_else(invalid)?;

        if !user.has_valid_reset_token(token, DateTime::now()) {
            warn!("만료된 재설정 토큰 사용 시도: {}", user.id_string());
            return Err(invalid());
        }

        user.set_password_hash(new_password_hash);
        user.clear_password_reset();
        let saved = self.user_repo.save(&user).await?;

        info!("비밀번호 재설정 완료: {}", saved.id_string());
        Ok(saved)
    }

    /// 계정을 영구 삭제합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = UserRepository::parse_id(id)?;

        if !self.user_repo.delete(&id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id.to_hex())));
        }

        info!("사용자 삭제: {}", id.to_hex());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{AuthMethod, Gender};
    use crate::repositories::users::InMemoryUserStore;

    fn service() -> UserService {
        let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));
        UserService::new(Arc::new(repo))
    }

    fn google_profile(google_id: &str, email: Option<&str>) -> GoogleProfile {
        GoogleProfile {
            google_id: google_id.to_string(),
            email: email.map(str::to_string),
            full_name: "Google Person".to_string(),
            profile_pic: Some("https://example.com/p.png".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_invalid_profile_is_wrapped() {
        let mut profile = google_profile("g-1", None);
        profile.full_name = "  ".to_string();

        let err = service().find_or_create_google_user(profile).await.unwrap_err();

        assert!(err.to_string().starts_with("Error creating/finding Google user: "));
        assert_eq!(err.invalid_fields(), vec!["full_name".to_string()]);
    }

    #[actix_web::test]
    async fn test_new_google_user_defaults() {
        let user = service()
            .find_or_create_google_user(google_profile("g-1", Some("New@Example.com")))
            .await
            .unwrap();

        assert_eq!(user.auth_method(), AuthMethod::Google);
        assert_eq!(user.gender, Gender::NotSpecified);
        assert_eq!(user.email.as_deref(), Some("new@example.com"));
        assert_eq!(user.profile_pic, "https://example.com/p.png");
        assert!(user.password_hash().is_none());
    }

    #[actix_web::test]
    async fn test_empty_profile_update_is_rejected() {
        let service = service();
        let user = service
            .find_or_create_google_user(google_profile("g-1", None))
            .await
            .unwrap();

        let err = service
            .update_profile(&user.id_string(), ProfileUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_delete_unknown_user_is_not_found() {
        let err = service()
            .delete_user("64b7f3a2c9e77a1f2d3e4f5a")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
