//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 Google 인증을 하나의 레코드 형태로 통합합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::users::{
    credentials::{AuthMethod, Credentials, FederatedCredentials, FederatedProvider, LocalCredentials},
    draft::UserDraft,
    gender::Gender,
};

/// 사용자 엔티티
///
/// [`normalize`](super::normalize::normalize)를 통과한 레코드만 이 타입으로 존재합니다.
/// 인증 방식은 `credentials`의 판별자이므로 따로 설정할 수 없습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ObjectId,
    pub full_name: String,
    pub gender: Gender,
    /// 프로필 이미지 URL (기본값 빈 문자열)
    pub profile_pic: String,
    /// 소문자로 정규화된 이메일 (unique, 선택)
    pub email: Option<String>,
    pub credentials: Credentials,
    pub reset_password_token: Option<String>,
    pub reset_password_expires: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    pub fn auth_method(&self) -> AuthMethod {
        self.credentials.auth_method()
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.credentials.password_hash()
    }

    pub fn google_id(&self) -> Option<&str> {
        self.credentials.google_id()
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    ///
    /// Google 계정을 연결한 기존 로컬 계정도 비밀번호를 유지하므로 `true`입니다.
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash().is_some()
    }

    /// 로컬 계정에 Google 계정을 연결합니다.
    ///
    /// 이미 외부 계정이 연결되어 있으면 아무것도 바꾸지 않고 `false`를 반환합니다.
    pub fn link_google(&mut self, google_id: String) -> bool {
        let Credentials::Local(LocalCredentials { username, password_hash }) = &self.credentials else {
            return false;
        };

        let federated = FederatedCredentials {
            provider: FederatedProvider::Google,
            provider_id: google_id,
            username: username.clone(),
            password_hash: Some(password_hash.clone()),
        };
        self.credentials = Credentials::Federated(federated);
        true
    }

    /// 해시된 비밀번호를 설정합니다.
    pub fn set_password_hash(&mut self, password_hash: String) {
        match &mut self.credentials {
            Credentials::Local(local) => local.password_hash = password_hash,
            Credentials::Federated(federated) => federated.password_hash = Some(password_hash),
        }
    }

    /// 재설정 토큰이 `now` 시점에 유효한지 확인
    pub fn has_valid_reset_token(&self, token: &str, now: DateTime) -> bool {
        self.reset_password_token.as_deref() == Some(token)
            && self.reset_password_expires.is_some_and(|expires| expires > now)
    }

    pub fn clear_password_reset(&mut self) {
        self.reset_password_token = None;
        self.reset_password_expires = None;
    }

    /// 수정을 위해 초안 형태로 되돌립니다.
    ///
    /// ID와 생성 시각을 유지하므로 다시 정규화해도 같은 레코드를 가리킵니다.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            id: Some(self.id),
            full_name: self.full_name.clone(),
            username: Some(self.username().to_string()),
            password: self.password_hash().map(str::to_string),
            gender: self.gender,
            profile_pic: self.profile_pic.clone(),
            google_id: self.google_id().map(str::to_string),
            email: self.email.clone(),
            reset_password_token: self.reset_password_token.clone(),
            reset_password_expires: self.reset_password_expires,
            created_at: Some(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::normalize::normalize;

    fn local_user() -> User {
        normalize(UserDraft {
            full_name: "Local Person".to_string(),
            username: Some("local".to_string()),
            password: Some("hashed-secret".to_string()),
            email: Some("local@example.com".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_link_google_keeps_local_credentials() {
        let mut user = local_user();

        assert!(user.link_google("g-1".to_string()));
        assert_eq!(user.auth_method(), AuthMethod::Google);
        assert_eq!(user.google_id(), Some("g-1"));
        assert_eq!(user.username(), "local");
        assert!(user.can_authenticate_with_password());
    }

    #[test]
    fn test_link_google_is_noop_when_already_linked() {
        let mut user = local_user();
        user.link_google("g-1".to_string());

        assert!(!user.link_google("g-2".to_string()));
        assert_eq!(user.google_id(), Some("g-1"));
    }

    #[test]
    fn test_draft_roundtrip_preserves_record() {
        let user = local_user();
        let renormalized = normalize(user.to_draft()).unwrap();

        assert_eq!(renormalized.id, user.id);
        assert_eq!(renormalized.credentials, user.credentials);
        assert_eq!(renormalized.created_at, user.created_at);
    }

    #[test]
    fn test_reset_token_validity() {
        let mut user = local_user();
        let now = DateTime::now();
        user.reset_password_token = Some("token".to_string());
        user.reset_password_expires = Some(DateTime::from_millis(now.timestamp_millis() + 60_000));

        assert!(user.has_valid_reset_token("token", now));
        assert!(!user.has_valid_reset_token("other", now));
        assert!(!user.has_valid_reset_token("token", DateTime::from_millis(now.timestamp_millis() + 120_000)));

        user.clear_password_reset();
        assert!(!user.has_valid_reset_token("token", now));
    }
}
