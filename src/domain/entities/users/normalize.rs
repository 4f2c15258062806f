//! 저장 전 정규화 (Pre-Persist Normalization)
//!
//! 쓰기 경로는 저장 직전에 항상 [`normalize`]를 호출합니다.
//! 필드 변경 여부와 관계없이 매번 실행되므로, 사용자명만 수정한 로컬 계정도
//! 자격 증명 검사를 다시 거칩니다.
//!
//! ## 처리 순서
//!
//! 1. 문자열 정리 및 이메일 소문자 변환
//! 2. 필드 단위 검증 (`UserDraft::check`)
//! 3. 자격 증명 확정
//!    - `google_id` 있음 → `AuthMethod::Google`, 사용자명이 없으면 `user_<id 끝 6자리>`
//!    - `google_id` 없음 → `AuthMethod::Local`, 사용자명/비밀번호 중 하나라도 없으면 거부

use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::users::{
    credentials::{Credentials, FederatedCredentials, FederatedProvider, LocalCredentials},
    draft::UserDraft,
    user::User,
};
use crate::errors::{AppError, AppResult};

/// 자동 생성 사용자명 접두사
pub const SYNTHESIZED_USERNAME_PREFIX: &str = "user_";

const SYNTHESIZED_SUFFIX_LEN: usize = 6;

/// 로컬 계정 자격 증명 누락 메시지
pub const LOCAL_CREDENTIALS_REQUIRED: &str =
    "Password and username are required for local authentication";

/// 레코드 ID로부터 사용자명을 생성합니다: `user_<ObjectId 16진수 끝 6자리>`
///
/// ID가 유일한 만큼만 충돌하지 않습니다.
pub fn synthesize_username(id: &ObjectId) -> String {
    let hex = id.to_hex();
    let suffix = &hex[hex.len().saturating_sub(SYNTHESIZED_SUFFIX_LEN)..];
    format!("{}{}", SYNTHESIZED_USERNAME_PREFIX, suffix)
}

/// 초안을 검증/정규화하여 저장 가능한 `User`를 만듭니다.
///
/// ID가 없는 초안에는 새 ObjectId를 할당하고, `updated_at`은 항상 현재 시각으로 갱신합니다.
pub fn normalize(mut draft: UserDraft) -> AppResult<User> {
    draft.clean();
    draft.check()?;

    let id = draft.id.unwrap_or_else(ObjectId::new);
    let credentials = resolve_credentials(&id, draft.username, draft.password, draft.google_id)?;
    let now = DateTime::now();

    Ok(User {
        id,
        full_name: draft.full_name,
        gender: draft.gender,
        profile_pic: draft.profile_pic,
        email: draft.email,
        credentials,
        reset_password_token: draft.reset_password_token,
        reset_password_expires: draft.reset_password_expires,
        created_at: draft.created_at.unwrap_or(now),
        updated_at: now,
    })
}

/// 평평한 자격 증명 필드를 태그 유니온으로 확정합니다.
///
/// 저장된 문서를 읽을 때도 같은 규칙을 사용합니다.
pub(crate) fn resolve_credentials(
    id: &ObjectId,
    username: Option<String>,
    password: Option<String>,
    google_id: Option<String>,
) -> AppResult<Credentials> {
    match google_id {
        Some(provider_id) => Ok(Credentials::Federated(FederatedCredentials {
            provider: FederatedProvider::Google,
            provider_id,
            username: username.unwrap_or_else(|| synthesize_username(id)),
            password_hash: password,
        })),
        None => match (username, password) {
            (Some(username), Some(password_hash)) => {
                Ok(Credentials::Local(LocalCredentials { username, password_hash }))
            }
            _ => Err(AppError::ConsistencyError(LOCAL_CREDENTIALS_REQUIRED.to_string())),
        },
    }
}
