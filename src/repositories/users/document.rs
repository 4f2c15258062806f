//! # 사용자 저장 문서
//!
//! MongoDB `users` 컬렉션에 저장되는 평평한 문서 형태입니다.
//! 값이 없는 선택 필드는 직렬화하지 않으므로, sparse 유니크 인덱스가 해당 문서를
//! 제약 대상에서 제외합니다.
//!
//! `authMethod`는 저장 시점의 자격 증명 형태에서 파생되어 기록되며,
//! 읽을 때는 `googleId` 유무로 다시 계산합니다.

use log::warn;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{normalize::resolve_credentials, AuthMethod, Gender, User};
use crate::errors::AppError;

/// 사용자 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_expires: Option<DateTime>,
    #[serde(default)]
    pub auth_method: AuthMethod,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            username: Some(user.username().to_string()),
            password: user.password_hash().map(str::to_string),
            gender: user.gender,
            profile_pic: user.profile_pic.clone(),
            google_id: user.google_id().map(str::to_string),
            email: user.email.clone(),
            reset_password_token: user.reset_password_token.clone(),
            reset_password_expires: user.reset_password_expires,
            auth_method: user.auth_method(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    /// 저장된 문서를 엔티티로 변환합니다.
    ///
    /// 자격 증명을 확정할 수 없는 문서(Google ID도, 사용자명/비밀번호 쌍도 없음)는
    /// `ConsistencyError`가 됩니다.
    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let credentials = resolve_credentials(
            &document.id,
            document.username,
            document.password,
            document.google_id,
        )?;

        if credentials.auth_method() != document.auth_method {
            warn!(
                "사용자 {}의 저장된 authMethod({})가 자격 증명({})과 다릅니다",
                document.id.to_hex(),
                document.auth_method,
                credentials.auth_method()
            );
        }

        Ok(User {
            id: document.id,
            full_name: document.full_name,
            gender: document.gender,
            profile_pic: document.profile_pic,
            email: document.email,
            credentials,
            reset_password_token: document.reset_password_token,
            reset_password_expires: document.reset_password_expires,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }
}
