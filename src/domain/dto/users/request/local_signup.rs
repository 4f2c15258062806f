//! # 로컬 회원가입 입력 DTO
//!
//! 인증 계층이 비밀번호를 해싱한 뒤 전달하는 로컬 계정 생성 데이터입니다.
//! 이 계층은 해싱을 하지 않으므로 `password_hash`는 이미 해시된 값이어야 합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Gender, UserDraft};

/// 로컬 계정 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocalUser {
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl From<NewLocalUser> for UserDraft {
    fn from(request: NewLocalUser) -> Self {
        UserDraft {
            full_name: request.full_name,
            username: Some(request.username),
            password: Some(request.password_hash),
            gender: request.gender.unwrap_or_default(),
            profile_pic: request.profile_pic.unwrap_or_default(),
            email: request.email,
            ..Default::default()
        }
    }
}
