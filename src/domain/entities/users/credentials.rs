//! 인증 자격 증명 모델
//!
//! 로컬 계정과 외부(Federated) 계정을 하나의 태그 유니온으로 표현합니다.
//! `AuthMethod`는 별도로 저장/검증되는 필드가 아니라 [`Credentials`]의 판별자이므로,
//! 인증 방식과 실제 자격 증명 형태가 어긋날 수 없습니다.
//!
//! ```text
//! Credentials
//! ├── Local      { username, password_hash }
//! └── Federated  { provider, provider_id, username, password_hash? }
//! ```
//!
//! 기존 로컬 계정에 Google 계정을 연결하면 `Federated`가 되며, 기존 비밀번호 해시는
//! `password_hash`에 그대로 남습니다 (양쪽 방식 모두 사용 가능).

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 인증 방식 (`local` | `google`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Local,
    Google,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Local => "local",
            AuthMethod::Google => "google",
        }
    }
}

impl FromStr for AuthMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(AuthMethod::Local),
            "google" => Ok(AuthMethod::Google),
            _ => Err(AppError::ValidationError(format!(
                "authMethod: `{}` is not a valid value (local, google)",
                s
            ))),
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 외부 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FederatedProvider {
    Google,
}

impl FederatedProvider {
    /// 이 프로바이더로 가입한 계정의 인증 방식
    pub fn auth_method(&self) -> AuthMethod {
        match self {
            FederatedProvider::Google => AuthMethod::Google,
        }
    }
}

/// 로컬 자격 증명 (사용자명 + 해시된 비밀번호)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalCredentials {
    pub username: String,
    pub password_hash: String,
}

/// 외부 프로바이더 자격 증명
///
/// `username`은 정규화 단계에서 항상 채워집니다 (없으면 `user_<id 끝 6자리>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedCredentials {
    pub provider: FederatedProvider,
    pub provider_id: String,
    pub username: String,
    /// 계정 연결 이전의 로컬 비밀번호 해시
    pub password_hash: Option<String>,
}

/// 계정의 인증 자격 증명
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Local(LocalCredentials),
    Federated(FederatedCredentials),
}

impl Credentials {
    pub fn auth_method(&self) -> AuthMethod {
        match self {
            Credentials::Local(_) => AuthMethod::Local,
            Credentials::Federated(federated) => federated.provider.auth_method(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Credentials::Local(local) => &local.username,
            Credentials::Federated(federated) => &federated.username,
        }
    }

    pub fn password_hash(&self) -> Option<&str> {
        match self {
            Credentials::Local(local) => Some(local.password_hash.as_str()),
            Credentials::Federated(federated) => federated.password_hash.as_deref(),
        }
    }

    /// Google 계정 ID (로컬 계정이면 None)
    pub fn google_id(&self) -> Option<&str> {
        match self {
            Credentials::Federated(FederatedCredentials {
                provider: FederatedProvider::Google,
                provider_id,
                ..
            }) => Some(provider_id.as_str()),
            Credentials::Local(_) => None,
        }
    }
}
