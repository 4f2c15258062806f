use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{AuthMethod, Gender, User};
use crate::utils::time_utils::to_chrono;

/// 외부 노출용 사용자 DTO (Safe Projection)
///
/// 영속성 경계를 벗어나는 사용자 레코드의 유일한 형태입니다.
/// 비밀번호, Google ID, 재설정 토큰/만료 시각은 어떤 경우에도 포함되지 않습니다.
///
/// ```json
/// {
///   "_id": "64b7f3a2c9e77a1f2d3e4f5a",
///   "fullName": "Jane Doe",
///   "username": "user_3e4f5a",
///   "gender": "not_specified",
///   "profilePic": "",
///   "email": "jane@gmail.com",
///   "authMethod": "google",
///   "createdAt": "2024-07-19T14:03:46.123Z",
///   "updatedAt": "2024-07-19T14:03:46.123Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub gender: Gender,
    pub profile_pic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub auth_method: AuthMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for SafeUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            full_name: user.full_name.clone(),
            username: user.username().to_string(),
            gender: user.gender,
            profile_pic: user.profile_pic.clone(),
            email: user.email.clone(),
            auth_method: user.auth_method(),
            created_at: to_chrono(user.created_at),
            updated_at: to_chrono(user.updated_at),
        }
    }
}

impl From<User> for SafeUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl User {
    /// 외부 노출용 안전 투영
    pub fn to_safe(&self) -> SafeUser {
        SafeUser::from(self)
    }
}
