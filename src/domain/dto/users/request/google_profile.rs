//! # Google 프로필 입력 DTO
//!
//! OAuth 클라이언트가 Google 로그인 콜백 이후 전달하는 프로필 데이터입니다.
//! [`UserService::find_or_create_google_user`](crate::services::users::UserService::find_or_create_google_user)의 입력입니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "googleId": "109876543210987654321",
//!   "email": "Jane.Doe@gmail.com",
//!   "fullName": "Jane Doe",
//!   "profilePic": "https://lh3.googleusercontent.com/a/photo.jpg"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::{Gender, UserDraft};
use crate::utils::string_utils::{clean_optional_string, normalize_email, validate_not_blank};

/// Google 계정 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoogleProfile {
    /// Google 계정 고유 ID (`sub` 클레임)
    #[validate(custom(function = "validate_not_blank"))]
    pub google_id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub full_name: String,

    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl GoogleProfile {
    /// 공백을 제거한 Google ID
    pub fn google_id(&self) -> &str {
        self.google_id.trim()
    }

    /// 조회/저장에 쓰이는 소문자 이메일
    pub fn normalized_email(&self) -> Option<String> {
        normalize_email(self.email.clone())
    }

    /// 신규 Google 계정 초안
    ///
    /// 사용자명과 비밀번호는 비워 두며, 사용자명은 정규화 단계에서 생성됩니다.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            full_name: self.full_name,
            gender: Gender::NotSpecified,
            profile_pic: clean_optional_string(self.profile_pic).unwrap_or_default(),
            google_id: Some(self.google_id),
            email: self.email,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"googleId":"g-1","fullName":"Jane Doe"}"#;
        let profile: GoogleProfile = serde_json::from_str(json).unwrap();

        assert!(profile.validate().is_ok());
        assert_eq!(profile.email, None);
        assert_eq!(profile.profile_pic, None);
    }

    #[test]
    fn test_blank_google_id_is_invalid() {
        let profile = GoogleProfile {
            google_id: "  ".to_string(),
            email: None,
            full_name: "Jane Doe".to_string(),
            profile_pic: None,
        };

        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_into_draft_defaults() {
        let profile = GoogleProfile {
            google_id: "g-1".to_string(),
            email: Some("Jane@Gmail.com".to_string()),
            full_name: "Jane Doe".to_string(),
            profile_pic: None,
        };

        assert_eq!(profile.normalized_email().as_deref(), Some("jane@gmail.com"));

        let draft = profile.into_draft();
        assert_eq!(draft.gender, Gender::NotSpecified);
        assert_eq!(draft.profile_pic, "");
        assert_eq!(draft.username, None);
        assert_eq!(draft.password, None);
        assert!(draft.has_federated_identity());
    }
}
