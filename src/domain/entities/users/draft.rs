//! 저장 전 사용자 초안 (Proposed Record)
//!
//! 쓰기 경로로 들어오는 모든 사용자 데이터는 먼저 [`UserDraft`]로 표현됩니다.
//! 초안은 평평한(flat) 선택 필드 구조이며, [`normalize`](super::normalize::normalize)를
//! 통과해야만 자격 증명이 확정된 [`User`](super::user::User)가 됩니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `full_name` | 필수, 공백 불가 |
//! | `username` | `google_id`가 없으면 필수 |
//! | `password` | `google_id`가 없으면 필수, 최소 6자 |
//! | `gender` | 열거형 값만 허용 (기본값 `not_specified`) |
//! | `email` | 선택, 저장 전 소문자 변환 |
//!
//! 빈 문자열은 조건부 필수 검사에서 값이 없는 것으로 취급합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::domain::entities::users::gender::Gender;
use crate::utils::string_utils::{clean_optional_string, is_valid_string, normalize_email, validate_not_blank};

/// 저장 전 사용자 초안
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// 기존 레코드를 수정하는 경우의 ID (신규 생성 시 None)
    #[serde(skip)]
    pub id: Option<ObjectId>,

    #[validate(custom(function = "validate_not_blank"))]
    pub full_name: String,

    #[serde(default)]
    pub username: Option<String>,

    /// 해시된 비밀번호 (해싱은 외부 인증 계층의 책임)
    #[serde(default)]
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: Option<String>,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub profile_pic: String,

    #[serde(default)]
    pub google_id: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub reset_password_token: Option<String>,

    #[serde(default)]
    pub reset_password_expires: Option<DateTime>,

    /// 기존 레코드의 생성 시각 (신규 생성 시 None)
    #[serde(skip)]
    pub created_at: Option<DateTime>,
}

impl UserDraft {
    /// 외부 인증 ID가 있는지 확인
    pub fn has_federated_identity(&self) -> bool {
        self.google_id.as_deref().is_some_and(is_valid_string)
    }

    /// 문자열 필드 정리
    ///
    /// 공백만 있는 선택 필드는 None으로, 이메일은 소문자로 변환합니다.
    /// 비밀번호 해시와 재설정 토큰은 그대로 비교되는 값이므로 공백을 제거하지 않고
    /// 빈 문자열만 None으로 바꿉니다.
    pub fn clean(&mut self) {
        self.username = clean_optional_string(self.username.take());
        self.google_id = clean_optional_string(self.google_id.take());
        self.email = normalize_email(self.email.take());
        self.reset_password_token = self.reset_password_token.take().filter(|token| !token.is_empty());
        self.password = self.password.take().filter(|password| !password.is_empty());
    }

    /// 필드 단위 검증 (derive 규칙 + 조건부 필수 규칙)
    ///
    /// 실패 시 위반된 모든 필드를 한 번에 반환합니다.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_default();

        if !self.has_federated_identity() {
            if !self.username.as_deref().is_some_and(is_valid_string) {
                errors.add("username", required_for_local("username"));
            }
            if !self.password.as_deref().is_some_and(|password| !password.is_empty()) {
                errors.add("password", required_for_local("password"));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn required_for_local(field: &str) -> ValidationError {
    ValidationError::new("required")
        .with_message(format!("Google 계정이 없으면 {}은(는) 필수입니다", field).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_draft() -> UserDraft {
        UserDraft {
            full_name: "Jane Doe".to_string(),
            username: Some("jane".to_string()),
            password: Some("$2b$10$hashedvalue".to_string()),
            ..Default::default()
        }
    }

    fn fields(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors.errors().keys().map(|f| f.to_string()).collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_local_draft() {
        assert!(local_draft().check().is_ok());
    }

    #[test]
    fn test_local_draft_requires_username_and_password() {
        let draft = UserDraft {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        };

        let errors = draft.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["password", "username"]);
    }

    #[test]
    fn test_federated_draft_needs_no_local_credentials() {
        let draft = UserDraft {
            full_name: "Jane Doe".to_string(),
            google_id: Some("g-1".to_string()),
            ..Default::default()
        };

        assert!(draft.check().is_ok());
    }

    #[test]
    fn test_short_password_is_rejected_even_for_federated() {
        let draft = UserDraft {
            full_name: "Jane Doe".to_string(),
            google_id: Some("g-1".to_string()),
            password: Some("12345".to_string()),
            ..Default::default()
        };

        let errors = draft.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["password"]);
    }

    #[test]
    fn test_blank_full_name_is_rejected() {
        let mut draft = local_draft();
        draft.full_name = "   ".to_string();

        let errors = draft.check().unwrap_err();
        assert_eq!(fields(&errors), vec!["full_name"]);
    }

    #[test]
    fn test_clean_lowercases_email_and_drops_blanks() {
        let mut draft = local_draft();
        draft.email = Some("Jane.Doe@Example.COM".to_string());
        draft.google_id = Some("   ".to_string());
        draft.username = Some("".to_string());
        draft.clean();

        assert_eq!(draft.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(draft.google_id, None);
        assert_eq!(draft.username, None);
    }

    #[test]
    fn test_clean_keeps_reset_token_bytes() {
        let mut draft = local_draft();
        draft.reset_password_token = Some(" tok ".to_string());
        draft.clean();
        assert_eq!(draft.reset_password_token.as_deref(), Some(" tok "));

        draft.reset_password_token = Some(String::new());
        draft.clean();
        assert_eq!(draft.reset_password_token, None);
    }

    #[test]
    fn test_unknown_gender_is_rejected_on_deserialize() {
        let json = r#"{"fullName":"Jane","username":"jane","password":"secret1","gender":"robot"}"#;
        assert!(serde_json::from_str::<UserDraft>(json).is_err());

        let json = r#"{"fullName":"Jane","username":"jane","password":"secret1"}"#;
        let draft: UserDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.gender, Gender::NotSpecified);
        assert_eq!(draft.profile_pic, "");
    }
}
