//! # 프로필 수정 DTO
//!
//! 값이 있는 필드만 덮어씁니다 (PATCH 의미). 자격 증명과 재설정 토큰은
//! 이 경로로 바꿀 수 없습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Gender, UserDraft};

/// 프로필 부분 수정 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub profile_pic: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }

    /// 초안에 변경 사항을 적용합니다.
    pub fn apply(self, draft: &mut UserDraft) {
        if let Some(full_name) = self.full_name {
            draft.full_name = full_name;
        }
        if let Some(username) = self.username {
            draft.username = Some(username);
        }
        if let Some(gender) = self.gender {
            draft.gender = gender;
        }
        if let Some(profile_pic) = self.profile_pic {
            draft.profile_pic = profile_pic;
        }
        if let Some(email) = self.email {
            draft.email = Some(email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_overwrites_given_fields() {
        let mut draft = UserDraft {
            full_name: "Old Name".to_string(),
            username: Some("old".to_string()),
            password: Some("hash".to_string()),
            ..Default::default()
        };

        ProfileUpdate {
            full_name: Some("New Name".to_string()),
            gender: Some(Gender::Female),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.full_name, "New Name");
        assert_eq!(draft.gender, Gender::Female);
        assert_eq!(draft.username.as_deref(), Some("old"));
        assert_eq!(draft.password.as_deref(), Some("hash"));
    }

    #[test]
    fn test_is_empty() {
        assert!(ProfileUpdate::default().is_empty());
        assert!(!ProfileUpdate { email: Some("a@b.c".to_string()), ..Default::default() }.is_empty());
    }
}
