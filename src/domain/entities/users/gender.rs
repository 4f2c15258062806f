//! 성별 열거형

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 사용자 성별
///
/// 저장 값은 `male`, `female`, `not_specified` 세 가지이며 기본값은 `not_specified`입니다.
/// 알 수 없는 문자열은 기본값으로 바꾸지 않고 거부합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    NotSpecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NotSpecified => "not_specified",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "not_specified" => Ok(Gender::NotSpecified),
            _ => Err(AppError::ValidationError(format!(
                "gender: `{}` is not a valid value (male, female, not_specified)",
                s
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_string() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("not_specified".parse::<Gender>().unwrap(), Gender::NotSpecified);
    }

    #[test]
    fn test_invalid_gender_is_rejected() {
        assert!(matches!("other".parse::<Gender>(), Err(AppError::ValidationError(_))));
        assert!("Male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::NotSpecified).unwrap(), "\"not_specified\"");
        assert!(serde_json::from_str::<Gender>("\"unknown\"").is_err());
        assert_eq!(Gender::default(), Gender::NotSpecified);
    }
}
