//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use validator::ValidationError;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 이메일 정리: 공백 제거 후 소문자로 변환
///
/// 저장과 조회 모두 이 함수를 거치므로 이메일 비교는 대소문자를 구분하지 않습니다.
pub fn normalize_email(value: Option<String>) -> Option<String> {
    clean_optional_string(value).map(|email| email.to_lowercase())
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 문자열 필드 검증 (validator `custom` 함수)
///
/// # 에러 코드
///
/// - `required`: 빈 문자열이거나 공백만 있는 경우
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email(Some(" Alice@Example.COM ".to_string())),
            Some("alice@example.com".to_string())
        );
        assert_eq!(normalize_email(Some("".to_string())), None);
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Jane Doe").is_ok());

        let error = validate_not_blank("   ").unwrap_err();
        assert_eq!(error.code, "required");
    }
}
