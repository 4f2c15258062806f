//! # 시간 변환 유틸리티
//!
//! MongoDB에 저장되는 `bson::DateTime`과 계산/직렬화에 쓰이는
//! `chrono::DateTime<Utc>` 사이의 변환을 담당합니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::DateTime;

/// `bson::DateTime` → `chrono::DateTime<Utc>` (밀리초 정밀도)
pub fn to_chrono(value: DateTime) -> ChronoDateTime<Utc> {
    ChronoDateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// `chrono::DateTime<Utc>` → `bson::DateTime` (밀리초 정밀도)
pub fn from_chrono(value: ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

/// 현재 시각으로부터 `ttl` 이후의 시각
pub fn expires_after(ttl: chrono::Duration) -> DateTime {
    from_chrono(Utc::now() + ttl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_milliseconds() {
        let original = DateTime::from_millis(1_700_000_000_123);
        let converted = to_chrono(original);

        assert_eq!(converted.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(from_chrono(converted), original);
    }

    #[test]
    fn test_expires_after_is_in_future() {
        let expires = expires_after(chrono::Duration::minutes(5));
        assert!(expires > DateTime::now());
    }
}
