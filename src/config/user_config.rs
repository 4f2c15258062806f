//! 사용자 계정 모델 설정
//!
//! 비밀번호 재설정 토큰의 유효 시간 등 사용자 모델 동작에 관련된 설정입니다.

use std::env;

/// 사용자 계정 모델 설정
pub struct UserModelConfig;

impl UserModelConfig {
    /// 재설정 토큰 기본 유효 시간 (분)
    pub const DEFAULT_RESET_TOKEN_TTL_MINUTES: i64 = 60;

    /// 비밀번호 재설정 토큰의 유효 시간을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `RESET_TOKEN_TTL_MINUTES`: 1 이상의 정수 (기본값: 60)
    pub fn reset_token_ttl() -> chrono::Duration {
        let minutes = env::var("RESET_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|value| Self::parse_ttl_minutes(&value))
            .unwrap_or(Self::DEFAULT_RESET_TOKEN_TTL_MINUTES);

        chrono::Duration::minutes(minutes)
    }

    fn parse_ttl_minutes(value: &str) -> Option<i64> {
        value.trim().parse::<i64>().ok().filter(|minutes| *minutes > 0)
    }
}
