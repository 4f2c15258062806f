//! 데이터 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, MongoDB 연결, 로깅 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
///
/// ## Environment Variables
///
/// - `MONGODB_URI`: 연결 URI (기본값: `mongodb://localhost:27017`)
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: `user_accounts_dev`)
/// - `USERS_COLLECTION`: 사용자 컬렉션 이름 (기본값: `users`)
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE_NAME: &'static str = "user_accounts_dev";
    pub const DEFAULT_USERS_COLLECTION: &'static str = "users";

    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string())
    }

    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| Self::DEFAULT_USERS_COLLECTION.to_string())
    }
}

/// 로깅 설정
pub struct LoggingConfig;

impl LoggingConfig {
    /// `RUST_LOG`가 없을 때 사용할 기본 필터를 반환합니다.
    ///
    /// - Development/Test: `debug`
    /// - Staging/Production: `info`
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development | Environment::Test => "debug,mongodb=info",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_logging_filter_for_each_environment() {
        assert_eq!(
            LoggingConfig::default_filter_for_env(&Environment::Development),
            "debug,mongodb=info"
        );
        assert_eq!(
            LoggingConfig::default_filter_for_env(&Environment::Production),
            "info"
        );
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }

        if env::var("USERS_COLLECTION").is_err() {
            assert_eq!(DatabaseConfig::users_collection(), "users");
        }
    }
}
