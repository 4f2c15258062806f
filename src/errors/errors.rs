//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 계정 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 발생 지점 |
//! |----------|-------------|-----------|
//! | `InvalidFields` | 400 | 필드 단위 검증 실패 (필드명 포함) |
//! | `ValidationError` | 400 | 열거형 파싱 실패, 잘못된 ID 형식 |
//! | `ConsistencyError` | 400 | 정규화 단계의 인증 방식/자격 증명 불일치 |
//! | `DuplicateKey` | 409 | 유니크 필드 중복 (`username`, `googleId`, `email`) |
//! | `NotFound` | 404 | 대상 사용자 없음 |
//! | `AuthenticationError` | 401 | 만료되었거나 알 수 없는 재설정 토큰 |
//! | `GoogleUser` | 감싼 에러를 따름 | Google 조회/생성 흐름 전체 |
//! | `DatabaseError` | 500 | MongoDB 오류 |
//! | `InternalError` | 500 | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn load(repo: &UserRepository, id: &str) -> AppResult<User> {
//!     let id = UserRepository::parse_id(id)?;
//!     repo.find_by_id(&id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 사용자 계정 계층에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 모든 에러는 호출자에게 그대로 전달되며, 단일 작업 범위를 벗어나지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 단일 값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러 (400 Bad Request)
    ///
    /// 어떤 필드가 어떤 제약을 위반했는지 `ValidationErrors`에 그대로 담깁니다.
    #[error("Validation failed: {0}")]
    InvalidFields(#[from] ValidationErrors),

    /// 정규화 단계에서 감지된 자격 증명 불일치 (400 Bad Request)
    #[error("{0}")]
    ConsistencyError(String),

    /// 유니크 제약 위반 (409 Conflict)
    #[error("Duplicate key error: {field} is already in use")]
    DuplicateKey { field: &'static str },

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Google 사용자 조회/생성 실패
    ///
    /// 원인 에러를 보존하므로 `is_duplicate_key()`로 재조회 여부를 판단할 수 있습니다.
    #[error("Error creating/finding Google user: {source}")]
    GoogleUser {
        #[source]
        source: Box<AppError>,
    },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Google 흐름의 에러로 감쌉니다.
    pub fn google_user(source: AppError) -> Self {
        AppError::GoogleUser {
            source: Box::new(source),
        }
    }

    /// 유니크 제약 위반인지 확인합니다 (감싼 에러까지 확인).
    ///
    /// 동시 가입 경쟁에서 생성이 실패한 경우, 호출자는 이 값이 `true`일 때
    /// 조회를 다시 시도하면 됩니다.
    pub fn is_duplicate_key(&self) -> bool {
        self.duplicate_field().is_some()
    }

    /// 중복된 필드명을 반환합니다.
    pub fn duplicate_field(&self) -> Option<&'static str> {
        match self {
            AppError::DuplicateKey { field } => Some(field),
            AppError::GoogleUser { source } => source.duplicate_field(),
            _ => None,
        }
    }

    /// 검증에 실패한 필드 목록 (정렬됨)
    pub fn invalid_fields(&self) -> Vec<String> {
        match self {
            AppError::InvalidFields(errors) => {
                let mut fields: Vec<String> = errors
                    .errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
            AppError::GoogleUser { source } => source.invalid_fields(),
            _ => Vec::new(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidFields(_)
            | AppError::ConsistencyError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateKey { .. } => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::GoogleUser { source } => source.status_code(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 필드 검증 실패의 경우 `fields`에 필드별 상세 내역이 포함됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut body = serde_json::json!({
            "error": self.to_string()
        });

        if let AppError::InvalidFields(errors) = self {
            body["fields"] = serde_json::to_value(errors).unwrap_or_default();
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
