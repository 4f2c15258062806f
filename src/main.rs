//! 사용자 계정 백엔드 부트스트랩
//!
//! 환경 설정과 로깅을 초기화하고, MongoDB에 연결한 뒤
//! 사용자 컬렉션의 인덱스를 동기화합니다.

use std::sync::Arc;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_account_backend::config::LoggingConfig;
use user_account_backend::db::Database;
use user_account_backend::repositories::users::{MongoUserStore, UserRepository, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 계정 백엔드 시작중...");

    let database = initialize_database().await?;
    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&database));
    let user_repo = UserRepository::new(store);

    if let Err(e) = user_repo.ensure_indexes().await {
        error!("인덱스 동기화 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    info!("✅ 사용자 저장소 준비 완료 (database: {})", database.database_name());
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 환경별 기본 필터를 사용합니다 (`LoggingConfig::default_filter`).
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(LoggingConfig::default_filter()));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

async fn initialize_database() -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공");
    Ok(database)
}
