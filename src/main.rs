//! 사용자 레코드 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 협력 객체를 조립합니다.
//! 설정된 저장소(인메모리 또는 MongoDB)를 연결하고 사용자 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use users_api::config::{
    profile_env_file, LoggingConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use users_api::core::{LogAdapter, MonotonicClock};
use users_api::db::Database;
use users_api::handlers::users::UserController;
use users_api::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use users_api::routes::configure_all_routes;
use users_api::services::users::UserServiceImpl;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    // 저장소 초기화
    let user_repo = initialize_user_repository(&StorageConfig::from_env()).await?;

    // 협력 객체 조립
    let user_service = UserServiceImpl::new(
        user_repo,
        Arc::new(LogAdapter::of::<UserServiceImpl>()),
        Arc::new(MonotonicClock),
    );
    let controller = web::Data::new(UserController::new(Arc::new(user_service)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(controller).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(controller: web::Data<UserController>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    info!("Rate Limiting 설정 로드됨: {:?}", rate_limit_config);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 컨트롤러
            .app_data(controller.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile_env_file(&profile) {
        Some(file_name) => match dotenv::from_filename(file_name) {
            Ok(_) => info!("{} 파일 로드 됨", file_name),
            Err(e) => warn!("{} 파일 로드 실패: {}", file_name, e),
        },
        None => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`별 기본 필터를 사용합니다.
///
/// # Examples
///
/// ```bash
/// # 서비스 계층 로그만 debug
/// RUST_LOG=users_api::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(LoggingConfig::default_filter()));
}

/// 설정된 백엔드로 사용자 저장소를 생성합니다
///
/// # Errors
///
/// * MongoDB 연결 실패 시 `std::io::Error`로 변환하여 반환
async fn initialize_user_repository(
    config: &StorageConfig,
) -> io::Result<Arc<dyn UserRepository>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("💾 인메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            info!("✅ MongoDB 저장소 사용: {}", database.database_name());
            Ok(Arc::new(MongoUserRepository::new(&database)))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
