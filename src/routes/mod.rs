//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 라우트와 헬스체크 엔드포인트, 그리고 추출기(extractor) 에러 처리를
//! 포함합니다.
//!
//! # Features
//!
//! - 사용자 조회/생성/삭제 API 엔드포인트
//! - 잘못된 경로 ID, 깨진 JSON을 `400` JSON 응답으로 변환
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;
use crate::handlers::users::USERS_BASE_PATH;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Extractor error handling
    cfg.app_data(path_config());
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Routes
///
/// - `GET /api/v1/users` - 사용자 목록 조회
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `POST /api/v1/users` - 사용자 생성
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Nick Chapsas"}'
///
/// curl http://localhost:8080/api/v1/users/1f0c2a6e-8c8e-4f43-9d1e-6d0b1f2a3c4d
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(USERS_BASE_PATH)
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::delete_user),
    );
}

/// UUID가 아닌 경로 ID를 `AppError::ValidationError`로 변환
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 깨진 JSON, 잘못된 Content-Type을 `AppError::ValidationError`로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_api",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
