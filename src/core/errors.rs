//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 에러 타입을 정의합니다.
//!
//! ## 에러 채널 구분
//!
//! 이 서비스는 세 가지 결과 채널을 명확히 분리합니다:
//!
//! | 채널 | 표현 | 의미 |
//! |------|------|------|
//! | 값 없음 | `Ok(None)` | 해당 ID의 사용자가 없음 (정상 결과) |
//! | 거부된 변경 | `Ok(false)` | 저장소가 생성/삭제를 거부함 (정상 결과) |
//! | 영속성 실패 | `Err(RepositoryError)` | 저장소 I/O 실패 |
//!
//! 서비스 계층은 [`RepositoryError`]를 로그로 남긴 뒤 **그대로** 반환합니다.
//! HTTP 경계에서만 [`AppError`]로 변환되어 상태 코드가 결정됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |

use thiserror::Error;

/// 저장소(Repository) 계층 에러
///
/// 저장소 구현체가 반환하는 실패 타입입니다. 서비스 계층은 이 값을 변형하지 않고
/// 호출자에게 전달하므로, 변형(variant)과 메시지가 그대로 보존됩니다.
///
/// `Display` 출력은 원본 메시지 그 자체입니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 데이터베이스 드라이버/쿼리 실패
    #[error("{0}")]
    Database(String),

    /// 저장된 문서를 도메인 엔티티로 복원할 수 없음
    #[error("{0}")]
    InvalidDocument(String),

    /// 저장소를 사용할 수 없음 (예: 잠금 오염)
    #[error("{0}")]
    StorageUnavailable(String),
}

/// 저장소 결과 타입 별칭
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 애플리케이션 전역 에러 타입
///
/// HTTP 핸들러의 에러 타입으로 사용되며, `actix_web::ResponseError` 구현을 통해
/// 자동으로 JSON 에러 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 영속성 실패 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(#[from] RepositoryError),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// { "error": "Human readable error message" }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
