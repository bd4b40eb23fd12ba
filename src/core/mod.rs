//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 횡단 관심사(cross-cutting concerns)를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **RepositoryError**: 저장소 실패 (서비스 계층이 변형 없이 전파)
//! - **AppError**: HTTP 경계의 에러 타입, `ResponseError` 구현
//!
//! ### [`logging`] - 로거 어댑터
//! - **LoggerAdapter**: 템플릿 + 위치 인자 기반 레벨 로깅 trait
//! - **LogAdapter**: `log` 파사드 기반 운영 구현체
//!
//! ### [`clock`] - 단조 시계
//! - **Clock**: 지연 시간 측정을 위한 주입형 시계 trait
//! - **MonotonicClock**: `Instant` 기반 기본 구현체
//!
//! ## 의존성 주입
//!
//! 모든 협력 객체는 생성자에서 `Arc<dyn Trait>`로 주입됩니다:
//!
//! ```rust,ignore
//! let service = UserServiceImpl::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(LogAdapter::of::<UserServiceImpl>()),
//!     Arc::new(MonotonicClock),
//! );
//! ```

pub mod clock;
pub mod errors;
pub mod logging;

pub use clock::*;
pub use errors::*;
pub use logging::*;
