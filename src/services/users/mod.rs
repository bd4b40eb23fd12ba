//! 사용자 관리 서비스 모듈
//!
//! 사용자 저장소 호출을 감싸 지연 시간 측정과 구조화된 로깅을 더하는
//! 서비스 계층을 제공합니다.
//!
//! # Features
//!
//! - 전체/단건 조회, 생성, 삭제
//! - 호출별 시작/완료 로그와 경과 시간(ms) 기록
//! - 저장소 실패를 한 번 에러 로그로 남긴 뒤 그대로 전달
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{UserService, UserServiceImpl};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repo, logger, clock));
//! let users = user_service.get_all().await?;
//! ```

pub mod user_service;

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::RepositoryResult;
use crate::domain::entities::users::User;

pub use user_service::UserServiceImpl;

/// 컨트롤러가 소비하는 사용자 서비스 기능
///
/// 반환값의 의미는 [`UserRepository`](crate::repositories::users::UserRepository)와
/// 같습니다. 구현체는 저장소 실패를 다른 값으로 바꾸지 않습니다.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_all(&self) -> RepositoryResult<Vec<User>>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    async fn create(&self, user: &User) -> RepositoryResult<bool>;

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool>;
}
