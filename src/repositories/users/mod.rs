//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait이 서비스 계층이 소비하는 영속성 기능을 정의하며,
//! 저장 기술별 구현체를 제공합니다.
//!
//! - [`InMemoryUserRepository`](memory_user_repo::InMemoryUserRepository) - 프로세스 메모리 저장소 (기본값)
//! - [`MongoUserRepository`](mongo_user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::new();
//! let created = repo.create(&User::new("David")).await?;
//! assert!(created);
//! ```

pub mod memory_user_repo;
pub mod mongo_user_repo;

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::RepositoryResult;
use crate::domain::entities::users::User;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;

/// 사용자 영속성 기능
///
/// 비어 있음은 실패가 아닙니다: `get_all`은 빈 목록을, `get_by_id`는 `None`을
/// 반환합니다. `Err`는 저장소 I/O 실패에만 사용됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 모든 사용자를 조회합니다.
    async fn get_all(&self) -> RepositoryResult<Vec<User>>;

    /// ID로 사용자를 조회합니다.
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// 사용자를 저장합니다.
    ///
    /// * `Ok(true)` - 저장됨
    /// * `Ok(false)` - 저장소가 거부함 (예: 동일 ID 존재)
    async fn create(&self, user: &User) -> RepositoryResult<bool>;

    /// ID로 사용자를 삭제합니다.
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 삭제할 사용자가 없음
    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool>;
}
