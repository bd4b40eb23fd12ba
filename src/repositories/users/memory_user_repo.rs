//! # 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserRepository`] 구현체입니다.
//! 개발 환경과 외부 저장소 없이 서비스를 띄우는 경우에 사용됩니다.
//!
//! - 삽입 순서를 유지합니다 (`get_all`은 생성 순서대로 반환).
//! - 동일 ID로 생성하면 `Ok(false)`를 반환합니다.
//! - 잠금이 오염(poisoned)되면 `RepositoryError::StorageUnavailable`을 반환합니다.

use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::{RepositoryError, RepositoryResult};
use crate::domain::entities::users::User;
use super::UserRepository;

/// 인메모리 사용자 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 사용자 목록으로 저장소를 생성합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::StorageUnavailable("user store lock is poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, user: &User) -> RepositoryResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.iter().any(|existing| existing.id == user.id) {
            return Ok(false);
        }

        users.push(user.clone());
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;
        let before = users.len();

        users.retain(|user| user.id != id);
        Ok(users.len() != before)
    }
}
