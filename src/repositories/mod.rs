//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장 기술을 서비스 계층으로부터 숨기는 영속성 추상화를 제공합니다.
//! 리포지토리는 영속 상태의 유일한 소유자이며, 서비스는 이를 스레드 안전한
//! 불투명 의존성으로 취급합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let users = user_repo.get_all().await?;
//! ```

pub mod users;
