//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 주입된 협력 객체(`Arc<dyn Trait>`)만 보유하며
//! 호출 간 상태를 갖지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{UserService, UserServiceImpl};
//!
//! let user_service = UserServiceImpl::new(user_repo, logger, clock);
//! let user = user_service.get_by_id(id).await?;
//! ```

pub mod users;
