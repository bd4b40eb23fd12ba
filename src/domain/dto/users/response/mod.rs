//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::users::response::UserResponse;
//!
//! let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
//! ```

pub mod user_response;

pub use user_response::UserResponse;
