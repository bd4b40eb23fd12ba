//! # Data Transfer Objects Module
//!
//! API 계층과 클라이언트 간의 데이터 교환 형식을 정의합니다.
//!
//! ## 명명 규칙
//! - **Request DTO**: `{Action}{Entity}Request` (예: `CreateUserRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `UserResponse`)
//!
//! ## 변환 패턴
//! - **Entity → Response**: `impl From<Entity> for Response`
//! - **Request → Entity**: 식별자 발급이 필요하므로 별도 변환 메서드 사용
//!
//! JSON 필드는 camelCase로 직렬화됩니다 (`fullName`).

pub mod users;

pub use users::*;
