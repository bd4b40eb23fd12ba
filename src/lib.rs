//! 사용자 레코드 관리 서비스
//!
//! 단일 엔티티(User)에 대한 생성/조회/삭제를 제공하는 Rust 기반 REST 서비스입니다.
//! 서비스 계층이 저장소 호출마다 구조화된 로그와 지연 시간 측정을 더하고,
//! 컨트롤러가 그 결과를 HTTP 상태 코드로 매핑합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록/단건 조회, 생성, 삭제
//! - **계측**: 호출별 시작/완료 로그와 경과 시간(ms), 실패 시 에러 로그 1건
//! - **생성자 주입**: `Arc<dyn Trait>` 기반 협력자 주입
//! - **저장소 선택**: 인메모리(기본값) 또는 MongoDB
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 추출기 에러 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← UserController: 결과 → 상태 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserServiceImpl: 로그 + 경과 시간
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory/MongoDB  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_api::core::{LogAdapter, MonotonicClock};
//! use users_api::repositories::users::InMemoryUserRepository;
//! use users_api::services::users::{UserService, UserServiceImpl};
//!
//! let user_service = UserServiceImpl::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(LogAdapter::of::<UserServiceImpl>()),
//!     Arc::new(MonotonicClock),
//! );
//! let users = user_service.get_all().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod test_support;
