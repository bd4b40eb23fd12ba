//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 저장 기술과 무관하며, 저장소 구현체가 각자의 문서/행 형식으로
//! 변환하여 보관합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
