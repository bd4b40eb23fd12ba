//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   └── create_user.rs         # 사용자 생성 요청
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 사용자 응답 (투영)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
