//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 추출/검증, 상태 코드 매핑   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 계측(로그, 경과 시간)               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 메모리 / MongoDB               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 핸들러는 `web::Data<UserController>`로 컨트롤러를 받습니다.
//! 컨트롤러는 `main`에서 한 번 조립되어 모든 워커가 공유합니다.
//!
//! ```rust,ignore
//! let controller = web::Data::new(UserController::new(user_service));
//!
//! App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes)
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 목록 조회 (`GET /api/v1/users`)
//!   - 단건 조회 (`GET /api/v1/users/{id}`)
//!   - 생성 (`POST /api/v1/users`)
//!   - 삭제 (`DELETE /api/v1/users/{id}`)

pub mod users;
