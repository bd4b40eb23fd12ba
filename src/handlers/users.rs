//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트와, 서비스 결과를 응답 상태로 바꾸는
//! [`UserController`]를 정의합니다.
//!
//! ## RESTful API 설계
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK / 404 Not Found |
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created / 400 Bad Request |
//! | `DELETE` | `/api/v1/users/{id}` | 사용자 삭제 | 200 OK / 404 Not Found |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @GetMapping("/{id}")
//! public ResponseEntity<UserResponse> getById(@PathVariable UUID id) {
//!     return userService.getById(id)
//!         .map(user -> ResponseEntity.ok(UserResponse.from(user)))
//!         .orElse(ResponseEntity.notFound().build());
//! }
//! ```
//!
//! Rust에서는 컨트롤러가 [`ActionResult`]를 반환하고, actix-web의
//! [`Responder`] 구현이 이를 실제 HTTP 응답으로 렌더링합니다.
//! 컨트롤러 자체는 로깅이나 시간 측정을 하지 않으며, 저장소 실패는
//! `?`를 통해 [`AppError::DatabaseError`]로 바뀌어 500으로 응답됩니다.

use std::sync::Arc;
use actix_web::{
    body::BoxBody,
    delete, get,
    http::{header, StatusCode},
    post, web, HttpRequest, HttpResponse, Responder,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;
use crate::{
    core::errors::{AppError, RepositoryResult},
    domain::dto::users::{request::CreateUserRequest, response::UserResponse},
    services::users::UserService,
};

/// 사용자 리소스의 기본 경로
pub const USERS_BASE_PATH: &str = "/api/v1/users";

/// 컨트롤러 동작 결과
///
/// ASP.NET의 `IActionResult`처럼 상태와 본문을 함께 표현합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// 200 + 본문
    Ok(T),
    /// 200, 본문 없음
    OkEmpty,
    /// 404, 본문 없음
    NotFound,
    /// 201 + `Location` 헤더 + 본문
    Created { location: String, body: T },
    /// 400, 본문 없음
    BadRequest,
}

impl<T> ActionResult<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActionResult::Ok(_) | ActionResult::OkEmpty => StatusCode::OK,
            ActionResult::NotFound => StatusCode::NOT_FOUND,
            ActionResult::Created { .. } => StatusCode::CREATED,
            ActionResult::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    /// 응답 본문. 본문이 없는 결과는 `None`입니다.
    pub fn value(&self) -> Option<&T> {
        match self {
            ActionResult::Ok(body) | ActionResult::Created { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl<T: Serialize> Responder for ActionResult<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = self.status_code();

        match self {
            ActionResult::Ok(body) => HttpResponse::build(status).json(body),
            ActionResult::Created { location, body } => HttpResponse::build(status)
                .insert_header((header::LOCATION, location))
                .json(body),
            ActionResult::OkEmpty | ActionResult::NotFound | ActionResult::BadRequest => {
                HttpResponse::build(status).finish()
            }
        }
    }
}

/// 서비스 결과를 [`ActionResult`]로 매핑하는 얇은 컨트롤러
pub struct UserController {
    user_service: Arc<dyn UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    pub async fn get_all(&self) -> RepositoryResult<ActionResult<Vec<UserResponse>>> {
        let users = self.user_service.get_all().await?;

        Ok(ActionResult::Ok(
            users.into_iter().map(UserResponse::from).collect(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> RepositoryResult<ActionResult<UserResponse>> {
        Ok(match self.user_service.get_by_id(id).await? {
            Some(user) => ActionResult::Ok(UserResponse::from(user)),
            None => ActionResult::NotFound,
        })
    }

    /// 새 식별자를 발급해 사용자를 생성합니다.
    ///
    /// 저장소가 거부하면 `BadRequest`를 반환합니다.
    pub async fn create(
        &self,
        request: CreateUserRequest,
    ) -> RepositoryResult<ActionResult<UserResponse>> {
        let user = request.into_user(Uuid::new_v4());

        if !self.user_service.create(&user).await? {
            return Ok(ActionResult::BadRequest);
        }

        Ok(ActionResult::Created {
            location: format!("{}/{}", USERS_BASE_PATH, user.id),
            body: UserResponse::from(user),
        })
    }

    pub async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<ActionResult<()>> {
        Ok(if self.user_service.delete_by_id(id).await? {
            ActionResult::OkEmpty
        } else {
            ActionResult::NotFound
        })
    }
}

/// 사용자 목록 조회
///
/// ```bash
/// curl http://localhost:8080/api/v1/users
/// ```
#[get("")]
pub async fn get_all_users(
    controller: web::Data<UserController>,
) -> Result<ActionResult<Vec<UserResponse>>, AppError> {
    Ok(controller.get_all().await?)
}

/// ID로 사용자 조회
#[get("/{id}")]
pub async fn get_user(
    controller: web::Data<UserController>,
    id: web::Path<Uuid>,
) -> Result<ActionResult<UserResponse>, AppError> {
    Ok(controller.get_by_id(id.into_inner()).await?)
}

/// 새 사용자 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Nick Chapsas"}'
/// ```
#[post("")]
pub async fn create_user(
    controller: web::Data<UserController>,
    payload: web::Json<CreateUserRequest>,
) -> Result<ActionResult<UserResponse>, AppError> {
    let request = payload.into_inner();

    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(controller.create(request).await?)
}

/// ID로 사용자 삭제
#[delete("/{id}")]
pub async fn delete_user(
    controller: web::Data<UserController>,
    id: web::Path<Uuid>,
) -> Result<ActionResult<()>, AppError> {
    Ok(controller.delete_by_id(id.into_inner()).await?)
}
