//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 전체 이름 (`fullName`)
//! - 길이: 1-100자 (유니코드 문자 기준)
//! - 공백만으로 구성될 수 없음
//! - 필드가 누락되면 빈 문자열로 역직렬화되어 검증에서 거부됨
//!
//! ## 요청 예시
//!
//! ```json
//! { "fullName": "Nick Chapsas" }
//! ```
//!
//! ## 엔티티 변환
//!
//! 요청은 식별자를 갖지 않습니다. [`CreateUserRequest::into_user`]가 호출자가
//! 발급한 새 식별자를 붙여 엔티티를 만들며, `full_name`은 변경하지 않습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};
use crate::domain::entities::users::User;

/// 사용자 생성 요청 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 전체 이름
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "이름은 1-100자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub full_name: String,
}

impl CreateUserRequest {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// 발급된 식별자로 사용자 엔티티를 생성합니다.
    pub fn into_user(self, id: Uuid) -> User {
        User::with_id(id, self.full_name)
    }
}

/// 공백만 있는 이름 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_full_name")
            .with_message("이름은 공백일 수 없습니다".into()));
    }
    Ok(())
}
