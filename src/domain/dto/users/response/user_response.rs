use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 엔티티에서 파생되는 읽기 전용 투영(projection)이며 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, full_name } = user;

        Self { id, full_name }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
        }
    }
}
