//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 식별자(`id`)는 생성 시 한 번 할당된 뒤 변경되지 않습니다.
/// 비교는 모든 필드의 값 기준이며, 조회는 `id`만 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// 전역 고유 식별자
    pub id: Uuid,
    /// 전체 이름 (중복 허용)
    pub full_name: String,
}

impl User {
    /// 새 식별자를 할당하여 사용자를 생성합니다.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), full_name)
    }

    /// 이미 할당된 식별자로 사용자를 구성합니다.
    pub fn with_id(id: Uuid, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}
