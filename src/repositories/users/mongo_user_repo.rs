//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자를 저장하는 [`UserRepository`] 구현체입니다.
//!
//! ## 문서 구조
//!
//! ```json
//! { "_id": "1f0c2a6e-8c8e-4f43-9d1e-6d0b1f2a3c4d", "full_name": "Nick Chapsas" }
//! ```
//!
//! `_id`에는 UUID의 하이픈 포함 문자열을 저장합니다. 기본 `_id` 인덱스가
//! 유일성을 보장하므로 중복 생성은 duplicate key 에러(11000)로 감지되어
//! `Ok(false)`로 변환됩니다. 그 외의 드라이버 에러는 모두
//! `RepositoryError::Database`로 전달됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    Collection,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::{
    core::errors::{RepositoryError, RepositoryResult},
    db::Database,
    domain::entities::users::User,
};
use super::UserRepository;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션의 저장 형식
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.clone(),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = RepositoryError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&document.id).map_err(|e| {
            RepositoryError::InvalidDocument(format!("invalid user id `{}`: {}", document.id, e))
        })?;

        Ok(User::with_id(id, document.full_name))
    }
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(e: mongodb::error::Error) -> Self {
        RepositoryError::Database(e.to_string())
    }
}

/// MongoDB 기반 사용자 저장소
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection(USERS_COLLECTION),
        }
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(User::try_from).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await?;

        document.map(User::try_from).transpose()
    }

    async fn create(&self, user: &User) -> RepositoryResult<bool> {
        match self.collection.insert_one(UserDocument::from(user)).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
