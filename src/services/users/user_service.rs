//! # 사용자 서비스 구현
//!
//! 저장소 호출마다 계측(instrumentation)을 더하는 서비스 계층입니다.
//! Spring의 `@Service` + AOP 로깅 aspect를 한 곳에 모아둔 형태와 비슷합니다.
//!
//! ## 호출 흐름
//!
//! ```text
//! UserController
//!       │
//!       ▼
//! ┌──────────────────────────────────────────────┐
//! │ UserServiceImpl                              │
//! │  1. 시작 로그 (info)                          │
//! │  2. clock.now() ─┐                           │
//! │  3. UserRepository 호출 (await)               │
//! │  4. clock.now() ─┘ → 경과 ms                  │
//! │  5a. 성공: 완료 로그 (info, 경과 ms 포함)       │
//! │  5b. 실패: 에러 로그 1건 후 원본 에러 그대로 반환 │
//! └──────────────────────────────────────────────┘
//!       │
//!       ▼
//! UserRepository
//! ```
//!
//! ## 에러 처리
//!
//! 저장소의 [`RepositoryError`]는 변환하지 않고 그대로 반환합니다.
//! `None`(조회 결과 없음)과 `false`(저장소가 거부함)는 실패가 아니므로
//! 에러 로그를 남기지 않습니다. 실패 경로에서는 경과 시간을 기록하지 않습니다.

use std::future::Future;
use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::{
    core::{
        clock::Clock,
        errors::{RepositoryError, RepositoryResult},
        logging::{LogArg, LoggerAdapter},
    },
    domain::entities::users::User,
    repositories::users::UserRepository,
};
use super::UserService;

const GET_ALL_STARTED: &str = "Retrieving all users";
const GET_ALL_COMPLETED: &str = "All users retrieved in {0}ms";
const GET_ALL_FAILED: &str = "Something went wrong while retrieving all users";

const GET_BY_ID_STARTED: &str = "Retrieving user with id: {0}";
const GET_BY_ID_COMPLETED: &str = "User with id {0} retrieved in {1}ms";
const GET_BY_ID_FAILED: &str = "Something went wrong while retrieving user with id {0}";

const CREATE_STARTED: &str = "Creating user with id {0} and name: {1}";
const CREATE_COMPLETED: &str = "User with id {0} created in {1}ms";
const CREATE_FAILED: &str = "Something went wrong while creating a user";

const DELETE_STARTED: &str = "Deleting user with id: {0}";
const DELETE_COMPLETED: &str = "User with id {0} deleted in {1}ms";
const DELETE_FAILED: &str = "Something went wrong while deleting user with id {0}";

/// [`UserService`] 기본 구현체
///
/// 모든 협력자를 생성자로 주입받습니다. 내부 상태가 없으므로
/// `Arc`로 감싸 actix-web 워커 간에 잠금 없이 공유할 수 있습니다.
///
/// ```rust,ignore
/// let service = UserServiceImpl::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(LogAdapter::of::<UserServiceImpl>()),
///     Arc::new(MonotonicClock),
/// );
/// ```
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    logger: Arc<dyn LoggerAdapter>,
    clock: Arc<dyn Clock>,
}

impl UserServiceImpl {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        logger: Arc<dyn LoggerAdapter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            logger,
            clock,
        }
    }

    /// 저장소 호출 직전과 직후 시점으로 경과 밀리초를 측정합니다.
    ///
    /// 호출이 실패하면 두 번째 시점을 읽지 않고 에러를 그대로 돌려줍니다.
    async fn timed<T, F>(&self, call: F) -> RepositoryResult<(T, u128)>
    where
        F: Future<Output = RepositoryResult<T>>,
    {
        let started = self.clock.now();
        let value = call.await?;
        let elapsed = self.clock.now().saturating_duration_since(started);

        Ok((value, elapsed.as_millis()))
    }

    fn fail<T>(
        &self,
        error: RepositoryError,
        template: &str,
        args: &[LogArg],
    ) -> RepositoryResult<T> {
        self.logger.log_error(&error, template, args);
        Err(error)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        self.logger.log_information(GET_ALL_STARTED, &[]);

        match self.timed(self.user_repo.get_all()).await {
            Ok((users, elapsed)) => {
                self.logger
                    .log_information(GET_ALL_COMPLETED, &[LogArg::Millis(elapsed)]);
                Ok(users)
            }
            Err(e) => self.fail(e, GET_ALL_FAILED, &[]),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        self.logger.log_information(GET_BY_ID_STARTED, &[id.into()]);

        match self.timed(self.user_repo.get_by_id(id)).await {
            Ok((user, elapsed)) => {
                self.logger.log_information(
                    GET_BY_ID_COMPLETED,
                    &[id.into(), LogArg::Millis(elapsed)],
                );
                Ok(user)
            }
            Err(e) => self.fail(e, GET_BY_ID_FAILED, &[id.into()]),
        }
    }

    async fn create(&self, user: &User) -> RepositoryResult<bool> {
        self.logger.log_information(
            CREATE_STARTED,
            &[user.id.into(), user.full_name.as_str().into()],
        );

        match self.timed(self.user_repo.create(user)).await {
            Ok((created, elapsed)) => {
                self.logger.log_information(
                    CREATE_COMPLETED,
                    &[user.id.into(), LogArg::Millis(elapsed)],
                );
                Ok(created)
            }
            Err(e) => self.fail(e, CREATE_FAILED, &[]),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        self.logger.log_information(DELETE_STARTED, &[id.into()]);

        match self.timed(self.user_repo.delete_by_id(id)).await {
            Ok((deleted, elapsed)) => {
                self.logger.log_information(
                    DELETE_COMPLETED,
                    &[id.into(), LogArg::Millis(elapsed)],
                );
                Ok(deleted)
            }
            Err(e) => self.fail(e, DELETE_FAILED, &[id.into()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::MonotonicClock;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::test_support::{LogLevel, RecordingLogger, StepClock, StubUserRepository};

    fn service_with(
        repo: Arc<StubUserRepository>,
        logger: Arc<RecordingLogger>,
    ) -> UserServiceImpl {
        UserServiceImpl::new(repo, logger, StepClock::millis(5))
    }

    fn database_error(message: &str) -> RepositoryError {
        RepositoryError::Database(message.to_string())
    }

    // ---- get_all ----

    #[actix_web::test]
    async fn test_get_all_returns_empty_list_when_no_users_exist() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger);

        let users = service.get_all().await.unwrap();

        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_get_all_returns_users_when_some_users_exist() {
        let expected = vec![User::new("Nick Chapsas"), User::new("David")];
        let repo = StubUserRepository {
            get_all: Ok(expected.clone()),
            ..StubUserRepository::new()
        };
        let service = service_with(Arc::new(repo), RecordingLogger::new());

        let users = service.get_all().await.unwrap();

        assert_eq!(users, expected);
    }

    #[actix_web::test]
    async fn test_get_all_logs_start_and_completion() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger.clone());

        service.get_all().await.unwrap();

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].template, "Retrieving all users");
        assert!(entries[0].args.is_empty());
        assert_eq!(entries[1].template, "All users retrieved in {0}ms");
        assert_eq!(entries[1].args, vec![LogArg::Millis(5)]);
        assert!(logger.errors().is_empty());
    }

    #[actix_web::test]
    async fn test_get_all_logs_and_returns_error_when_repository_fails() {
        let logger = RecordingLogger::new();
        let repo = StubUserRepository::failing(database_error("Something went wrong"));
        let service = service_with(Arc::new(repo), logger.clone());

        let result = service.get_all().await;

        let error = result.unwrap_err();
        assert_eq!(error, database_error("Something went wrong"));
        assert_eq!(error.to_string(), "Something went wrong");

        let errors = logger.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].template,
            "Something went wrong while retrieving all users"
        );
        assert_eq!(errors[0].error.as_deref(), Some("Something went wrong"));
        assert!(errors[0].args.is_empty());
    }

    #[actix_web::test]
    async fn test_failure_path_logs_no_elapsed_time() {
        let logger = RecordingLogger::new();
        let clock = StepClock::millis(5);
        let repo = StubUserRepository::failing(database_error("boom"));
        let service = UserServiceImpl::new(Arc::new(repo), logger.clone(), clock.clone());

        let _ = service.get_all().await;

        assert_eq!(clock.ticks(), 1);
        assert_eq!(logger.information().len(), 1);
        assert_eq!(logger.information()[0].template, "Retrieving all users");
    }

    // ---- get_by_id ----

    #[actix_web::test]
    async fn test_get_by_id_returns_user_when_user_exists() {
        let existing = User::new("Nick Chapsas");
        let repo = Arc::new(StubUserRepository {
            get_by_id: Ok(Some(existing.clone())),
            ..StubUserRepository::new()
        });
        let service = service_with(repo.clone(), RecordingLogger::new());

        let user = service.get_by_id(existing.id).await.unwrap();

        assert_eq!(user, Some(existing.clone()));
        assert_eq!(repo.requested_ids(), vec![existing.id]);
    }

    #[actix_web::test]
    async fn test_get_by_id_returns_none_when_user_does_not_exist() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger.clone());

        let user = service.get_by_id(Uuid::new_v4()).await.unwrap();

        assert!(user.is_none());
        assert!(logger.errors().is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_id_logs_start_and_completion_with_id() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger.clone());
        let user_id = Uuid::new_v4();

        service.get_by_id(user_id).await.unwrap();

        let entries = logger.information();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].template, "Retrieving user with id: {0}");
        assert_eq!(entries[0].args, vec![LogArg::Id(user_id)]);
        assert_eq!(entries[1].template, "User with id {0} retrieved in {1}ms");
        assert_eq!(entries[1].args, vec![LogArg::Id(user_id), LogArg::Millis(5)]);
    }

    #[actix_web::test]
    async fn test_get_by_id_logs_and_returns_error_when_repository_fails() {
        let logger = RecordingLogger::new();
        let repo = StubUserRepository::failing(database_error("Something is wrong"));
        let service = service_with(Arc::new(repo), logger.clone());
        let user_id = Uuid::new_v4();

        let error = service.get_by_id(user_id).await.unwrap_err();

        assert_eq!(error.to_string(), "Something is wrong");
        let errors = logger.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].template,
            "Something went wrong while retrieving user with id {0}"
        );
        assert_eq!(errors[0].args, vec![LogArg::Id(user_id)]);
        assert_eq!(errors[0].error.as_deref(), Some("Something is wrong"));
    }

    // ---- create ----

    #[actix_web::test]
    async fn test_create_returns_repository_outcome() {
        let user = User::new("Nick Chapsas");

        for outcome in [true, false] {
            let repo = Arc::new(StubUserRepository {
                create: Ok(outcome),
                ..StubUserRepository::new()
            });
            let service = service_with(repo.clone(), RecordingLogger::new());

            assert_eq!(service.create(&user).await.unwrap(), outcome);
            assert_eq!(repo.created(), vec![user.clone()]);
        }
    }

    #[actix_web::test]
    async fn test_create_logs_start_and_completion() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger.clone());
        let user = User::new("Nick Chapsas");

        service.create(&user).await.unwrap();

        let entries = logger.information();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].template, "Creating user with id {0} and name: {1}");
        assert_eq!(
            entries[0].args,
            vec![LogArg::Id(user.id), LogArg::Text("Nick Chapsas".to_string())]
        );
        assert_eq!(entries[1].template, "User with id {0} created in {1}ms");
        assert_eq!(entries[1].args, vec![LogArg::Id(user.id), LogArg::Millis(5)]);
    }

    #[actix_web::test]
    async fn test_rejected_create_is_not_logged_as_error() {
        let logger = RecordingLogger::new();
        let repo = StubUserRepository {
            create: Ok(false),
            ..StubUserRepository::new()
        };
        let service = service_with(Arc::new(repo), logger.clone());

        assert!(!service.create(&User::new("David")).await.unwrap());
        assert!(logger.errors().is_empty());
        assert_eq!(logger.information().len(), 2);
    }

    #[actix_web::test]
    async fn test_create_logs_and_returns_error_when_repository_fails() {
        let logger = RecordingLogger::new();
        let repo = StubUserRepository::failing(RepositoryError::StorageUnavailable(
            "Something is wrong".to_string(),
        ));
        let service = service_with(Arc::new(repo), logger.clone());

        let error = service.create(&User::new("David")).await.unwrap_err();

        assert_eq!(
            error,
            RepositoryError::StorageUnavailable("Something is wrong".to_string())
        );
        let errors = logger.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].template, "Something went wrong while creating a user");
        assert!(errors[0].args.is_empty());
    }

    // ---- delete_by_id ----

    #[actix_web::test]
    async fn test_delete_by_id_returns_repository_outcome() {
        let user_id = Uuid::new_v4();
        let repo = Arc::new(StubUserRepository {
            delete_by_id: Ok(false),
            ..StubUserRepository::new()
        });
        let service = service_with(repo.clone(), RecordingLogger::new());

        assert!(!service.delete_by_id(user_id).await.unwrap());
        assert_eq!(repo.requested_ids(), vec![user_id]);
    }

    #[actix_web::test]
    async fn test_delete_by_id_logs_start_and_completion() {
        let logger = RecordingLogger::new();
        let service = service_with(Arc::new(StubUserRepository::new()), logger.clone());
        let user_id = Uuid::new_v4();

        service.delete_by_id(user_id).await.unwrap();

        let entries = logger.information();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].template, "Deleting user with id: {0}");
        assert_eq!(entries[0].args, vec![LogArg::Id(user_id)]);
        assert_eq!(entries[1].template, "User with id {0} deleted in {1}ms");
        assert_eq!(entries[1].args, vec![LogArg::Id(user_id), LogArg::Millis(5)]);
    }

    #[actix_web::test]
    async fn test_delete_by_id_logs_and_returns_error_when_repository_fails() {
        let logger = RecordingLogger::new();
        let repo = StubUserRepository::failing(database_error("disk full"));
        let service = service_with(Arc::new(repo), logger.clone());
        let user_id = Uuid::new_v4();

        let error = service.delete_by_id(user_id).await.unwrap_err();

        assert_eq!(error, database_error("disk full"));
        let errors = logger.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].template,
            "Something went wrong while deleting user with id {0}"
        );
        assert_eq!(errors[0].args, vec![LogArg::Id(user_id)]);
    }

    // ---- ordering & timing ----

    #[actix_web::test]
    async fn test_start_log_precedes_repository_call() {
        let logger = RecordingLogger::new();
        let repo = Arc::new(StubUserRepository::new().observing(logger.clone()));
        let service = service_with(repo.clone(), logger.clone());

        service.get_all().await.unwrap();
        service.get_by_id(Uuid::new_v4()).await.unwrap();
        service.create(&User::new("David")).await.unwrap();
        service.delete_by_id(Uuid::new_v4()).await.unwrap();

        // 호출마다 시작 로그 1건이 먼저 쌓이고, 완료 로그는 호출 이후에 쌓입니다.
        assert_eq!(repo.entries_at_call(), vec![1, 3, 5, 7]);
        assert!(logger
            .entries()
            .iter()
            .all(|entry| entry.level == LogLevel::Information));
    }

    #[actix_web::test]
    async fn test_elapsed_time_comes_from_injected_clock() {
        let logger = RecordingLogger::new();
        let service = UserServiceImpl::new(
            Arc::new(StubUserRepository::new()),
            logger.clone(),
            StepClock::millis(250),
        );

        service.get_all().await.unwrap();

        assert_eq!(logger.information()[1].args, vec![LogArg::Millis(250)]);
    }

    #[actix_web::test]
    async fn test_service_over_in_memory_repository() {
        let logger = RecordingLogger::new();
        let service = UserServiceImpl::new(
            Arc::new(InMemoryUserRepository::new()),
            logger.clone(),
            Arc::new(MonotonicClock),
        );
        let user = User::new("Nick Chapsas");

        assert!(service.create(&user).await.unwrap());
        assert!(!service.create(&user).await.unwrap());
        assert_eq!(service.get_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(service.get_all().await.unwrap(), vec![user.clone()]);
        assert!(service.delete_by_id(user.id).await.unwrap());
        assert!(!service.delete_by_id(user.id).await.unwrap());
        assert!(logger.errors().is_empty());
    }
}
