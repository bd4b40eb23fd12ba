//! 단위 테스트용 협력자 더블
//!
//! 서비스와 컨트롤러가 의존하는 trait([`UserRepository`], [`UserService`],
//! [`LoggerAdapter`], [`Clock`])을 손으로 구현한 대역들입니다.
//! 각 더블은 반환값을 미리 지정할 수 있고, 받은 호출을 기록합니다.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::clock::Clock;
use crate::core::errors::{RepositoryError, RepositoryResult};
use crate::core::logging::{LogArg, LoggerAdapter};
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;
use crate::services::users::UserService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Information,
    Error,
}

/// 기록된 로그 항목 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub template: String,
    pub args: Vec<LogArg>,
    /// 에러 항목일 때 원본 에러의 메시지
    pub error: Option<String>,
}

/// 템플릿과 인자를 렌더링하지 않고 그대로 보관하는 로거
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn information(&self) -> Vec<LogEntry> {
        self.by_level(LogLevel::Information)
    }

    pub fn errors(&self) -> Vec<LogEntry> {
        self.by_level(LogLevel::Error)
    }

    fn by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .collect()
    }
}

impl LoggerAdapter for RecordingLogger {
    fn log_information(&self, template: &str, args: &[LogArg]) {
        self.entries.lock().unwrap().push(LogEntry {
            level: LogLevel::Information,
            template: template.to_string(),
            args: args.to_vec(),
            error: None,
        });
    }

    fn log_error(&self, error: &dyn std::error::Error, template: &str, args: &[LogArg]) {
        self.entries.lock().unwrap().push(LogEntry {
            level: LogLevel::Error,
            template: template.to_string(),
            args: args.to_vec(),
            error: Some(error.to_string()),
        });
    }
}

/// 호출될 때마다 `step`만큼 전진하는 시계
///
/// 첫 호출은 기준 시점을, n번째 호출은 `기준 + step * (n - 1)`을 반환합니다.
#[derive(Debug)]
pub struct StepClock {
    base: Instant,
    step: Duration,
    ticks: AtomicU32,
}

impl StepClock {
    pub fn new(step: Duration) -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            step,
            ticks: AtomicU32::new(0),
        })
    }

    pub fn millis(step: u64) -> Arc<Self> {
        Self::new(Duration::from_millis(step))
    }

    /// `now()`가 호출된 횟수
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + self.step * tick
    }
}

/// 미리 지정된 결과를 돌려주는 저장소
///
/// 관찰 대상 로거를 지정하면 저장소가 호출된 시점의 로그 항목 수를 기록하므로,
/// 시작 로그가 저장소 호출보다 먼저 남았는지 검증할 수 있습니다.
pub struct StubUserRepository {
    pub get_all: RepositoryResult<Vec<User>>,
    pub get_by_id: RepositoryResult<Option<User>>,
    pub create: RepositoryResult<bool>,
    pub delete_by_id: RepositoryResult<bool>,
    pub requested_ids: Mutex<Vec<Uuid>>,
    pub created: Mutex<Vec<User>>,
    pub observed: Option<Arc<RecordingLogger>>,
    pub entries_at_call: Mutex<Vec<usize>>,
}

impl Default for StubUserRepository {
    fn default() -> Self {
        Self {
            get_all: Ok(Vec::new()),
            get_by_id: Ok(None),
            create: Ok(true),
            delete_by_id: Ok(true),
            requested_ids: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            observed: None,
            entries_at_call: Mutex::new(Vec::new()),
        }
    }
}

impl StubUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self {
            get_all: Err(error.clone()),
            get_by_id: Err(error.clone()),
            create: Err(error.clone()),
            delete_by_id: Err(error),
            ..Self::default()
        }
    }

    pub fn observing(mut self, logger: Arc<RecordingLogger>) -> Self {
        self.observed = Some(logger);
        self
    }

    /// `get_by_id`/`delete_by_id`로 전달된 ID 목록
    pub fn requested_ids(&self) -> Vec<Uuid> {
        self.requested_ids.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<User> {
        self.created.lock().unwrap().clone()
    }

    /// 각 호출 시점에 관찰 대상 로거에 쌓여 있던 항목 수
    pub fn entries_at_call(&self) -> Vec<usize> {
        self.entries_at_call.lock().unwrap().clone()
    }

    fn observe(&self) {
        if let Some(logger) = &self.observed {
            self.entries_at_call.lock().unwrap().push(logger.len());
        }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        self.observe();
        self.get_all.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        self.observe();
        self.requested_ids.lock().unwrap().push(id);
        self.get_by_id.clone()
    }

    async fn create(&self, user: &User) -> RepositoryResult<bool> {
        self.observe();
        self.created.lock().unwrap().push(user.clone());
        self.create.clone()
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        self.observe();
        self.requested_ids.lock().unwrap().push(id);
        self.delete_by_id.clone()
    }
}

/// 미리 지정된 결과를 돌려주는 서비스
pub struct StubUserService {
    pub get_all: RepositoryResult<Vec<User>>,
    pub get_by_id: RepositoryResult<Option<User>>,
    pub create: RepositoryResult<bool>,
    pub delete_by_id: RepositoryResult<bool>,
    pub created: Mutex<Vec<User>>,
    pub requested_ids: Mutex<Vec<Uuid>>,
}

impl Default for StubUserService {
    fn default() -> Self {
        Self {
            get_all: Ok(Vec::new()),
            get_by_id: Ok(None),
            create: Ok(true),
            delete_by_id: Ok(true),
            created: Mutex::new(Vec::new()),
            requested_ids: Mutex::new(Vec::new()),
        }
    }
}

impl StubUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// `create`로 전달된 사용자 목록
    pub fn created(&self) -> Vec<User> {
        self.created.lock().unwrap().clone()
    }

    pub fn requested_ids(&self) -> Vec<Uuid> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        self.get_all.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        self.requested_ids.lock().unwrap().push(id);
        self.get_by_id.clone()
    }

    async fn create(&self, user: &User) -> RepositoryResult<bool> {
        self.created.lock().unwrap().push(user.clone());
        self.create.clone()
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        self.requested_ids.lock().unwrap().push(id);
        self.delete_by_id.clone()
    }
}
