//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소 백엔드, 로깅 관련 설정을 관리합니다.

use std::{env, fmt};
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 로깅 설정
pub struct LoggingConfig;

impl LoggingConfig {
    /// `RUST_LOG`가 없을 때 사용할 기본 필터를 반환합니다.
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 기본 로그 필터
    ///
    /// - Development/Test: `debug,actix_web=debug`
    /// - Staging/Production: `info,actix_web=info`
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 프로세스 메모리 (재시작 시 데이터 소실)
    Memory,
    /// MongoDB `users` 컬렉션
    MongoDb,
}

impl StorageBackend {
    /// 백엔드 이름을 해석합니다. 알 수 없는 이름이면 `None`을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Some(StorageBackend::Memory),
            "mongodb" | "mongo" => Some(StorageBackend::MongoDb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::MongoDb => "mongodb",
        }
    }
}

/// 저장소 설정
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl StorageConfig {
    /// 환경 변수에서 저장소 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// * `STORAGE_BACKEND` - `memory` (기본값) 또는 `mongodb`
    /// * `MONGODB_URI` - 기본값: `mongodb://localhost:27017`
    /// * `DATABASE_NAME` - 기본값: `users_api`
    pub fn from_env() -> Self {
        let backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).unwrap_or_else(|| {
                warn!("알 수 없는 STORAGE_BACKEND `{}`. memory 사용", value);
                StorageBackend::Memory
            }),
            Err(_) => StorageBackend::Memory,
        };

        Self {
            backend,
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "users_api".to_string()),
        }
    }
}

/// 실행 프로필에 해당하는 `.env` 파일 이름
///
/// * `prod` - `.env.prod`
/// * `dev` - `.env.dev`
/// * 그 외 - `None` (기본 `.env` 사용)
pub fn profile_env_file(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱할 수 없는 값은 경고 후 기본값으로 대체됩니다.
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
