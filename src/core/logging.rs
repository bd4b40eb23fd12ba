//! # Logger Adapter
//!
//! 서비스 계층이 의존하는 로깅 추상화입니다.
//! 메시지는 `{0}`, `{1}` 형태의 위치 기반 플레이스홀더를 가진 고정 템플릿과
//! 순서대로 채워지는 인자 목록으로 구성됩니다.
//!
//! 운영 환경에서는 [`LogAdapter`]가 `log` 파사드로 출력을 위임하고
//! (`env_logger`가 실제 출력 담당), 테스트에서는 같은 trait을 구현한
//! 기록용 더블이 템플릿과 인자를 그대로 보관합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::core::logging::{LogAdapter, LogArg, LoggerAdapter};
//!
//! let logger = LogAdapter::of::<UserServiceImpl>();
//! logger.log_information("User with id {0} retrieved in {1}ms", &[user.id.into(), LogArg::Millis(3)]);
//! ```

use std::fmt;
use log::{error, info, log_enabled, Level};
use uuid::Uuid;

/// 로그 템플릿의 위치 인자
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogArg {
    /// 엔티티 식별자
    Id(Uuid),
    /// 임의 문자열 (예: 사용자 이름)
    Text(String),
    /// 경과 시간 (밀리초)
    Millis(u128),
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Id(id) => write!(f, "{}", id),
            LogArg::Text(text) => f.write_str(text),
            LogArg::Millis(ms) => write!(f, "{}", ms),
        }
    }
}

impl From<Uuid> for LogArg {
    fn from(id: Uuid) -> Self {
        LogArg::Id(id)
    }
}

impl From<&str> for LogArg {
    fn from(text: &str) -> Self {
        LogArg::Text(text.to_string())
    }
}

impl From<String> for LogArg {
    fn from(text: String) -> Self {
        LogArg::Text(text)
    }
}

/// 레벨별 로깅 기능
///
/// 서비스는 템플릿마다 정확한 개수와 순서의 인자를 전달할 책임이 있습니다.
pub trait LoggerAdapter: Send + Sync {
    /// 정보 레벨 메시지를 기록합니다.
    fn log_information(&self, template: &str, args: &[LogArg]);

    /// 원본 에러와 함께 에러 레벨 메시지를 기록합니다.
    fn log_error(&self, error: &dyn std::error::Error, template: &str, args: &[LogArg]);
}

/// `log` 크레이트 기반 [`LoggerAdapter`] 구현체
///
/// 로그 타깃은 소유 컴포넌트의 타입 이름이 되므로,
/// `RUST_LOG=users_api::services=debug`처럼 모듈 경로 기준 필터링이 가능합니다.
#[derive(Debug, Clone)]
pub struct LogAdapter {
    target: &'static str,
}

impl LogAdapter {
    /// 타입 `T`를 로그 타깃으로 사용하는 어댑터를 생성합니다.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            target: std::any::type_name::<T>(),
        }
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl LoggerAdapter for LogAdapter {
    fn log_information(&self, template: &str, args: &[LogArg]) {
        if log_enabled!(target: self.target, Level::Info) {
            info!(target: self.target, "{}", render_template(template, args));
        }
    }

    fn log_error(&self, err: &dyn std::error::Error, template: &str, args: &[LogArg]) {
        error!(target: self.target, "{}: {}", render_template(template, args), err);
    }
}

/// 위치 기반 템플릿을 인자로 채웁니다.
///
/// 인자가 없는 인덱스나 숫자가 아닌 플레이스홀더는 원문 그대로 남깁니다.
pub fn render_template(template: &str, args: &[LogArg]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            rendered.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let key = &after[..close];
        match key.parse::<usize>().ok().and_then(|index| args.get(index)) {
            Some(arg) => rendered.push_str(&arg.to_string()),
            None => {
                rendered.push('{');
                rendered.push_str(key);
                rendered.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    rendered.push_str(rest);
    rendered
}
