//! 단조 시계(monotonic clock) 추상화
//!
//! 서비스 계층의 지연 시간 측정에 사용됩니다. `std::time::Instant` 기반이므로
//! 시스템 시각 변경의 영향을 받지 않으며, 테스트에서는 고정 간격으로 전진하는
//! 시계를 주입해 경과 시간을 결정적으로 검증할 수 있습니다.

use std::time::Instant;

/// 단조 증가하는 현재 시점을 제공하는 기능
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// `Instant::now()`를 그대로 사용하는 기본 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
