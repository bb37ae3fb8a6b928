use crate::ports::clock::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// システム時計によるClock実装
///
/// レスポンスの時刻表記（ミリ秒精度）と保存値が一致するよう、ミリ秒に切り捨てる。
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
