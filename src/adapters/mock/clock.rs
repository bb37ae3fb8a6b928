use crate::ports::clock::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

/// Clockのモック実装
///
/// `advance` や `set` で動かすまで固定の時刻を返す。
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// テスト用に時刻を進める
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// テスト用に時刻を指定の値に固定する
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }
}

impl Default for FixedClock {
    /// 2024-01-01T00:00:00.000Z
    fn default() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
