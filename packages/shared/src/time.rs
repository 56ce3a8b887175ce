//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is within range")
}

fn to_jst(timestamp_millis: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(timestamp_millis).map(|dt| dt.with_timezone(&jst()))
}

/// Convert Unix timestamp (milliseconds) to a JST wall-clock time (`HH:MM:SS`)
pub fn timestamp_to_jst_clock(timestamp_millis: i64) -> String {
    to_jst(timestamp_millis)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_increasing_timestamps() {
        // テスト項目: SystemClock が呼び出すたびに増加するタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp1 = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp1 > 0);
        assert!(timestamp2 >= timestamp1);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_timestamp() {
        // テスト項目: FixedClock が複数回呼び出しても同じタイムスタンプを返す
        // given (前提条件):
        let fixed_time = 1234567890123;
        let clock = FixedClock::new(fixed_time);

        // when (操作):
        let timestamp1 = clock.now_millis();
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert_eq!(timestamp1, fixed_time);
        assert_eq!(timestamp2, fixed_time);
    }

    #[test]
    fn test_timestamp_to_jst_clock_format() {
        // テスト項目: タイムスタンプが JST の時刻 (HH:MM:SS) に変換される
        // given (前提条件):
        // 2023-01-01 12:34:56.789 JST in milliseconds
        let timestamp = 1672498800000 + (12 * 3600 + 34 * 60 + 56) * 1000 + 789;

        // when (操作):
        let result = timestamp_to_jst_clock(timestamp);

        // then (期待する結果):
        assert_eq!(result, "12:34:56");
    }

    #[test]
    fn test_timestamp_to_jst_clock_out_of_range() {
        // テスト項目: 範囲外のタイムスタンプではプレースホルダが返される
        // given (前提条件):
        let timestamp = i64::MAX;

        // when (操作):
        let result = timestamp_to_jst_clock(timestamp);

        // then (期待する結果):
        assert_eq!(result, "--:--:--");
    }
}
