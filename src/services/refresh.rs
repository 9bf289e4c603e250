//! Refresh scheduling
//!
//! A run that hit any failure asks to be retried soon; a clean run can wait.

use chrono::{DateTime, Duration, Utc};

/// Minutes until the next refresh after a run with failures
pub const RETRY_INTERVAL_MINUTES: i64 = 30;

/// Minutes until the next refresh after a clean run
pub const REFRESH_INTERVAL_MINUTES: i64 = 360;

/// When the host should run the widget again
pub fn next_refresh(now: DateTime<Utc>, failed: bool) -> DateTime<Utc> {
    let minutes = if failed {
        RETRY_INTERVAL_MINUTES
    } else {
        REFRESH_INTERVAL_MINUTES
    };
    now + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_failed_run_retries_in_30_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 23, 45, 0).unwrap();
        assert_eq!(
            next_refresh(now, true),
            Utc.with_ymd_and_hms(2026, 10, 19, 0, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_clean_run_waits_6_hours() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        assert_eq!(
            next_refresh(now, false),
            Utc.with_ymd_and_hms(2026, 10, 18, 18, 0, 0).unwrap()
        );
    }
}
