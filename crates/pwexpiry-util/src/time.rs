//! Clock utilities for pwexpiry
//!
//! Password ages are measured against UTC wall-clock time. Hosts should take
//! "now" from [`now`] rather than `Utc::now()` so that the clock can be
//! shifted during development.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `PWEXPIRY_MOCK_TIME` environment variable can be set
//! to override the system time. This is useful for checking how a stored
//! record will be judged weeks or months from today.
//!
//! Format: `YYYY-MM-DD HH:MM:SS`, interpreted as UTC (e.g., `2026-03-01 09:00:00`)
//!
//! Example, in a host that stamps records and then evaluates them:
//! ```ignore
//! // PWEXPIRY_MOCK_TIME="2026-03-01 09:00:00" ./my-host
//! let now = pwexpiry_util::now();
//! pwexpiry_core::before_save(&mut record, now);
//! let status = engine.status(&record, now);
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use std::sync::OnceLock;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "PWEXPIRY_MOCK_TIME";

const MOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset between mock time and real time, captured once per process.
/// Mock time keeps advancing at the real rate from that point on.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

#[allow(clippy::disallowed_methods)] // wraps Utc::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            let value = std::env::var(MOCK_TIME_ENV_VAR).ok()?;
            let offset = mock_time_offset(&value, Utc::now());
            match offset {
                Some(offset) => tracing::info!(
                    mock_time = %value,
                    offset_secs = offset.num_seconds(),
                    "Mock time enabled"
                ),
                None => tracing::warn!(
                    mock_time = %value,
                    expected_format = MOCK_TIME_FORMAT,
                    "Invalid mock time format"
                ),
            }
            offset
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Offset that moves `real_now` to the mock time in `value`
#[cfg_attr(not(debug_assertions), allow(dead_code))]
fn mock_time_offset(value: &str, real_now: DateTime<Utc>) -> Option<chrono::Duration> {
    let mock_dt = NaiveDateTime::parse_from_str(value, MOCK_TIME_FORMAT)
        .ok()?
        .and_utc();
    Some(mock_dt.signed_duration_since(real_now))
}

/// Get the current UTC time, respecting mock time settings in debug builds.
///
/// In release builds, this always returns the real system time.
#[allow(clippy::disallowed_methods)] // the one sanctioned call site
pub fn now() -> DateTime<Utc> {
    let real_now = Utc::now();

    match get_mock_time_offset() {
        Some(offset) => real_now + offset,
        None => real_now,
    }
}
