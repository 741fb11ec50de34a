//! Wall-clock timestamps for document lifecycle fields.
//!
//! Documents carry whole seconds since the Unix epoch. Values are read from
//! the wall clock per call; no monotonicity is implied.

use chrono::{DateTime, Utc};

/// Seconds since the Unix epoch.
pub type UnixSeconds = i64;

/// Returns the current wall-clock time in Unix seconds.
#[must_use]
pub fn unix_now() -> UnixSeconds {
    Utc::now().timestamp()
}

/// Converts Unix seconds to a UTC datetime, if representable.
#[must_use]
pub fn to_datetime(secs: UnixSeconds) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
