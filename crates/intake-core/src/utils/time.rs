//!
//! Time helpers returning UNIX epoch timestamps at the precisions the
//! directory records and log retention need.
//!

use std::time::SystemTime;

fn time_nanos() -> u128 {
    match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_nanos(),
        Err(_) => 0,
    }
}

/// Returns the current UNIX epoch time in seconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> u64 {
    (time_nanos() / 1_000_000_000) as u64
}

/// Returns the current UNIX epoch time in milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_millis() -> u64 {
    (time_nanos() / 1_000_000) as u64
}

///
/// TESTS
///
