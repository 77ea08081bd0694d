//! Packed request/error counter
//!
//! A single integer tallies two counters using decimal place value:
//! `value = errors * 1000 + requests`, each field in `0..=999`. When either
//! field is about to overflow the whole value is halved, which scales both
//! counters down together instead of carrying one into the other.

use tracing::debug;

/// Exclusive upper bound of each sub-counter
const FIELD_BASE: u64 = 1000;
const FIELD_MAX: u64 = FIELD_BASE - 1;

/// Increment for a request that did not fail
const REQUEST_DELTA: u64 = 1;
/// Increment for a failed request: one request and one error
const ERROR_DELTA: u64 = FIELD_BASE + REQUEST_DELTA;

/// Record one request (and one error if `is_error`) in a packed counter value.
///
/// A missing value counts as 0. Out of range inputs never panic.
///
/// ```
/// use live_track::increment_requests;
///
/// assert_eq!(increment_requests(None, false), 1);
/// assert_eq!(increment_requests(None, true), 1001);
/// assert_eq!(increment_requests(Some(999), false), 500);
/// ```
pub fn increment_requests(current: Option<u64>, is_error: bool) -> u64 {
    let count = current.unwrap_or(0);
    let requests = count % FIELD_BASE;
    let errors = count / FIELD_BASE;

    let overflow = requests == FIELD_MAX || (is_error && errors == FIELD_MAX);
    let delta = if is_error { ERROR_DELTA } else { REQUEST_DELTA };
    let next = count.saturating_add(delta);

    if overflow {
        debug!(count, is_error, "packed counter overflow, halving");
        next / 2
    } else {
        next
    }
}

/// Typed view of a packed counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestCounter(u64);

impl RequestCounter {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Build from separate counts, `None` if either does not fit its field
    pub fn from_counts(requests: u64, errors: u64) -> Option<Self> {
        if requests > FIELD_MAX || errors > FIELD_MAX {
            return None;
        }
        Some(Self(errors * FIELD_BASE + requests))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn request_count(self) -> u64 {
        self.0 % FIELD_BASE
    }

    pub const fn error_count(self) -> u64 {
        self.0 / FIELD_BASE
    }

    #[must_use]
    pub fn increment(self, is_error: bool) -> Self {
        Self(increment_requests(Some(self.0), is_error))
    }
}

impl From<u64> for RequestCounter {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RequestCounter> for u64 {
    fn from(counter: RequestCounter) -> Self {
        counter.0
    }
}
