//! Millisecond time helpers
//!
//! The engine never reads a clock. `now` is injected by the external
//! scheduler on every call, which keeps every transition deterministic and
//! replayable with a scripted clock under test.

/// Absolute wall-clock time in milliseconds
pub type Timestamp = u64;

/// Sentinel next-activation value meaning "start on the next tick"
pub const IMMEDIATE: Timestamp = 1;

/// Convert whole seconds to milliseconds
pub const fn seconds_to_ms(seconds: u64) -> u64 {
    seconds * 1_000
}

/// Convert whole minutes to milliseconds
pub const fn minutes_to_ms(minutes: u64) -> u64 {
    minutes * 60_000
}

/// Render the time remaining until `target` as an `XhYmZs` countdown.
///
/// A target at or before `now` renders as zero.
pub fn format_countdown(now: Timestamp, target: Timestamp) -> String {
    let left = target.saturating_sub(now);
    let hours = left / 3_600_000;
    let minutes = (left % 3_600_000) / 60_000;
    let seconds = (left % 60_000) / 1_000;
    format!("{hours}h {minutes}m {seconds}s")
}
