//! Minute boundary arithmetic

use chrono::Timelike;

const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;

/// Microseconds left until the minute of `now` is over, always at least 1.
///
/// A leap second (nanoseconds >= 1e9) counts as the last microsecond of
/// second 59.
pub fn micros_until_next_minute<T: Timelike>(now: &T) -> u64 {
    let second = u64::from(now.second().min(59));
    let micros = u64::from(now.nanosecond() / 1_000).min(MICROS_PER_SECOND - 1);
    MICROS_PER_MINUTE - (second * MICROS_PER_SECOND + micros)
}
