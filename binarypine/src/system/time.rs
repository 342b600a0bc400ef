//! Time keeping module for PineTime

use binarypine_ui::micros_until_next_minute;
use chrono::NaiveDateTime;
use embassy_time::{Duration, Instant};

// Build instant and local UTC offset, written by the build script
include!(concat!(env!("OUT_DIR"), "/build_time.rs"));

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// The clock ran past the range of `NaiveDateTime`
    OutOfRange,
}

pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UTC epoch and an offset in seconds
    pub fn from_timestamp(epoch: i64, utc_offset: i32) -> Result<Self, Error> {
        let time = NaiveDateTime::from_timestamp_opt(epoch + i64::from(utc_offset), 0)
            .ok_or(Error::OutOfRange)?;

        Ok(Self {
            time,
            instant: Instant::now(),
        })
    }

    /// Time reference taken when the firmware was built
    pub fn at_build() -> Result<Self, Error> {
        Self::from_timestamp(BUILD_EPOCH, BUILD_UTC_OFFSET)
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current local time
    pub fn now(&self) -> Result<NaiveDateTime, Error> {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        NaiveDateTime::from_timestamp_micros(
            self.reference.time.timestamp_micros() + elapsed.as_micros() as i64,
        )
        .ok_or(Error::OutOfRange)
    }
}

/// Time left until the minute of `now` is over
pub fn until_next_minute(now: &NaiveDateTime) -> Duration {
    Duration::from_micros(micros_until_next_minute(now))
}
