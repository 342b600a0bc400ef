//! Decimal digits of a time of day

use chrono::Timelike;

/// The four decimal digits shown on the face, most significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digits {
    pub hour_tens: u8,
    pub hour_units: u8,
    pub minute_tens: u8,
    pub minute_units: u8,
}

impl Digits {
    /// Split an hour (0-23) and a minute (0-59) into their decimal digits.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour_tens: hour / 10,
            hour_units: hour % 10,
            minute_tens: minute / 10,
            minute_units: minute % 10,
        }
    }

    /// Digits of the hour and minute of a chrono time.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // chrono keeps hour < 24 and minute < 60
        Self::new(time.hour() as u8, time.minute() as u8)
    }

    /// Digits in draw order: hour tens, hour units, minute tens, minute units.
    pub const fn as_array(&self) -> [u8; 4] {
        [
            self.hour_tens,
            self.hour_units,
            self.minute_tens,
            self.minute_units,
        ]
    }
}
