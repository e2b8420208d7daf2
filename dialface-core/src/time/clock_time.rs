//! Clock time value and advance utility
//!
//! Out-of-range fields passed to the constructor are reset to [`MIN`]
//! rather than wrapped. Advancing the time always carries correctly
//! from milliseconds up to the day boundary.

use core::fmt;

/// Minimum value of every field
pub const MIN: u8 = 0;

/// Largest valid hour
pub const MAX_HOURS: u8 = 23;

/// Largest valid minute
pub const MAX_MINUTES: u8 = 59;

/// Largest valid second
pub const MAX_SECONDS: u8 = 59;

/// Largest valid millisecond
pub const MAX_MILLISECONDS: u16 = 999;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: u32 = 24 * MILLIS_PER_HOUR as u32;

/// Time of day with millisecond resolution
///
/// Every field is always within its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

impl ClockTime {
    /// Midnight (00:00:00.000)
    pub const MIDNIGHT: Self = Self {
        hours: MIN,
        minutes: MIN,
        seconds: MIN,
        milliseconds: MIN as u16,
    };

    /// Create a time value, resetting any out-of-range field to zero
    ///
    /// Each field is checked on its own, so `new(24, 30, 61, 500)` gives
    /// 00:30:00.500.
    pub const fn new(hours: u8, minutes: u8, seconds: u8, milliseconds: u16) -> Self {
        Self {
            hours: if hours > MAX_HOURS { MIN } else { hours },
            minutes: if minutes > MAX_MINUTES { MIN } else { minutes },
            seconds: if seconds > MAX_SECONDS { MIN } else { seconds },
            milliseconds: if milliseconds > MAX_MILLISECONDS {
                MIN as u16
            } else {
                milliseconds
            },
        }
    }

    /// Build from milliseconds since midnight, wrapping at 24 hours
    pub const fn from_millis_of_day(millis: u32) -> Self {
        let millis = (millis % MILLIS_PER_DAY) as u64;
        Self {
            hours: (millis / MILLIS_PER_HOUR) as u8,
            minutes: ((millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
            milliseconds: (millis % MILLIS_PER_SECOND) as u16,
        }
    }

    /// Milliseconds elapsed since midnight
    pub const fn as_millis_of_day(&self) -> u32 {
        (self.hours as u64 * MILLIS_PER_HOUR
            + self.minutes as u64 * MILLIS_PER_MINUTE
            + self.seconds as u64 * MILLIS_PER_SECOND
            + self.milliseconds as u64) as u32
    }

    /// Hours (0-23)
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes (0-59)
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds (0-59)
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Milliseconds (0-999)
    pub const fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    /// Advance by exactly one second
    ///
    /// Carries into minutes and hours and wraps at 24 hours. Milliseconds
    /// are left untouched. Returns `true` when the day rolled over.
    pub fn increment_seconds(&mut self) -> bool {
        if self.seconds < MAX_SECONDS {
            self.seconds += 1;
            return false;
        }
        self.seconds = MIN;

        if self.minutes < MAX_MINUTES {
            self.minutes += 1;
            return false;
        }
        self.minutes = MIN;

        if self.hours < MAX_HOURS {
            self.hours += 1;
            return false;
        }
        self.hours = MIN;
        true
    }

    /// Add a duration, carrying through every field
    ///
    /// The arguments are a duration, not a time of day, so they may exceed
    /// the field ranges (e.g. 90 seconds). Returns the number of whole
    /// days carried past midnight.
    pub fn add(&mut self, hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> u32 {
        let total = self.as_millis_of_day() as u64
            + hours as u64 * MILLIS_PER_HOUR
            + minutes as u64 * MILLIS_PER_MINUTE
            + seconds as u64 * MILLIS_PER_SECOND
            + milliseconds as u64;

        let day = MILLIS_PER_DAY as u64;
        *self = Self::from_millis_of_day((total % day) as u32);
        (total / day) as u32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}
