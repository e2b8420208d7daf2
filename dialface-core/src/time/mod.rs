//! Time-of-day value
//!
//! Holds the time shown by the clock face and the carry logic used to
//! advance it.

pub mod clock_time;

pub use clock_time::{
    ClockTime, MAX_HOURS, MAX_MILLISECONDS, MAX_MINUTES, MAX_SECONDS, MILLIS_PER_DAY, MIN,
};
