//! Clock hands

use crate::config::{FaceStyle, HandGeometry};
use crate::time::ClockTime;

/// One of the three clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands in drawing order (the second hand ends up on top)
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// The time field this hand follows
    pub const fn value(self, time: &ClockTime) -> u8 {
        match self {
            Hand::Hour => time.hours(),
            Hand::Minute => time.minutes(),
            Hand::Second => time.seconds(),
        }
    }

    /// Geometry of this hand in the given style
    pub const fn geometry(self, style: &FaceStyle) -> &HandGeometry {
        match self {
            Hand::Hour => &style.hour_hand,
            Hand::Minute => &style.minute_hand,
            Hand::Second => &style.second_hand,
        }
    }
}
