//! Dial geometry
//!
//! Every constant that shapes the dial lives here, so a different face
//! layout only needs a different [`FaceStyle`] value.

/// Gap between hand reach and its drawn length, as a fraction of radius
pub const HANDS_GAP: f32 = 0.2;

/// Angular geometry of a single hand
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandGeometry {
    /// Number of units in a full turn (12 for hours, 60 for minutes)
    pub modulus: u8,
    /// Units added before the modulo so that zero points up
    ///
    /// Screen angle 0° points right; a quarter turn back is 270°, i.e.
    /// 9 hours or 45 minutes.
    pub offset: u8,
    /// Degrees covered by one unit
    pub degrees_per_unit: f32,
    /// Nominal reach as a fraction of the dial radius
    pub reach: f32,
    /// Fraction subtracted from the reach
    pub gap: f32,
}

impl HandGeometry {
    /// Effective length as a fraction of the dial radius
    pub fn length_factor(&self) -> f32 {
        self.reach - self.gap
    }

    /// Whether the hand can be drawn inside the dial
    ///
    /// Needs a non-zero modulus and a length factor within `0.0..=1.0`.
    pub fn is_valid(&self) -> bool {
        self.modulus != 0 && unit_fraction(self.length_factor())
    }

    /// Screen angle in degrees for a raw time field value
    pub fn angle_deg(&self, value: u8) -> f32 {
        let units = (value as u16 + self.offset as u16) % self.modulus as u16;
        units as f32 * self.degrees_per_unit
    }
}

/// Whether a factor is a finite fraction of the radius
fn unit_fraction(factor: f32) -> bool {
    (0.0..=1.0).contains(&factor)
}

/// Hour hand: 30° per hour, 0.6 reach less the hands gap
pub const HOUR_HAND: HandGeometry = HandGeometry {
    modulus: 12,
    offset: 9,
    degrees_per_unit: 30.0,
    reach: 0.6,
    gap: HANDS_GAP,
};

/// Minute hand: 6° per minute, 0.9 reach less the hands gap
pub const MINUTE_HAND: HandGeometry = HandGeometry {
    modulus: 60,
    offset: 45,
    degrees_per_unit: 6.0,
    reach: 0.9,
    gap: HANDS_GAP,
};

/// Second hand: 6° per second, full radius
pub const SECOND_HAND: HandGeometry = HandGeometry {
    modulus: 60,
    offset: 45,
    degrees_per_unit: 6.0,
    reach: 1.0,
    gap: 0.0,
};

/// Complete dial layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceStyle {
    /// Inward gap between the outer circle and the tick ring (pixels)
    pub mark_gap: u16,
    /// Inner end of an hour mark, as a fraction of the inset radius
    pub hour_mark_factor: f32,
    /// Inner end of a minute mark, as a fraction of the inset radius
    pub minute_mark_factor: f32,
    /// Degrees between neighbouring tick positions
    pub tick_spacing_deg: f32,
    /// Last tick position; positions run `0..=last_tick`
    pub last_tick: u16,
    /// Every n-th position is an hour mark
    pub hour_mark_every: u16,
    /// Hour hand geometry
    pub hour_hand: HandGeometry,
    /// Minute hand geometry
    pub minute_hand: HandGeometry,
    /// Second hand geometry
    pub second_hand: HandGeometry,
}

impl FaceStyle {
    /// Classic 60-tick face with elongated hour marks
    ///
    /// The tick ring runs over 61 positions; position 60 overdraws
    /// position 0.
    pub const CLASSIC: Self = Self {
        mark_gap: 3,
        hour_mark_factor: 0.80,
        minute_mark_factor: 0.95,
        tick_spacing_deg: 6.0,
        last_tick: 60,
        hour_mark_every: 5,
        hour_hand: HOUR_HAND,
        minute_hand: MINUTE_HAND,
        second_hand: SECOND_HAND,
    };

    /// Number of tick segments drawn per repaint
    pub const fn tick_count(&self) -> usize {
        self.last_tick as usize + 1
    }

    /// Commands issued by one full repaint
    ///
    /// One erase, the tick ring, one outline and three hands.
    pub const fn command_count(&self) -> usize {
        self.tick_count() + 5
    }

    /// Whether every hand and mark stays inside the dial
    ///
    /// The mark gap is checked against the radius at construction.
    pub fn is_valid(&self) -> bool {
        unit_fraction(self.hour_mark_factor)
            && unit_fraction(self.minute_mark_factor)
            && self.tick_spacing_deg.is_finite()
            && self.hour_hand.is_valid()
            && self.minute_hand.is_valid()
            && self.second_hand.is_valid()
    }

    /// Whether a tick position is an hour mark
    pub const fn is_hour_mark(&self, pos: u16) -> bool {
        self.hour_mark_every != 0 && pos % self.hour_mark_every == 0
    }

    /// Inner-end factor for a tick position
    pub const fn mark_factor(&self, pos: u16) -> f32 {
        if self.is_hour_mark(pos) {
            self.hour_mark_factor
        } else {
            self.minute_mark_factor
        }
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::CLASSIC
    }
}
