//! Face placement configuration
//!
//! Describes where a face sits on the panel. Loaded from the firmware's
//! `clock.toml` at build time and turned into a [`ClockFace`] with
//! [`ClockFace::from_config`].
//!
//! [`ClockFace`]: crate::face::ClockFace
//! [`ClockFace::from_config`]: crate::face::ClockFace::from_config

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::face::{ClockFace, FaceError};
use crate::geometry::{Color, Vertex};

/// Default center column (128-pixel-wide panel)
pub const DEFAULT_CENTER_X: u16 = 64;

/// Default center row (128-pixel-high panel)
pub const DEFAULT_CENTER_Y: u16 = 64;

/// Default dial radius
pub const DEFAULT_RADIUS: u16 = 63;

/// Face placement and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Center column in pixels
    pub center_x: u16,
    /// Center row in pixels
    pub center_y: u16,
    /// Outer dial radius in pixels
    pub radius: u16,
    /// Color of the outline and hands
    pub color: Color,
}

impl FaceConfig {
    /// Default placement for a 128x128 panel
    pub const DEFAULT: Self = Self {
        center_x: DEFAULT_CENTER_X,
        center_y: DEFAULT_CENTER_Y,
        radius: DEFAULT_RADIUS,
        color: Color::White,
    };

    /// Center as a vertex
    pub const fn center(&self) -> Vertex {
        Vertex::new(self.center_x, self.center_y)
    }

    /// Check that a face can be built from this config
    pub fn validate(&self) -> Result<(), FaceError> {
        ClockFace::from_config(self).map(|_| ())
    }

    /// Check that the whole dial fits on a panel of the given size
    pub fn fits_panel(&self, width: u16, height: u16) -> bool {
        let right = self.center_x as u32 + self.radius as u32;
        let bottom = self.center_y as u32 + self.radius as u32;
        self.center_x >= self.radius
            && self.center_y >= self.radius
            && right < width as u32
            && bottom < height as u32
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
