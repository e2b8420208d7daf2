//! Pixel coordinates and colors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in display pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Column (0 = left edge)
    pub x: u16,
    /// Row (0 = top edge)
    pub y: u16,
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Monochrome display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Pixel off
    Black,
    /// Pixel on
    #[default]
    White,
}

impl Color {
    /// Whether this color lights the pixel
    pub const fn is_on(self) -> bool {
        matches!(self, Color::White)
    }
}
