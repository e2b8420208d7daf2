//! Display backend
//!
//! Bridges the renderer's [`DrawSurface`] capability onto
//! `embedded-graphics` primitives.

use dialface_core::{Color, DrawSurface, Vertex};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Stroke width of lines and outlines
const STROKE_WIDTH: u32 = 1;

/// Map a face color onto a binary pixel color
pub const fn binary_color(color: Color) -> BinaryColor {
    match color {
        Color::Black => BinaryColor::Off,
        Color::White => BinaryColor::On,
    }
}

fn point(v: Vertex) -> Point {
    Point::new(v.x as i32, v.y as i32)
}

/// Circle diameter covering every pixel within `radius` of the center
const fn diameter(radius: u16) -> u32 {
    2 * radius as u32 + 1
}

/// Draw surface backed by an `embedded-graphics` target
///
/// Pixels outside the target are clipped by the target itself.
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Unwrap the target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DrawSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn fill_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        Circle::with_center(point(center), diameter(radius))
            .into_styled(PrimitiveStyle::with_fill(binary_color(color)))
            .draw(&mut self.target)
    }

    fn draw_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        Circle::with_center(point(center), diameter(radius))
            .into_styled(PrimitiveStyle::with_stroke(binary_color(color), STROKE_WIDTH))
            .draw(&mut self.target)
    }

    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), Self::Error> {
        Line::new(point(from), point(to))
            .into_styled(PrimitiveStyle::with_stroke(binary_color(color), STROKE_WIDTH))
            .draw(&mut self.target)
    }
}
