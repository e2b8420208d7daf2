//! Draw surface capability
//!
//! The renderer only needs three primitives: a filled disc (to erase the
//! dial), a circle outline and a one-pixel line.

use heapless::Vec;

use crate::config::FaceStyle;
use crate::geometry::{Color, Vertex};

/// Commands issued by one full repaint of the classic face
///
/// Other styles need [`FaceStyle::command_count`] slots instead.
pub const FACE_COMMANDS: usize = FaceStyle::CLASSIC.command_count();

/// Errors produced by the built-in surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Command buffer is full
    BufferOverflow,
}

/// Primitive drawing operations consumed by the renderer
///
/// Implementations decide how (and whether) to clip; the renderer only
/// passes coordinates within `center ± radius` of a validated face.
pub trait DrawSurface {
    /// Error type for drawing operations
    type Error;

    /// Fill a solid disc
    fn fill_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error>;

    /// Draw a circle outline
    fn draw_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error>;

    /// Draw a line between two points (both inclusive)
    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), Self::Error>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    type Error = S::Error;

    fn fill_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        (**self).fill_circle(center, radius, color)
    }

    fn draw_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        (**self).draw_circle(center, radius, color)
    }

    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), Self::Error> {
        (**self).draw_line(from, to, color)
    }
}

/// A single recorded drawing primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    /// Solid disc
    FillCircle {
        center: Vertex,
        radius: u16,
        color: Color,
    },
    /// Circle outline
    DrawCircle {
        center: Vertex,
        radius: u16,
        color: Color,
    },
    /// Line segment
    Line { from: Vertex, to: Vertex, color: Color },
}

impl DrawCommand {
    /// Replay this command onto another surface
    pub fn apply<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        match *self {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => surface.fill_circle(center, radius, color),
            DrawCommand::DrawCircle {
                center,
                radius,
                color,
            } => surface.draw_circle(center, radius, color),
            DrawCommand::Line { from, to, color } => surface.draw_line(from, to, color),
        }
    }

    /// Whether this is a line segment
    pub const fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }
}

/// Fixed-capacity surface that records commands instead of drawing them
///
/// Useful for deferring a repaint to another context (e.g. a display
/// task) and for inspecting what the renderer emits.
#[derive(Debug, Clone, Default)]
pub struct CommandList<const N: usize = FACE_COMMANDS> {
    commands: Vec<DrawCommand, N>,
}

impl<const N: usize> CommandList<N> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Recorded commands, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded line segments, in order
    pub fn lines(&self) -> impl Iterator<Item = (Vertex, Vertex, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    /// Replay every recorded command onto another surface
    pub fn replay<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for cmd in &self.commands {
            cmd.apply(surface)?;
        }
        Ok(())
    }

    fn push(&mut self, cmd: DrawCommand) -> Result<(), SurfaceError> {
        self.commands
            .push(cmd)
            .map_err(|_| SurfaceError::BufferOverflow)
    }
}

impl<const N: usize> DrawSurface for CommandList<N> {
    type Error = SurfaceError;

    fn fill_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        })
    }

    fn draw_circle(&mut self, center: Vertex, radius: u16, color: Color) -> Result<(), Self::Error> {
        self.push(DrawCommand::DrawCircle {
            center,
            radius,
            color,
        })
    }

    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), Self::Error> {
        self.push(DrawCommand::Line { from, to, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list: CommandList<4> = CommandList::new();
        let c = Vertex::new(10, 10);
        list.fill_circle(c, 5, Color::Black).unwrap();
        list.draw_line(c, Vertex::new(12, 10), Color::White).unwrap();
        list.draw_circle(c, 5, Color::White).unwrap();

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::FillCircle { .. }));
        assert!(list.commands()[1].is_line());
        assert!(matches!(list.commands()[2], DrawCommand::DrawCircle { .. }));
        assert_eq!(list.lines().count(), 1);
    }

    #[test]
    fn test_overflow() {
        let mut list: CommandList<1> = CommandList::new();
        let c = Vertex::new(0, 0);
        assert!(list.draw_line(c, c, Color::White).is_ok());
        assert_eq!(
            list.draw_line(c, c, Color::White),
            Err(SurfaceError::BufferOverflow)
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_classic_repaint_fits_default_capacity() {
        assert_eq!(FACE_COMMANDS, 1 + 61 + 1 + 3);
        assert_eq!(FaceStyle::CLASSIC.command_count(), FACE_COMMANDS);
    }

    #[test]
    fn test_clear_allows_reuse() {
        let mut list: CommandList<1> = CommandList::new();
        let c = Vertex::new(1, 1);
        list.draw_circle(c, 1, Color::White).unwrap();
        assert!(list.draw_circle(c, 1, Color::White).is_err());

        list.clear();
        assert!(list.is_empty());
        list.fill_circle(c, 1, Color::Black).unwrap();
        assert!(matches!(list.commands()[0], DrawCommand::FillCircle { .. }));
    }

    #[test]
    fn test_replay_copies_commands() {
        let mut src: CommandList<4> = CommandList::new();
        let c = Vertex::new(3, 4);
        src.fill_circle(c, 2, Color::Black).unwrap();
        src.draw_line(c, Vertex::new(5, 4), Color::White).unwrap();

        let mut dst: CommandList<4> = CommandList::new();
        src.replay(&mut dst).unwrap();
        assert_eq!(src.commands(), dst.commands());
    }
}
