//! Analog clock face renderer
//!
//! Turns a [`ClockTime`](crate::time::ClockTime) into tick-ring and hand
//! line segments and sends them to a [`DrawSurface`](crate::traits::DrawSurface).

pub mod hand;
pub mod renderer;

pub use hand::Hand;
pub use renderer::{ClockFace, FaceError};
