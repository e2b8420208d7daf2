//! Board-agnostic core logic for the analog clock face
//!
//! This crate contains everything needed to turn a time of day into
//! drawing primitives, without depending on a specific display:
//!
//! - Time value with clamping setters and carry-propagating advance
//! - Polar-to-screen coordinate transform and rounding
//! - Static face style (mark gaps, length factors, angular spacing)
//! - Draw surface capability trait and a recording surface
//! - The clock face renderer itself

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod geometry;
pub mod time;
pub mod traits;

// Re-export key types
pub use config::{FaceConfig, FaceStyle, HandGeometry};
pub use face::{ClockFace, FaceError, Hand};
pub use geometry::{Color, Vertex};
pub use time::ClockTime;
pub use traits::{CommandList, DrawCommand, DrawSurface, SurfaceError, FACE_COMMANDS};
