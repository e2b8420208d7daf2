//! Pixel-space geometry
//!
//! Screen coordinates have their origin at the top-left corner with y
//! growing downward, so an angle of 0° points right and angles increase
//! clockwise on screen.

pub mod polar;
pub mod vertex;

pub use polar::{deg_to_rad, project, round_to_pixel};
pub use vertex::{Color, Vertex};
