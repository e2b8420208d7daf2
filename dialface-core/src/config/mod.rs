//! Configuration types
//!
//! The face style is a static record of the dial geometry. The face
//! config describes where a face sits on the panel and can be loaded
//! from a configuration file.

pub mod face;
pub mod style;

pub use face::*;
pub use style::*;
