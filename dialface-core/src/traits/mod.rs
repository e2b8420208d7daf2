//! Display abstraction traits
//!
//! These traits define the interface between the face renderer and
//! whatever actually puts pixels on a panel.

pub mod surface;

pub use surface::{CommandList, DrawCommand, DrawSurface, SurfaceError, FACE_COMMANDS};
