//! Display side of Dialface
//!
//! This crate provides:
//! - [`Framebuffer`], a 128x128 monochrome page buffer implementing
//!   `embedded-graphics`' `DrawTarget`
//! - [`GraphicsSurface`], which lets the clock face renderer draw on any
//!   `embedded-graphics` target
//! - [`Sh1107`], an async I2C driver that pushes the frame buffer to a
//!   128x128 SH1107 OLED
//!
//! # Architecture
//!
//! ```text
//! ClockFace ──DrawSurface──▶ GraphicsSurface ──DrawTarget──▶ Framebuffer
//!                                                                │
//!                                                        Sh1107::flush
//!                                                                ▼
//!                                                           OLED panel
//! ```

#![no_std]

pub mod backend;
pub mod framebuffer;
pub mod sh1107;

// Re-export key types
pub use backend::{DisplayError, GraphicsSurface};
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use sh1107::Sh1107;
