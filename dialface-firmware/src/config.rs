//! Clock configuration
//!
//! Generated from clock.toml by build.rs, which has already validated
//! the face placement and start time.

use dialface_core::{ClockTime, Color, FaceConfig};

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));
