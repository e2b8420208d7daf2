//! Embassy tasks

mod display;
mod tick;

pub use display::display_task;
pub use tick::{tick_task, TICK_SIGNAL};
