//! Display task
//!
//! Owns the clock face and the panel. Each tick advances the face and,
//! if anything changed, repaints the frame buffer and flushes it.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use dialface_core::ClockFace;
use dialface_display::{DisplayError, Framebuffer, GraphicsSurface, Sh1107};

use super::tick::TICK_SIGNAL;

/// Panel type on this board
pub type Panel = Sh1107<I2c<'static, I2C0, Async>>;

/// Display update task
#[embassy_executor::task]
pub async fn display_task(mut display: Panel, mut face: ClockFace) {
    info!("Display task started");

    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {}", Debug2Format(&e));
    } else {
        info!("OLED initialized");
    }

    let mut surface = GraphicsSurface::new(Framebuffer::new());
    let mut last_tick: u32 = 0;

    loop {
        if face.needs_redraw() {
            // Frame buffer drawing cannot fail
            face.draw(&mut surface).ok();

            match display.flush(surface.target()).await {
                Ok(()) => trace!("Display updated"),
                Err(e) => {
                    warn!("Flush failed: {}", Debug2Format(&e));
                    face.invalidate();
                    if e == DisplayError::NotInitialized {
                        display.init().await.ok();
                    }
                }
            }
        }

        let tick = TICK_SIGNAL.wait().await;
        let missed = tick.wrapping_sub(last_tick);
        last_tick = tick;

        if missed > 1 {
            debug!("Catching up {} seconds", missed);
            face.add_time(0, 0, missed, 0);
        } else {
            face.increment();
        }
    }
}
