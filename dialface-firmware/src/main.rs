//! Dialface - analog clock firmware
//!
//! Drives a 128x128 SH1107 OLED from an RP2040: a one-second ticker
//! advances the clock face, which repaints into a frame buffer that is
//! then pushed to the panel over I2C.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use dialface_core::ClockFace;
use dialface_display::Sh1107;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// OLED bus speed (fast mode)
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dialface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // OLED on I2C0 (GPIO5 = SCL, GPIO4 = SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut face = match ClockFace::from_config(&config::FACE) {
        Ok(face) => face,
        Err(e) => {
            warn!("Invalid face config ({}), using defaults", Debug2Format(&e));
            ClockFace::default()
        }
    };

    let start = config::START_TIME;
    face.set_time(start.hours(), start.minutes(), start.seconds(), start.milliseconds());
    info!(
        "Face at ({}, {}) r={}, start {}:{}:{}",
        face.center().x,
        face.center().y,
        face.radius(),
        start.hours(),
        start.minutes(),
        start.seconds()
    );

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::display_task(Sh1107::new(i2c), face))
        .unwrap();

    info!("All tasks spawned");
}
