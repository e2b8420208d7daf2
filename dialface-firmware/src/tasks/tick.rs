//! Tick task for time-based updates
//!
//! Counts elapsed seconds and hands the running count to the display
//! task. A `Signal` keeps only the latest value, so the display task
//! works out how many seconds it missed from the difference.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Seconds elapsed since boot (wrapping)
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - signals once per second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut elapsed_s: u32 = 0;

    loop {
        ticker.next().await;
        elapsed_s = elapsed_s.wrapping_add(1);
        TICK_SIGNAL.signal(elapsed_s);
    }
}
