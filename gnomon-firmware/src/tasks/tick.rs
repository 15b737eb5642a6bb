//! Tick task
//!
//! Fires once per second and requests a redraw, so the second hand
//! advances exactly one step per frame. The equivalent of a layer
//! being marked dirty on every timer tick.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::REDRAW;

/// Tick interval in milliseconds (one frame per second)
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - requests a redraw every second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        REDRAW.signal(());
    }
}
