//! Render task
//!
//! Waits for a redraw request, samples the RTC exactly once, paints
//! the frame into the display's buffer and flushes it over SPI. One
//! time sample per frame keeps the three hands mutually consistent.

use defmt::*;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Async, Spi};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use gnomon_core::clock::Clock;
use gnomon_core::render::FaceRenderer;

use crate::channels::REDRAW;
use crate::clock::RtcClock;
use crate::gc9a01::Gc9a01;

/// Render task - repaints the watchface on every redraw request
#[embassy_executor::task]
pub async fn render_task(
    mut display: Gc9a01<Spi<'static, SPI1, Async>>,
    clock: RtcClock,
    renderer: FaceRenderer<Rgb565>,
) {
    info!("Render task started");

    let bounds = display.bounding_box();

    loop {
        REDRAW.wait().await;

        let time = match clock.now() {
            Ok(time) => time,
            Err(_) => {
                warn!("RTC read failed, skipping frame");
                continue;
            }
        };

        // Drawing into the frame buffer cannot fail
        let _ = renderer.draw(&mut display, &bounds, &time);

        if display.flush().await.is_err() {
            warn!("display flush failed, retrying next tick");
        }
    }
}
