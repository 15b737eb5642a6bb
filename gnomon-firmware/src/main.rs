//! Gnomon - Analog Watchface Firmware
//!
//! Main firmware binary for RP2040 boards with a round GC9A01 LCD.
//! All rendering logic lives in gnomon-core; this binary supplies
//! what the renderer treats as host capabilities: the tick source,
//! the drawable surface, the wall clock and the display capability
//! flags.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_rp::spi::{self, Spi};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gnomon_core::config::{parse_config, WatchfaceConfig};
use gnomon_core::placement::{DisplayCaps, DisplayShape};
use gnomon_core::render::{FaceRenderer, Palette};

use crate::clock::RtcClock;
use crate::gc9a01::Gc9a01;

mod channels;
mod clock;
mod gc9a01;
mod tasks;

/// Embedded watchface configuration (compiled into firmware)
/// Edit gnomon.toml and rebuild to switch skins
const EMBEDDED_CONFIG: &str = include_str!("../gnomon.toml");

/// SPI clock for the LCD
const SPI_FREQ_HZ: u32 = 62_500_000;

// Frame buffer must live forever for the render task
static FRAMEBUFFER: StaticCell<[u8; gc9a01::FRAME_BYTES]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Gnomon firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Parse the embedded configuration; fall back to defaults on a
    // bad file rather than refusing to show the time
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("invalid gnomon.toml ({}), using defaults", e);
            WatchfaceConfig::default()
        }
    };
    info!("Watchface style: {}", config.style);

    // SPI1 -> LCD: clk on PIN_10, mosi on PIN_11, tx-only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQ_HZ;
    let spi = Spi::new_txonly(p.SPI1, p.PIN_10, p.PIN_11, p.DMA_CH0, spi_config);
    let dc = Output::new(p.PIN_8, Level::Low);
    let reset = Output::new(p.PIN_12, Level::High);

    let framebuffer = FRAMEBUFFER.init([0; gc9a01::FRAME_BYTES]);
    let mut display = Gc9a01::new(spi, dc, reset, framebuffer);
    if display.init().await.is_err() {
        // No display, no watchface; nothing useful left to do
        defmt::panic!("display init failed");
    }
    info!("Display initialized");

    // Seed the RTC; a real deployment syncs this from a companion app
    let mut rtc = Rtc::new(p.RTC);
    let seed = DateTime {
        year: 2025,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Wednesday,
        hour: 10,
        minute: 9,
        second: 30,
    };
    if rtc.set_datetime(seed).is_err() {
        warn!("RTC seed rejected, clock starts unset");
    }

    // The GC9A01 panel is round and full color
    let caps = DisplayCaps {
        shape: DisplayShape::Round,
        color: true,
    };
    let palette = Palette {
        background: Rgb565::BLACK,
        foreground: Rgb565::WHITE,
        accent: Rgb565::RED,
    };
    let renderer = FaceRenderer::new(config.face_config(), caps, palette);

    spawner.must_spawn(tasks::tick_task());
    spawner.must_spawn(tasks::render_task(display, RtcClock::new(rtc), renderer));

    // First frame right away instead of waiting out the first tick
    channels::REDRAW.signal(());
    info!("Gnomon running");
}
