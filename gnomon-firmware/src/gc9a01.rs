//! GC9A01 LCD Display Driver
//!
//! Driver for the round 240x240 GC9A01 LCD via SPI. Keeps a full
//! RGB565 frame buffer in RAM; drawing goes into the buffer through
//! `embedded-graphics` and `flush` pushes the whole frame out over
//! the bus. CS is assumed tied low (the LCD is alone on the bus).

use embassy_rp::gpio::Output;
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Display dimensions
pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 240;

/// Frame buffer size: 2 bytes per RGB565 pixel
pub const FRAME_BYTES: usize = WIDTH * HEIGHT * 2;

/// SPI transfer chunk size for frame pushes
const CHUNK_BYTES: usize = 4096;

/// GC9A01 commands
#[allow(dead_code)]
mod cmd {
    pub const SLEEP_OUT: u8 = 0x11;
    pub const INVERSION_ON: u8 = 0x21;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR_SET: u8 = 0x2A;
    pub const PAGE_ADDR_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS_CTRL: u8 = 0x36;
    pub const PIXEL_FORMAT: u8 = 0x3A;
    pub const INTER_REG_ENABLE_1: u8 = 0xFE;
    pub const INTER_REG_ENABLE_2: u8 = 0xEF;
    pub const POWER_CTRL_2: u8 = 0xC3;
    pub const POWER_CTRL_3: u8 = 0xC4;
    pub const POWER_CTRL_4: u8 = 0xC9;
    pub const FRAME_RATE: u8 = 0xE8;
}

/// GC9A01 LCD driver
pub struct Gc9a01<SPI> {
    spi: SPI,
    /// Data/command select (low = command, high = data)
    dc: Output<'static>,
    reset: Output<'static>,
    /// Frame buffer (RGB565 big-endian, row-major)
    buffer: &'static mut [u8; FRAME_BYTES],
}

impl<SPI> Gc9a01<SPI>
where
    SPI: embedded_hal_async::spi::SpiBus,
{
    /// Create a new GC9A01 driver over a statically allocated frame
    /// buffer
    pub fn new(
        spi: SPI,
        dc: Output<'static>,
        reset: Output<'static>,
        buffer: &'static mut [u8; FRAME_BYTES],
    ) -> Self {
        Self {
            spi,
            dc,
            reset,
            buffer,
        }
    }

    /// Hardware reset and panel initialization
    pub async fn init(&mut self) -> Result<(), SPI::Error> {
        self.reset.set_low();
        Timer::after_millis(10).await;
        self.reset.set_high();
        Timer::after_millis(120).await;

        // Condensed vendor init: register access unlock, BGR +
        // row/column order, 16bpp, voltage and frame rate trim
        let init_cmds: &[(u8, &[u8])] = &[
            (cmd::INTER_REG_ENABLE_1, &[]),
            (cmd::INTER_REG_ENABLE_2, &[]),
            (cmd::MEMORY_ACCESS_CTRL, &[0x48]),
            (cmd::PIXEL_FORMAT, &[0x05]),
            (cmd::POWER_CTRL_2, &[0x13]),
            (cmd::POWER_CTRL_3, &[0x13]),
            (cmd::POWER_CTRL_4, &[0x22]),
            (cmd::FRAME_RATE, &[0x34]),
            (cmd::INVERSION_ON, &[]),
        ];

        for &(c, args) in init_cmds {
            self.command(c, args).await?;
        }

        self.command(cmd::SLEEP_OUT, &[]).await?;
        Timer::after_millis(120).await;
        self.command(cmd::DISPLAY_ON, &[]).await?;

        Ok(())
    }

    /// Send a command with optional argument bytes
    async fn command(&mut self, cmd: u8, args: &[u8]) -> Result<(), SPI::Error> {
        self.dc.set_low();
        self.spi.write(&[cmd]).await?;
        if !args.is_empty() {
            self.dc.set_high();
            self.spi.write(args).await?;
        }
        Ok(())
    }

    /// Select the full-screen address window
    async fn set_full_window(&mut self) -> Result<(), SPI::Error> {
        let x_end = (WIDTH - 1) as u16;
        let y_end = (HEIGHT - 1) as u16;
        self.command(
            cmd::COLUMN_ADDR_SET,
            &[0, 0, (x_end >> 8) as u8, x_end as u8],
        )
        .await?;
        self.command(cmd::PAGE_ADDR_SET, &[0, 0, (y_end >> 8) as u8, y_end as u8])
            .await
    }

    /// Push the frame buffer to the panel
    pub async fn flush(&mut self) -> Result<(), SPI::Error> {
        self.set_full_window().await?;

        self.dc.set_low();
        self.spi.write(&[cmd::MEMORY_WRITE]).await?;

        self.dc.set_high();
        for chunk in self.buffer.chunks(CHUNK_BYTES) {
            self.spi.write(chunk).await?;
        }

        Ok(())
    }
}

impl<SPI> OriginDimensions for Gc9a01<SPI> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI> DrawTarget for Gc9a01<SPI> {
    type Color = Rgb565;
    // Drawing only touches the frame buffer; bus errors surface in flush
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                let index = (point.y as usize * WIDTH + point.x as usize) * 2;
                let raw = color.into_storage();
                self.buffer[index] = (raw >> 8) as u8;
                self.buffer[index + 1] = raw as u8;
            }
        }
        Ok(())
    }
}
