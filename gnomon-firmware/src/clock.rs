//! RTC-backed wall clock
//!
//! Wraps the RP2040 RTC behind the core `Clock` trait. The RTC is
//! seeded once at boot; a real product would sync it from a phone.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::Rtc;

use gnomon_core::clock::{Clock, WallTime};

/// The RTC could not be read (not running or invalid state)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockError;

/// Wall clock over the RP2040 RTC
pub struct RtcClock {
    rtc: Rtc<'static, RTC>,
}

impl RtcClock {
    pub fn new(rtc: Rtc<'static, RTC>) -> Self {
        Self { rtc }
    }
}

impl Clock for RtcClock {
    type Error = ClockError;

    fn now(&self) -> Result<WallTime, Self::Error> {
        let dt = self.rtc.now().map_err(|_| ClockError)?;
        Ok(WallTime::new(dt.hour, dt.minute, dt.second, dt.day))
    }
}
