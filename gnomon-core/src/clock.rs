//! Wall-clock time source abstraction
//!
//! The renderer samples the clock exactly once per frame so all three
//! hands are drawn against the same instant.

/// A wall-clock time sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
    /// Day of month, 1-31
    pub day: u8,
}

impl WallTime {
    pub const fn new(hour: u8, minute: u8, second: u8, day: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            day,
        }
    }
}

/// Trait for wall-clock sources
///
/// Implemented over the board RTC in the firmware; tests use fixed
/// values directly.
pub trait Clock {
    /// Error type for clock reads
    type Error;

    /// Current local wall-clock time
    fn now(&self) -> Result<WallTime, Self::Error>;
}
