//! Hand angle math and styling
//!
//! Angles are derived from a single `WallTime` sample. The hour hand
//! creeps continuously: it advances half a degree per minute instead
//! of jumping 30 degrees on the hour boundary.

use crate::clock::WallTime;
use crate::geometry::Angle;

/// Degrees the hour hand moves per hour
pub const DEGREES_PER_HOUR: f32 = 30.0;
/// Degrees the minute and second hands move per unit
pub const DEGREES_PER_MINUTE: f32 = 6.0;
/// Degrees the hour hand creeps per minute
pub const DEGREES_PER_MINUTE_FOR_HOUR_HAND: f32 = 0.5;

/// The three hands, in back-to-front draw order
pub const DRAW_ORDER: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

/// One of the three clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Angle of this hand at the given time
    pub fn angle(self, time: &WallTime) -> Angle {
        let degrees = match self {
            Hand::Hour => {
                (time.hour % 12) as f32 * DEGREES_PER_HOUR
                    + time.minute as f32 * DEGREES_PER_MINUTE_FOR_HOUR_HAND
            }
            Hand::Minute => time.minute as f32 * DEGREES_PER_MINUTE,
            Hand::Second => time.second as f32 * DEGREES_PER_MINUTE,
        };
        Angle::from_degrees(degrees)
    }

    /// Hand length as a fraction of the overall radius
    pub const fn length_ratio(self) -> f32 {
        match self {
            Hand::Hour => 0.5,
            Hand::Minute => 0.75,
            Hand::Second => 0.85,
        }
    }

    /// Stroke width in pixels
    pub const fn width(self) -> u32 {
        match self {
            Hand::Hour => 5,
            Hand::Minute => 3,
            Hand::Second => 1,
        }
    }

    /// Whether this hand is drawn in the accent color on
    /// color-capable displays
    pub const fn accented(self) -> bool {
        matches!(self, Hand::Second)
    }

    /// Hand length in pixels for a face of the given radius
    pub fn length(self, radius: i32) -> i32 {
        (radius as f32 * self.length_ratio()) as i32
    }
}
