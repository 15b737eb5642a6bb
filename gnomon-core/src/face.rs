//! Face layout: markers and numerals
//!
//! The two shipped skins (a simple 12-marker face and a detailed
//! 60-marker face with a date widget) are presets of one `FaceConfig`;
//! they differ only in marker density, offsets, and the date widget.

use crate::geometry::Angle;

/// Layout parameters for a watchface skin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Evenly spaced markers around the face (12 or 60)
    pub marker_count: u8,
    /// Every n-th marker is major (longer, thicker, numbered)
    pub major_interval: u8,
    /// Major marker length in pixels
    pub major_length: i32,
    /// Minor marker length in pixels
    pub minor_length: i32,
    /// Major marker stroke width
    pub major_width: u32,
    /// Minor marker stroke width
    pub minor_width: u32,
    /// Gap between a major marker's inner end and its numeral anchor
    pub numeral_inset: i32,
    /// Whether to draw the day-of-month widget at 3 o'clock
    pub show_date: bool,
    /// Extra inward pull for the date widget, past the numeral ring
    pub date_inset: i32,
}

impl FaceConfig {
    /// The simple skin: 12 markers at 30 degree steps, numerals at
    /// 12, 3, 6 and 9, no date widget.
    pub const fn classic() -> Self {
        Self {
            marker_count: 12,
            major_interval: 3,
            major_length: 15,
            minor_length: 8,
            major_width: 3,
            minor_width: 1,
            numeral_inset: 10,
            show_date: false,
            date_inset: 0,
        }
    }

    /// The detailed skin: 60 markers at 6 degree steps, a numeral at
    /// every hour, day-of-month widget at 3 o'clock.
    pub const fn precision() -> Self {
        Self {
            marker_count: 60,
            major_interval: 5,
            major_length: 12,
            minor_length: 6,
            major_width: 3,
            minor_width: 1,
            numeral_inset: 12,
            show_date: true,
            date_inset: 18,
        }
    }

    /// Angular step between adjacent markers
    pub fn degrees_per_marker(&self) -> f32 {
        360.0 / self.marker_count as f32
    }

    /// Iterate over all markers of this face
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        (0..self.marker_count).map(move |index| self.marker(index))
    }

    /// Build the marker at a given index
    pub fn marker(&self, index: u8) -> Marker {
        let is_major = index % self.major_interval == 0;
        let angle = Angle::from_degrees(index as f32 * self.degrees_per_marker());

        Marker {
            index,
            angle,
            is_major,
            length: if is_major {
                self.major_length
            } else {
                self.minor_length
            },
            width: if is_major {
                self.major_width
            } else {
                self.minor_width
            },
            numeral: if is_major {
                self.numeral_at(index)
            } else {
                None
            },
        }
    }

    /// Clock-hour numeral for a marker index, if the index coincides
    /// with an hour position
    fn numeral_at(&self, index: u8) -> Option<u8> {
        let markers_per_hour = self.marker_count / 12;
        if markers_per_hour == 0 || index % markers_per_hour != 0 {
            return None;
        }
        Some(display_hour(index / markers_per_hour))
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Convert hour index (0-11) to display hour (1-12)
pub fn display_hour(hour_index: u8) -> u8 {
    if hour_index == 0 {
        12
    } else {
        hour_index
    }
}

/// A single tick mark, computed per frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Marker {
    pub index: u8,
    pub angle: Angle,
    pub is_major: bool,
    pub length: i32,
    pub width: u32,
    /// Display hour (1-12) for markers that carry a numeral
    pub numeral: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classic_marker_angles() {
        let face = FaceConfig::classic();
        for (i, marker) in face.markers().enumerate() {
            assert_eq!(marker.angle.degrees(), i as f32 * 30.0);
        }
    }

    #[test]
    fn test_precision_marker_angles() {
        let face = FaceConfig::precision();
        for (i, marker) in face.markers().enumerate() {
            assert_eq!(marker.angle.degrees(), i as f32 * 6.0);
        }
    }

    #[test]
    fn test_classic_major_markers() {
        let face = FaceConfig::classic();
        let majors: heapless::Vec<u8, 12> = face
            .markers()
            .filter(|m| m.is_major)
            .map(|m| m.index)
            .collect();
        assert_eq!(majors.as_slice(), &[0, 3, 6, 9]);
    }

    #[test]
    fn test_index_zero_is_twelve() {
        assert_eq!(FaceConfig::classic().marker(0).numeral, Some(12));
        assert_eq!(FaceConfig::precision().marker(0).numeral, Some(12));
    }

    #[test]
    fn test_classic_numerals() {
        let face = FaceConfig::classic();
        assert_eq!(face.marker(3).numeral, Some(3));
        assert_eq!(face.marker(6).numeral, Some(6));
        assert_eq!(face.marker(9).numeral, Some(9));
        assert_eq!(face.marker(1).numeral, None);
    }

    #[test]
    fn test_precision_numerals_at_every_hour() {
        let face = FaceConfig::precision();
        for hour_index in 0..12u8 {
            let marker = face.marker(hour_index * 5);
            assert!(marker.is_major);
            assert_eq!(marker.numeral, Some(display_hour(hour_index)));
        }
        // Majors between hours never carry numerals on a 60-marker
        // face (there are none: every 5th marker is an hour), but
        // minors never do either.
        assert_eq!(face.marker(1).numeral, None);
        assert_eq!(face.marker(7).numeral, None);
    }

    #[test]
    fn test_major_markers_are_longer_and_thicker() {
        let face = FaceConfig::precision();
        let major = face.marker(0);
        let minor = face.marker(1);
        assert!(major.length > minor.length);
        assert!(major.width > minor.width);
    }

    proptest! {
        #[test]
        fn prop_marker_angle_is_even_division(index in 0u8..60) {
            let face = FaceConfig::precision();
            let marker = face.marker(index);
            prop_assert_eq!(marker.angle.degrees(), index as f32 * (360.0 / 60.0));
        }

        #[test]
        fn prop_classic_numerals_in_clock_range(index in 0u8..12) {
            let marker = FaceConfig::classic().marker(index);
            if let Some(numeral) = marker.numeral {
                prop_assert!((1..=12).contains(&numeral));
            }
        }
    }
}
