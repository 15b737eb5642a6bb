//! Viewport geometry
//!
//! Derives the frame's center point and radii from the drawable
//! bounds. A fresh `ViewportGeometry` is computed at the top of every
//! frame and passed explicitly into marker, numeral, date and hand
//! placement; nothing here is retained between frames.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Fraction of each half-dimension reserved as a border inset
pub const BORDER_INSET_PERCENT: f32 = 0.01;

/// An angle on the clock face, in degrees clockwise from 12 o'clock
///
/// 0 degrees points straight up, 90 degrees points at 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(f32);

impl Angle {
    /// Create an angle from degrees
    pub const fn from_degrees(degrees: f32) -> Self {
        Self(degrees)
    }

    /// The raw degree value
    pub const fn degrees(self) -> f32 {
        self.0
    }

    /// Sine of the angle (positive toward 3 o'clock)
    pub fn sin(self) -> f32 {
        libm::sinf(self.0.to_radians())
    }

    /// Cosine of the angle (positive toward 12 o'clock)
    pub fn cos(self) -> f32 {
        libm::cosf(self.0.to_radians())
    }
}

/// Round to the nearest pixel coordinate
pub(crate) fn round(v: f32) -> i32 {
    libm::roundf(v) as i32
}

/// Per-frame drawing geometry derived from the layer bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    /// Midpoint of the drawable bounds
    pub center: Point,
    /// Half the bounds width, minus the border inset
    pub h_radius: i32,
    /// Half the bounds height, minus the border inset
    pub v_radius: i32,
    /// min(h_radius, v_radius); used for circular placements
    pub radius: i32,
}

impl ViewportGeometry {
    /// Derive geometry from the drawable bounds
    pub fn from_bounds(bounds: &Rectangle) -> Self {
        let center = Point::new(
            bounds.top_left.x + bounds.size.width as i32 / 2,
            bounds.top_left.y + bounds.size.height as i32 / 2,
        );
        let h_radius = (bounds.size.width as f32 / 2.0 * (1.0 - BORDER_INSET_PERCENT)) as i32;
        let v_radius = (bounds.size.height as f32 / 2.0 * (1.0 - BORDER_INSET_PERCENT)) as i32;

        Self {
            center,
            h_radius,
            v_radius,
            radius: h_radius.min(v_radius),
        }
    }

    /// Point at `distance` from center along `angle`, on the circle
    ///
    /// Used for hands and numerals, which stay on the inner circle
    /// even when the face itself is elliptical or rectangular.
    pub fn radial_point(&self, angle: Angle, distance: i32) -> Point {
        Point::new(
            self.center.x + round(angle.sin() * distance as f32),
            self.center.y - round(angle.cos() * distance as f32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Size;

    fn square_bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(200, 200))
    }

    #[test]
    fn test_center_is_bounds_midpoint() {
        let geom = ViewportGeometry::from_bounds(&square_bounds());
        assert_eq!(geom.center, Point::new(100, 100));
    }

    #[test]
    fn test_radii_include_border_inset() {
        let geom = ViewportGeometry::from_bounds(&square_bounds());
        // 200 / 2 * 0.99 = 99
        assert_eq!(geom.h_radius, 99);
        assert_eq!(geom.v_radius, 99);
        assert_eq!(geom.radius, 99);
    }

    #[test]
    fn test_overall_radius_is_min_axis() {
        let bounds = Rectangle::new(Point::zero(), Size::new(144, 168));
        let geom = ViewportGeometry::from_bounds(&bounds);
        assert_eq!(geom.h_radius, 71);
        assert_eq!(geom.v_radius, 83);
        assert_eq!(geom.radius, 71);
    }

    #[test]
    fn test_radial_point_cardinal_directions() {
        let geom = ViewportGeometry::from_bounds(&square_bounds());
        let c = geom.center;

        assert_eq!(geom.radial_point(Angle::from_degrees(0.0), 50), Point::new(c.x, c.y - 50));
        assert_eq!(geom.radial_point(Angle::from_degrees(90.0), 50), Point::new(c.x + 50, c.y));
        assert_eq!(geom.radial_point(Angle::from_degrees(180.0), 50), Point::new(c.x, c.y + 50));
        assert_eq!(geom.radial_point(Angle::from_degrees(270.0), 50), Point::new(c.x - 50, c.y));
    }

    #[test]
    fn test_radial_point_quadrants() {
        let geom = ViewportGeometry::from_bounds(&square_bounds());
        let c = geom.center;

        // 45 degrees: up and to the right
        let p = geom.radial_point(Angle::from_degrees(45.0), 50);
        assert!(p.x > c.x && p.y < c.y);

        // 225 degrees: down and to the left
        let p = geom.radial_point(Angle::from_degrees(225.0), 50);
        assert!(p.x < c.x && p.y > c.y);
    }
}
