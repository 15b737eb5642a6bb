//! Point placement policies
//!
//! Markers hug the display border, which is an ellipse (circle) on
//! round displays and a rounded rectangle on rectangular ones. The
//! policy is picked once at startup from the display shape and stays
//! fixed for the life of the renderer.

use embedded_graphics::prelude::*;

use crate::geometry::{round, Angle, ViewportGeometry};

/// Physical shape of the target display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    Round,
    Rectangular,
}

/// Display capabilities queried once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCaps {
    pub shape: DisplayShape,
    /// Whether the display can show the accent color
    pub color: bool,
}

/// How border-relative points are projected onto the face edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlacementPolicy {
    /// Scale each axis independently; points sit on an inscribed
    /// ellipse. Used on round displays.
    Elliptical,
    /// Scale the radial distance to intersect the bounding rectangle
    /// edge, so markers touch the rounded-rect border instead of an
    /// inscribed ellipse. Used on rectangular displays.
    Rectangular,
}

impl PlacementPolicy {
    /// Pick the policy for a display shape
    pub fn for_shape(shape: DisplayShape) -> Self {
        match shape {
            DisplayShape::Round => Self::Elliptical,
            DisplayShape::Rectangular => Self::Rectangular,
        }
    }

    /// Point at `angle`, pulled inward from the face border by `inset`
    ///
    /// With `inset == 0` the point lies exactly on the border.
    pub fn edge_point(&self, geom: &ViewportGeometry, angle: Angle, inset: i32) -> Point {
        match self {
            Self::Elliptical => Point::new(
                geom.center.x + round(angle.sin() * (geom.h_radius - inset) as f32),
                geom.center.y - round(angle.cos() * (geom.v_radius - inset) as f32),
            ),
            Self::Rectangular => {
                let distance = Self::edge_distance(geom, angle) - inset as f32;
                Point::new(
                    geom.center.x + round(angle.sin() * distance),
                    geom.center.y - round(angle.cos() * distance),
                )
            }
        }
    }

    /// Radial distance from center to the bounding rectangle edge
    ///
    /// The binding constraint is the axis with the smaller scale
    /// factor: `h_radius / |sin|` unless `v_radius / |cos|` is
    /// smaller.
    fn edge_distance(geom: &ViewportGeometry, angle: Angle) -> f32 {
        let abs_sin = libm::fabsf(angle.sin());
        let abs_cos = libm::fabsf(angle.cos());

        let h_scale = if abs_sin > f32::EPSILON {
            geom.h_radius as f32 / abs_sin
        } else {
            f32::INFINITY
        };
        let v_scale = if abs_cos > f32::EPSILON {
            geom.v_radius as f32 / abs_cos
        } else {
            f32::INFINITY
        };

        h_scale.min(v_scale)
    }
}
