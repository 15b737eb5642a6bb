//! Board-agnostic watchface rendering for the Gnomon firmware
//!
//! This crate contains all rendering logic that does not depend on
//! specific hardware:
//!
//! - Viewport geometry (center point, radii derived from bounds)
//! - Angle-to-point mapping with elliptical and rectangular placement
//! - Marker/numeral layout and hand angle math
//! - The per-frame draw routine over any `embedded-graphics` target
//! - Watchface configuration types and TOML parsing
//!
//! Everything here is pure: geometry is recomputed from the drawable
//! bounds on every frame and no state survives a draw call.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod face;
pub mod geometry;
pub mod hands;
pub mod placement;
pub mod render;
