//! The per-frame draw routine
//!
//! `FaceRenderer` owns the skin configuration, the display
//! capabilities and the palette, all fixed at startup. Each call to
//! [`FaceRenderer::draw`] recomputes geometry from the current bounds
//! and repaints the whole face: outline, markers, numerals, date
//! widget, hands, center dot. Hands are drawn back-to-front so the
//! thin second hand is never occluded.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::clock::WallTime;
use crate::face::{FaceConfig, Marker};
use crate::geometry::{Angle, ViewportGeometry};
use crate::hands::{Hand, DRAW_ORDER};
use crate::placement::{DisplayCaps, DisplayShape, PlacementPolicy};

/// Corner radius of the rounded-rect outline on rectangular displays
pub const FACE_CORNER_RADIUS: u32 = 7;
/// Stroke width of the face outline
pub const FACE_STROKE_WIDTH: u32 = 2;
/// Radius of the filled dot covering the hand pivot
pub const CENTER_DOT_RADIUS: u32 = 5;

/// Angle of the date widget anchor (3 o'clock)
const DATE_ANGLE: Angle = Angle::from_degrees(90.0);

/// Colors for one watchface theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub background: C,
    pub foreground: C,
    /// Second hand and date widget on color-capable displays
    pub accent: C,
}

/// Draws a complete watchface frame into any `DrawTarget`
pub struct FaceRenderer<C: PixelColor> {
    face: FaceConfig,
    caps: DisplayCaps,
    placement: PlacementPolicy,
    palette: Palette<C>,
}

impl<C: PixelColor> FaceRenderer<C> {
    /// Build a renderer for a skin, display and theme
    ///
    /// The placement policy is derived from the display shape here,
    /// once, and never changes afterwards.
    pub fn new(face: FaceConfig, caps: DisplayCaps, palette: Palette<C>) -> Self {
        Self {
            face,
            caps,
            placement: PlacementPolicy::for_shape(caps.shape),
            palette,
        }
    }

    /// The configured skin
    pub fn face(&self) -> &FaceConfig {
        &self.face
    }

    /// Paint one frame
    ///
    /// Deterministic: identical `bounds` and `time` produce identical
    /// pixels. The single `time` sample keeps all three hands
    /// mutually consistent within the frame.
    pub fn draw<D>(&self, target: &mut D, bounds: &Rectangle, time: &WallTime) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let geom = ViewportGeometry::from_bounds(bounds);

        target.clear(self.palette.background)?;
        self.draw_outline(target, &geom)?;

        for marker in self.face.markers() {
            self.draw_marker(target, &geom, &marker)?;
            if let Some(numeral) = marker.numeral {
                self.draw_numeral(target, &geom, marker.angle, numeral)?;
            }
        }

        if self.face.show_date {
            self.draw_date(target, &geom, time.day)?;
        }

        for hand in DRAW_ORDER {
            self.draw_hand(target, &geom, hand, time)?;
        }

        self.draw_center_dot(target, &geom)
    }

    /// Face border: a circle on round displays, a rounded rectangle
    /// otherwise
    fn draw_outline<D>(&self, target: &mut D, geom: &ViewportGeometry) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let style = PrimitiveStyle::with_stroke(self.palette.foreground, FACE_STROKE_WIDTH);

        match self.caps.shape {
            DisplayShape::Round => {
                Circle::with_center(geom.center, 2 * geom.radius as u32)
                    .into_styled(style)
                    .draw(target)?;
            }
            DisplayShape::Rectangular => {
                let outline = Rectangle::new(
                    Point::new(geom.center.x - geom.h_radius, geom.center.y - geom.v_radius),
                    Size::new(2 * geom.h_radius as u32, 2 * geom.v_radius as u32),
                );
                RoundedRectangle::with_equal_corners(
                    outline,
                    Size::new(FACE_CORNER_RADIUS, FACE_CORNER_RADIUS),
                )
                .into_styled(style)
                .draw(target)?;
            }
        }

        Ok(())
    }

    fn draw_marker<D>(
        &self,
        target: &mut D,
        geom: &ViewportGeometry,
        marker: &Marker,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let outer = self.placement.edge_point(geom, marker.angle, 0);
        let inner = self.placement.edge_point(geom, marker.angle, marker.length);

        Line::new(outer, inner)
            .into_styled(PrimitiveStyle::with_stroke(
                self.palette.foreground,
                marker.width,
            ))
            .draw(target)?;

        Ok(())
    }

    /// Hour numeral, centered on its anchor point
    fn draw_numeral<D>(
        &self,
        target: &mut D,
        geom: &ViewportGeometry,
        angle: Angle,
        numeral: u8,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let distance = geom.radius - self.face.major_length - self.face.numeral_inset;
        let anchor = geom.radial_point(angle, distance);

        let text = format_two_digits(numeral);
        Text::with_text_style(
            &text,
            anchor,
            MonoTextStyle::new(&FONT_9X15_BOLD, self.palette.foreground),
            centered(),
        )
        .draw(target)?;

        Ok(())
    }

    /// Day-of-month widget at 3 o'clock, pulled further inward than
    /// the numeral ring so the two never overlap
    fn draw_date<D>(&self, target: &mut D, geom: &ViewportGeometry, day: u8) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let distance = geom.radius
            - self.face.major_length
            - self.face.numeral_inset
            - self.face.date_inset;
        let anchor = geom.radial_point(DATE_ANGLE, distance);

        let text = format_two_digits(day);
        Text::with_text_style(
            &text,
            anchor,
            MonoTextStyle::new(&FONT_6X10, self.accent_or_foreground()),
            centered(),
        )
        .draw(target)?;

        Ok(())
    }

    fn draw_hand<D>(
        &self,
        target: &mut D,
        geom: &ViewportGeometry,
        hand: Hand,
        time: &WallTime,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let end = geom.radial_point(hand.angle(time), hand.length(geom.radius));
        let color = if hand.accented() {
            self.accent_or_foreground()
        } else {
            self.palette.foreground
        };

        Line::new(geom.center, end)
            .into_styled(PrimitiveStyle::with_stroke(color, hand.width()))
            .draw(target)?;

        Ok(())
    }

    fn draw_center_dot<D>(&self, target: &mut D, geom: &ViewportGeometry) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        Circle::with_center(geom.center, 2 * CENTER_DOT_RADIUS)
            .into_styled(PrimitiveStyle::with_fill(self.palette.foreground))
            .draw(target)?;

        Ok(())
    }

    /// Accent color, falling back to foreground on monochrome
    /// displays
    fn accent_or_foreground(&self) -> C {
        if self.caps.color {
            self.palette.accent
        } else {
            self.palette.foreground
        }
    }
}

/// Format a value in 1-31 without zero padding
///
/// Two characters hold every valid numeral and day-of-month.
fn format_two_digits(value: u8) -> String<2> {
    let mut text = String::new();
    // Cannot overflow: callers pass values <= 31
    let _ = write!(text, "{}", value);
    text
}

/// Text centered on its anchor both horizontally and vertically
fn centered() -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};

    fn color_caps() -> DisplayCaps {
        DisplayCaps {
            shape: DisplayShape::Round,
            color: true,
        }
    }

    fn rgb_palette() -> Palette<Rgb565> {
        Palette {
            background: Rgb565::BLACK,
            foreground: Rgb565::WHITE,
            accent: Rgb565::RED,
        }
    }

    fn draw_frame(
        renderer: &FaceRenderer<Rgb565>,
        time: &WallTime,
    ) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let bounds = Rectangle::new(Point::zero(), Size::new(64, 64));
        renderer
            .draw(&mut display, &bounds, time)
            .expect("mock draw cannot fail");
        display
    }

    #[test]
    fn test_frame_is_deterministic() {
        let renderer = FaceRenderer::new(FaceConfig::precision(), color_caps(), rgb_palette());
        let time = WallTime::new(10, 9, 30, 17);

        let first = draw_frame(&renderer, &time);
        let second = draw_frame(&renderer, &time);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_times_differ() {
        let renderer = FaceRenderer::new(FaceConfig::classic(), color_caps(), rgb_palette());

        let first = draw_frame(&renderer, &WallTime::new(10, 9, 30, 17));
        let second = draw_frame(&renderer, &WallTime::new(4, 40, 5, 17));
        assert_ne!(first, second);
    }

    #[test]
    fn test_monochrome_face_draws() {
        let renderer = FaceRenderer::new(
            FaceConfig::classic(),
            DisplayCaps {
                shape: DisplayShape::Rectangular,
                color: false,
            },
            Palette {
                background: BinaryColor::Off,
                foreground: BinaryColor::On,
                accent: BinaryColor::On,
            },
        );

        let mut display = MockDisplay::<BinaryColor>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let bounds = Rectangle::new(Point::zero(), Size::new(64, 64));
        renderer
            .draw(&mut display, &bounds, &WallTime::new(0, 0, 0, 1))
            .expect("mock draw cannot fail");
    }

    #[test]
    fn test_hand_endpoints_at_reference_time() {
        // 10:09:30 -> hour 304.5, minute 54, second 180 degrees
        let time = WallTime::new(10, 9, 30, 17);
        let bounds = Rectangle::new(Point::zero(), Size::new(200, 200));
        let geom = ViewportGeometry::from_bounds(&bounds);

        let hour_end = geom.radial_point(Hand::Hour.angle(&time), Hand::Hour.length(geom.radius));
        assert!(hour_end.x < geom.center.x, "hour hand points left");
        assert!(hour_end.y < geom.center.y, "hour hand points up");

        let minute_end =
            geom.radial_point(Hand::Minute.angle(&time), Hand::Minute.length(geom.radius));
        assert!(minute_end.x > geom.center.x, "minute hand points right");
        assert!(minute_end.y < geom.center.y, "minute hand points up");

        let second_end =
            geom.radial_point(Hand::Second.angle(&time), Hand::Second.length(geom.radius));
        assert_eq!(second_end.x, geom.center.x, "second hand points straight down");
        assert!(second_end.y > geom.center.y);
    }

    #[test]
    fn test_day_text_fits_buffer() {
        assert_eq!(format_two_digits(1).as_str(), "1");
        assert_eq!(format_two_digits(31).as_str(), "31");
        assert_eq!(format_two_digits(12).as_str(), "12");
    }
}
