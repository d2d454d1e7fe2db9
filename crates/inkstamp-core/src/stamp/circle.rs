//! Circular stamp: ring borders, text curved along an inner circle, a star,
//! and two centered lines.

use super::{BOTTOM_LINE_OFFSET, CENTER_LINE_OFFSET, TextField, fill_centered_line};
use crate::color::StampColor;
use crate::geometry::{arc_text_positions, star_polygon};
use crate::scene::Scene;
use crate::text::{Font, TextAlign, TextBaseline, TextMetrics, normalize_text};
use kurbo::{Circle, Point, Size};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Gap between the outer ring and the surface edge.
pub const RING_MARGIN: f64 = 10.0;
/// Gap between the two rings of the outer border.
pub const RING_GAP: f64 = 3.0;
/// Stroke width of every circle.
pub const RING_WIDTH: f64 = 1.0;
/// Circles are always stroked in black; the stamp color only tints the star and text.
pub const RING_COLOR: StampColor = StampColor::black();
/// How far outside the inner circle the curved text runs.
pub const ARC_TEXT_OFFSET: f64 = 20.0;
/// Angle of the first curved character.
pub const ARC_START_ANGLE: f64 = PI / 4.0;
/// Angle between consecutive curved characters.
pub const ARC_CHAR_STEP: f64 = PI / 12.0;
/// Outer size of the star marker.
pub const STAR_SIZE: f64 = 15.0;
pub const STAR_POINTS: usize = 5;
pub const STAR_INSET: f64 = 0.5;
/// Distance of the star center above the bottom edge.
pub const STAR_BOTTOM_OFFSET: f64 = 35.0;

/// User-editable fields of the circular stamp.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStampFields {
    /// Curved along the inner circle; only drawn with `show_additional_circle`.
    pub text_top: String,
    pub text_center: String,
    pub text_bottom: String,
    /// Accepted for callers that set it, never rendered.
    pub stamp_name: String,
    /// Draw the outer double ring.
    pub circle_show_border: bool,
    /// Draw the inner circle with the curved top text.
    pub show_additional_circle: bool,
    pub stamp_color: StampColor,
}

impl CircleStampFields {
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Top => self.text_top = value,
            TextField::Center => self.text_center = value,
            TextField::Bottom => self.text_bottom = value,
            TextField::Name => self.stamp_name = value,
        }
    }
}

/// Radius of the outer ring for a surface of `size`. May be negative on
/// surfaces smaller than the margins.
pub fn outer_radius(size: Size) -> f64 {
    size.width.min(size.height) / 2.0 - RING_MARGIN
}

/// Lay out the circular stamp for a surface of `size`.
pub fn render_circle_stamp(fields: &CircleStampFields, size: Size, metrics: &dyn TextMetrics) -> Scene {
    let text_top = normalize_text(&fields.text_top);
    let text_center = normalize_text(&fields.text_center);
    let text_bottom = normalize_text(&fields.text_bottom);

    let mut scene = Scene::cleared(size);
    let font = Font::stamp();
    let color = fields.stamp_color;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let inner_radius = outer_radius(size);

    if fields.show_additional_circle {
        let additional_radius = inner_radius / 3.0 * 2.0;
        scene.stroke_circle(Circle::new(center, additional_radius), RING_COLOR, RING_WIDTH);

        let positions = arc_text_positions(
            center,
            additional_radius + ARC_TEXT_OFFSET,
            ARC_START_ANGLE,
            ARC_CHAR_STEP,
            text_top.chars().count(),
        );
        let mut buf = [0u8; 4];
        for (ch, position) in text_top.chars().zip(positions) {
            scene.fill_text(
                ch.encode_utf8(&mut buf),
                position,
                font,
                color,
                TextAlign::Center,
                TextBaseline::Middle,
            );
        }
    }

    let star_center = Point::new(center.x, size.height - STAR_BOTTOM_OFFSET);
    scene.fill_polygon(star_polygon(star_center, STAR_SIZE, STAR_POINTS, STAR_INSET), color);

    if fields.circle_show_border {
        scene.stroke_circle(Circle::new(center, inner_radius), RING_COLOR, RING_WIDTH);
        scene.stroke_circle(Circle::new(center, inner_radius - RING_GAP), RING_COLOR, RING_WIDTH);
    }

    fill_centered_line(&mut scene, metrics, text_center, center.x, center.y + CENTER_LINE_OFFSET, font, color);
    fill_centered_line(&mut scene, metrics, text_bottom, center.x, center.y + BOTTOM_LINE_OFFSET, font, color);

    log::debug!(
        "circle stamp laid out: {} commands on {}x{}",
        scene.len(),
        size.width,
        size.height
    );
    scene
}
