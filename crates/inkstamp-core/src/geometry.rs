//! Geometry primitives for stamp layout.
//!
//! Everything here is a pure function of its inputs.

use kurbo::{Point, Vec2};
use std::f64::consts::PI;

/// Vertices of a star polygon, starting at the top and walking clockwise.
///
/// Produces `2 * point_count` vertices. Even indices sit on the inner radius
/// (`outer_size * inset_ratio`), odd indices on `outer_size`. The polygon is
/// implicitly closed: the last edge runs back to the first vertex.
pub fn star_polygon(center: Point, outer_size: f64, point_count: usize, inset_ratio: f64) -> Vec<Point> {
    let step = PI / point_count as f64;
    (0..2 * point_count)
        .map(|i| {
            let angle = i as f64 * step - PI / 2.0;
            let radius = if i % 2 == 0 {
                outer_size * inset_ratio
            } else {
                outer_size
            };
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Positions of `char_count` glyphs stepped along a circle.
///
/// Glyph `i` sits at angle `start_angle + i * char_angle_step`. There is no
/// width compensation, so long strings wrap around and overlap.
pub fn arc_text_positions(
    center: Point,
    radius: f64,
    start_angle: f64,
    char_angle_step: f64,
    char_count: usize,
) -> Vec<Point> {
    (0..char_count)
        .map(|i| {
            let angle = start_angle + i as f64 * char_angle_step;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}
