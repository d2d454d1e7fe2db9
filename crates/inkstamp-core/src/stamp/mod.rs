//! Stamp compositors.
//!
//! Each compositor is a pure projection from a field set to a [`Scene`]:
//! every redraw clears the surface and lays everything out again.
//!
//! [`Scene`]: crate::scene::Scene

mod circle;
mod rect;

pub use circle::{CircleStampFields, render_circle_stamp};
pub use rect::{RectStampFields, render_rect_stamp};

use crate::color::StampColor;
use crate::scene::Scene;
use crate::text::{Font, TextAlign, TextBaseline, TextMetrics};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Baseline offset of the top line from the vertical center.
pub const TOP_LINE_OFFSET: f64 = -60.0;
/// Baseline offset of the center line from the vertical center.
pub const CENTER_LINE_OFFSET: f64 = 6.0;
/// Baseline offset of the bottom line from the vertical center.
pub const BOTTOM_LINE_OFFSET: f64 = 80.0;

/// Which text field of a stamp a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Top,
    Center,
    Bottom,
    Name,
}

/// Draw `text` horizontally centered on `center_x` by its measured width,
/// with its baseline at `baseline_y`.
pub(crate) fn fill_centered_line(
    scene: &mut Scene,
    metrics: &dyn TextMetrics,
    text: &str,
    center_x: f64,
    baseline_y: f64,
    font: Font,
    color: StampColor,
) {
    let width = metrics.measure(text, &font);
    scene.fill_text(
        text,
        Point::new(center_x - width / 2.0, baseline_y),
        font,
        color,
        TextAlign::Left,
        TextBaseline::Alphabetic,
    );
}
