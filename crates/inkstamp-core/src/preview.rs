//! Font showcase: one line of sample text per decorative font family.

use crate::color::StampColor;
use crate::scene::Scene;
use crate::text::{Font, FontFamily, TextAlign, TextBaseline, normalize_text};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Size of every showcase line.
pub const PREVIEW_FONT_SIZE_PX: f64 = 24.0;
/// Left edge of the lines and gap above the first one.
pub const PREVIEW_MARGIN: f64 = 10.0;
pub const PREVIEW_LINE_HEIGHT: f64 = 40.0;

/// Sample text and color of the font showcase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPreview {
    pub text: String,
    pub color: StampColor,
}

impl FontPreview {
    /// Text written in `family`: the sample text, or the family's name while it is blank.
    pub fn line_text(&self, family: FontFamily) -> &str {
        match normalize_text(&self.text) {
            "" => family.name(),
            text => text,
        }
    }
}

/// Lay out the showcase for a surface of `size`, one line per
/// [`FontFamily::showcase`] family from the top down.
pub fn render_font_preview(preview: &FontPreview, size: Size) -> Scene {
    let mut scene = Scene::cleared(size);
    for (index, family) in FontFamily::showcase().iter().enumerate() {
        let baseline = PREVIEW_MARGIN + (index + 1) as f64 * PREVIEW_LINE_HEIGHT;
        scene.fill_text(
            preview.line_text(*family),
            Point::new(PREVIEW_MARGIN, baseline),
            Font::new(PREVIEW_FONT_SIZE_PX, *family),
            preview.color,
            TextAlign::Left,
            TextBaseline::Alphabetic,
        );
    }
    log::debug!("font preview laid out: {} lines", scene.len() - 1);
    scene
}
