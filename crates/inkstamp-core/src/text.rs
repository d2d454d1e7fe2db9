//! Fonts and text measurement.

use serde::{Deserialize, Serialize};

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Plain sans-serif used for stamp text.
    #[default]
    Arial,
    Pacifico,
    KaushanScript,
    DancingScript,
    Cursive,
    ShadowsIntoLight,
    Sacramento,
    Satisfy,
}

impl FontFamily {
    /// Get the CSS family name.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Pacifico => "Pacifico",
            FontFamily::KaushanScript => "Kaushan Script",
            FontFamily::DancingScript => "Dancing Script",
            FontFamily::Cursive => "Cursive",
            FontFamily::ShadowsIntoLight => "Shadows Into Light",
            FontFamily::Sacramento => "Sacramento",
            FontFamily::Satisfy => "Satisfy",
        }
    }

    /// Decorative families shown in the font preview, in display order.
    pub fn showcase() -> &'static [FontFamily] {
        &[
            FontFamily::Pacifico,
            FontFamily::KaushanScript,
            FontFamily::DancingScript,
            FontFamily::Cursive,
            FontFamily::ShadowsIntoLight,
            FontFamily::Sacramento,
            FontFamily::Satisfy,
        ]
    }
}

/// A font selection: pixel size plus family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font size in pixels.
    pub size_px: f64,
    pub family: FontFamily,
}

impl Font {
    /// Size of all stamp text.
    pub const STAMP_SIZE_PX: f64 = 20.0;

    pub fn new(size_px: f64, family: FontFamily) -> Self {
        Self { size_px, family }
    }

    /// The `20px Arial` font stamps are lettered in.
    pub fn stamp() -> Self {
        Self::new(Self::STAMP_SIZE_PX, FontFamily::Arial)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::stamp()
    }
}

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Origin is the left edge of the run.
    #[default]
    Left,
    /// Origin is the horizontal middle of the run.
    Center,
}

/// Vertical anchoring of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextBaseline {
    /// Origin is on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// Origin is halfway up the em box.
    Middle,
}

/// Measures the advance width of rendered text.
///
/// Compositors center text with whatever metrics the target surface uses, so
/// layout and rasterization agree.
pub trait TextMetrics {
    /// Width in pixels of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &Font) -> f64;
}

/// Fixed-advance metrics: every character is `advance_ratio * size_px` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_ratio: f64,
}

impl MonospaceMetrics {
    pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;

    pub fn new(advance_ratio: f64) -> Self {
        Self { advance_ratio }
    }

    /// Advance of a single character in `font`.
    pub fn advance(&self, font: &Font) -> f64 {
        font.size_px * self.advance_ratio
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * self.advance(font)
    }
}

/// Return `value` unchanged unless it is blank, in which case return `""`.
///
/// Blank means empty after trimming whitespace; non-blank input keeps its
/// surrounding whitespace.
pub fn normalize_text(value: &str) -> &str {
    if value.trim().is_empty() { "" } else { value }
}
