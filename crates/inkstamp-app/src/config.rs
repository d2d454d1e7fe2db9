//! Application configuration.

use crate::error::{AppError, AppResult};
use inkstamp_core::{ActiveView, ReplayColorMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pixel dimensions of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Freehand drawing surface.
    pub drawing_size: SurfaceSize,
    /// Rectangular stamp surface.
    pub stamp_size: SurfaceSize,
    /// Circular stamp surface.
    pub circle_stamp_size: SurfaceSize,
    /// Font preview surface.
    pub preview_size: SurfaceSize,
    /// Pen color at startup and after clearing, as a CSS color.
    pub pen_color: String,
    /// How replay colors existing pen segments.
    pub replay_color_mode: ReplayColorMode,
    /// Tab shown at startup.
    pub initial_view: ActiveView,
    /// Glyph advance as a fraction of the font size.
    pub glyph_advance_ratio: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drawing_size: SurfaceSize::new(800, 500),
            stamp_size: SurfaceSize::new(300, 300),
            circle_stamp_size: SurfaceSize::new(300, 300),
            preview_size: SurfaceSize::new(400, 320),
            pen_color: "black".to_string(),
            replay_color_mode: ReplayColorMode::CurrentColor,
            initial_view: ActiveView::Canvas,
            glyph_advance_ratio: 0.6,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from: {:?}", path);
        Ok(config)
    }
}
