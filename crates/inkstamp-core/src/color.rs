//! Color values used by pens and stamps.

use crate::error::{CoreError, CoreResult};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StampColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StampColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Parse a CSS color string: named colors (`"red"`), `#rgb`, `#rrggbb`,
    /// `rgb(...)` and the other forms CSS Color 4 accepts.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let dynamic = parse_color(trimmed).map_err(|e| CoreError::InvalidColor {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        Ok(dynamic.to_alpha_color::<Srgb>().into())
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for StampColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for StampColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for StampColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Color> for StampColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<StampColor> for Color {
    fn from(color: StampColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
