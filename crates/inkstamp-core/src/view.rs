//! Which surface the user is currently working on.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active tab of the editor.
///
/// The tab identifiers (`Canvas`, `Tab2`, ...) are the ones the UI sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveView {
    /// Freehand drawing surface.
    #[default]
    Canvas,
    /// Font preview.
    Tab2,
    /// Rectangular stamp.
    Tab3,
    /// Circular stamp.
    Tab4,
}

impl ActiveView {
    /// Tab identifier as the UI names it.
    pub fn id(&self) -> &'static str {
        match self {
            ActiveView::Canvas => "Canvas",
            ActiveView::Tab2 => "Tab2",
            ActiveView::Tab3 => "Tab3",
            ActiveView::Tab4 => "Tab4",
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, ActiveView::Canvas)
    }

    pub fn is_rect_stamp(&self) -> bool {
        matches!(self, ActiveView::Tab3)
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActiveView {
    type Err = CoreError;

    /// Accepts tab identifiers and a few descriptive aliases, case-insensitively.
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canvas" | "drawing" => Ok(ActiveView::Canvas),
            "tab2" | "fonts" => Ok(ActiveView::Tab2),
            "tab3" | "stamp" | "rect" => Ok(ActiveView::Tab3),
            "tab4" | "circle" => Ok(ActiveView::Tab4),
            _ => Err(CoreError::UnknownView(s.to_string())),
        }
    }
}
