//! Pointer input delivered by the UI.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in surface-local coordinates.
///
/// The UI translates screen coordinates to the drawing surface before
/// handing events over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }
}
