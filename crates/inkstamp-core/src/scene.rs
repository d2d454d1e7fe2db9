//! Display lists produced by the compositors.
//!
//! Full redraws are built with [`Scene::cleared`] and start from a
//! [`DrawCommand::Clear`], so painting one reproduces the surface regardless
//! of what was there before. [`Scene::new`] builds an overlay painted on top
//! of the existing pixels.

use crate::color::StampColor;
use crate::text::{Font, TextAlign, TextBaseline};
use kurbo::{Circle, Line, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A single drawing operation, in surface-local pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Reset every pixel to transparent.
    Clear,
    StrokeLine {
        line: Line,
        color: StampColor,
        width: f64,
    },
    StrokeRect {
        rect: Rect,
        color: StampColor,
        width: f64,
    },
    StrokeCircle {
        circle: Circle,
        color: StampColor,
        width: f64,
    },
    /// Closed polygon filled with the nonzero rule.
    FillPolygon {
        points: Vec<Point>,
        color: StampColor,
    },
    FillText {
        text: String,
        origin: Point,
        font: Font,
        color: StampColor,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// Ordered drawing commands for one surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Size of the surface the scene was laid out for.
    pub size: Size,
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Create an empty overlay scene.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Create a scene that starts by clearing the surface.
    pub fn cleared(size: Size) -> Self {
        Self {
            size,
            commands: vec![DrawCommand::Clear],
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the scene draws anything beyond clearing.
    pub fn has_content(&self) -> bool {
        self.commands.iter().any(|c| !matches!(c, DrawCommand::Clear))
    }

    pub fn stroke_line(&mut self, line: Line, color: StampColor, width: f64) {
        self.push(DrawCommand::StrokeLine { line, color, width });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: StampColor, width: f64) {
        self.push(DrawCommand::StrokeRect { rect, color, width });
    }

    pub fn stroke_circle(&mut self, circle: Circle, color: StampColor, width: f64) {
        self.push(DrawCommand::StrokeCircle { circle, color, width });
    }

    pub fn fill_polygon(&mut self, points: Vec<Point>, color: StampColor) {
        self.push(DrawCommand::FillPolygon { points, color });
    }

    /// Fill a text run. Empty runs draw nothing and are skipped.
    pub fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font: Font,
        color: StampColor,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        if text.is_empty() {
            return;
        }
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font,
            color,
            align,
            baseline,
        });
    }

    /// All text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All stroked circles, in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeCircle { circle, .. } => Some(circle),
            _ => None,
        })
    }
}
