//! Freehand pen strokes recorded as an ordered list of straight segments.

use crate::color::StampColor;
use crate::scene::Scene;
use kurbo::{Line, Point, Size};
use serde::{Deserialize, Serialize};

/// Width of every pen segment.
pub const PEN_WIDTH: f64 = 2.0;

/// One straight piece of a pen stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Pen color at the time the segment was drawn.
    pub color: StampColor,
}

impl Segment {
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Which color replay paints historical segments with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayColorMode {
    /// Every segment takes the ledger's current color, so changing the pen
    /// color recolors the whole drawing.
    #[default]
    CurrentColor,
    /// Every segment keeps the color it was drawn with.
    StoredColor,
}

/// Append-only history of pen segments plus the in-progress stroke anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeLedger {
    segments: Vec<Segment>,
    current_color: StampColor,
    default_color: StampColor,
    #[serde(default)]
    replay_mode: ReplayColorMode,
    /// Last point of the stroke being drawn, if the pen is down.
    #[serde(skip)]
    anchor: Option<Point>,
}

impl Default for StrokeLedger {
    fn default() -> Self {
        Self::new(StampColor::default())
    }
}

impl StrokeLedger {
    /// Create an empty ledger whose pen starts (and resets to) `default_color`.
    pub fn new(default_color: StampColor) -> Self {
        Self {
            segments: Vec::new(),
            current_color: default_color,
            default_color,
            replay_mode: ReplayColorMode::default(),
            anchor: None,
        }
    }

    pub fn with_replay_mode(mut self, mode: ReplayColorMode) -> Self {
        self.replay_mode = mode;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn current_color(&self) -> StampColor {
        self.current_color
    }

    pub fn default_color(&self) -> StampColor {
        self.default_color
    }

    pub fn replay_mode(&self) -> ReplayColorMode {
        self.replay_mode
    }

    pub fn set_replay_mode(&mut self, mode: ReplayColorMode) {
        self.replay_mode = mode;
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a stroke at `point`. An in-progress stroke is abandoned.
    pub fn begin_stroke(&mut self, point: Point) {
        self.anchor = Some(point);
    }

    /// Extend the in-progress stroke to `point`.
    ///
    /// Appends a segment from the anchor to `point` in the current color and
    /// moves the anchor. Returns the new segment, or `None` when no stroke is
    /// in progress.
    pub fn extend_stroke(&mut self, point: Point) -> Option<Segment> {
        let start = self.anchor?;
        let segment = Segment {
            start,
            end: point,
            color: self.current_color,
        };
        self.segments.push(segment);
        self.anchor = Some(point);
        Some(segment)
    }

    /// Finish the in-progress stroke. Safe to call when none is active.
    pub fn end_stroke(&mut self) {
        self.anchor = None;
    }

    /// Change the pen color for future segments.
    ///
    /// Under [`ReplayColorMode::CurrentColor`] this also changes the color the
    /// next [`replay`](Self::replay) paints existing segments with.
    pub fn set_color(&mut self, color: StampColor) {
        self.current_color = color;
    }

    /// Drop all segments and reset the pen to its default color.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.current_color = self.default_color;
        self.anchor = None;
    }

    /// Color `segment` is painted with on replay.
    pub fn replay_color(&self, segment: &Segment) -> StampColor {
        match self.replay_mode {
            ReplayColorMode::CurrentColor => self.current_color,
            ReplayColorMode::StoredColor => segment.color,
        }
    }

    /// Redraw the full history onto a cleared surface of `size`, in insertion order.
    pub fn replay(&self, size: Size) -> Scene {
        let mut scene = Scene::cleared(size);
        for segment in &self.segments {
            scene.stroke_line(segment.line(), self.replay_color(segment), PEN_WIDTH);
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCommand;

    const SIZE: Size = Size::new(200.0, 100.0);

    fn red() -> StampColor {
        StampColor::new(255, 0, 0, 255)
    }

    fn draw_zigzag(ledger: &mut StrokeLedger) {
        ledger.begin_stroke(Point::new(0.0, 0.0));
        ledger.extend_stroke(Point::new(10.0, 10.0));
        ledger.extend_stroke(Point::new(20.0, 0.0));
        ledger.end_stroke();
    }

    fn stroked(scene: &Scene) -> Vec<(Line, StampColor)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeLine { line, color, .. } => Some((*line, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut ledger = StrokeLedger::default();
        assert!(ledger.extend_stroke(Point::new(5.0, 5.0)).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_extend_chains_from_anchor() {
        let mut ledger = StrokeLedger::default();
        draw_zigzag(&mut ledger);
        let segments = ledger.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point::new(0.0, 0.0));
        assert_eq!(segments[0].end, Point::new(10.0, 10.0));
        assert_eq!(segments[1].start, Point::new(10.0, 10.0));
        assert_eq!(segments[1].end, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_end_stroke_idempotent() {
        let mut ledger = StrokeLedger::default();
        ledger.end_stroke();
        ledger.begin_stroke(Point::ORIGIN);
        ledger.end_stroke();
        ledger.end_stroke();
        assert!(!ledger.is_drawing());
        assert!(ledger.extend_stroke(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_segments_store_pen_color() {
        let mut ledger = StrokeLedger::default();
        ledger.begin_stroke(Point::ORIGIN);
        ledger.extend_stroke(Point::new(1.0, 0.0));
        ledger.set_color(red());
        ledger.extend_stroke(Point::new(2.0, 0.0));
        assert_eq!(ledger.segments()[0].color, StampColor::black());
        assert_eq!(ledger.segments()[1].color, red());
    }

    #[test]
    fn test_replay_recolors_history() {
        let mut ledger = StrokeLedger::default();
        draw_zigzag(&mut ledger);
        ledger.set_color(red());

        let lines = stroked(&ledger.replay(SIZE));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Line::new((0.0, 0.0), (10.0, 10.0)));
        assert_eq!(lines[1].0, Line::new((10.0, 10.0), (20.0, 0.0)));
        assert!(lines.iter().all(|(_, color)| *color == red()));
    }

    #[test]
    fn test_replay_stored_color_mode() {
        let mut ledger = StrokeLedger::default().with_replay_mode(ReplayColorMode::StoredColor);
        draw_zigzag(&mut ledger);
        ledger.set_color(red());

        let lines = stroked(&ledger.replay(SIZE));
        assert!(lines.iter().all(|(_, color)| *color == StampColor::black()));
    }

    #[test]
    fn test_replay_starts_with_clear() {
        let mut ledger = StrokeLedger::default();
        draw_zigzag(&mut ledger);
        let scene = ledger.replay(SIZE);
        assert_eq!(scene.commands()[0], DrawCommand::Clear);
        assert_eq!(scene.size, SIZE);
    }

    #[test]
    fn test_clear_then_replay_is_empty() {
        let mut ledger = StrokeLedger::default();
        draw_zigzag(&mut ledger);
        ledger.set_color(red());
        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.current_color(), StampColor::black());
        assert!(!ledger.replay(SIZE).has_content());
    }

    #[test]
    fn test_clear_resets_to_configured_default() {
        let blue = StampColor::new(0, 0, 255, 255);
        let mut ledger = StrokeLedger::new(blue);
        ledger.set_color(red());
        ledger.clear();
        assert_eq!(ledger.current_color(), blue);
    }
}
