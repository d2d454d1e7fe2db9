//! Rectangular stamp: three centered lines inside an optional border.

use super::{BOTTOM_LINE_OFFSET, CENTER_LINE_OFFSET, TOP_LINE_OFFSET, TextField, fill_centered_line};
use crate::color::StampColor;
use crate::scene::Scene;
use crate::text::{Font, TextMetrics, normalize_text};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Inset of the border from each surface edge.
pub const BORDER_INSET: f64 = 10.0;
/// Stroke width of the border.
pub const BORDER_WIDTH: f64 = 1.0;

/// User-editable fields of the rectangular stamp.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RectStampFields {
    pub text_top: String,
    pub text_center: String,
    pub text_bottom: String,
    /// Accepted for callers that set it, never rendered.
    pub stamp_name: String,
    pub show_border: bool,
    pub stamp_color: StampColor,
}

impl RectStampFields {
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Top => self.text_top = value,
            TextField::Center => self.text_center = value,
            TextField::Bottom => self.text_bottom = value,
            TextField::Name => self.stamp_name = value,
        }
    }
}

/// Lay out the rectangular stamp for a surface of `size`.
pub fn render_rect_stamp(fields: &RectStampFields, size: Size, metrics: &dyn TextMetrics) -> Scene {
    let text_top = normalize_text(&fields.text_top);
    let text_center = normalize_text(&fields.text_center);
    let text_bottom = normalize_text(&fields.text_bottom);

    let mut scene = Scene::cleared(size);
    let font = Font::stamp();
    let color = fields.stamp_color;
    let center_x = size.width / 2.0;
    let center_y = size.height / 2.0;

    if fields.show_border {
        let border = Rect::new(
            BORDER_INSET,
            BORDER_INSET,
            size.width - BORDER_INSET,
            size.height - BORDER_INSET,
        );
        scene.stroke_rect(border, color, BORDER_WIDTH);
    }

    for (text, offset) in [
        (text_top, TOP_LINE_OFFSET),
        (text_center, CENTER_LINE_OFFSET),
        (text_bottom, BOTTOM_LINE_OFFSET),
    ] {
        fill_centered_line(&mut scene, metrics, text, center_x, center_y + offset, font, color);
    }

    log::debug!(
        "rect stamp laid out: {} commands on {}x{}",
        scene.len(),
        size.width,
        size.height
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCommand;
    use crate::text::{MonospaceMetrics, TextAlign, TextBaseline};
    use kurbo::Point;

    fn fields(top: &str, center: &str, bottom: &str, border: bool) -> RectStampFields {
        RectStampFields {
            text_top: top.into(),
            text_center: center.into(),
            text_bottom: bottom.into(),
            show_border: border,
            ..Default::default()
        }
    }

    fn text_origins(scene: &Scene) -> Vec<(String, Point)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, origin, .. } => Some((text.clone(), *origin)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_three_lines_with_border() {
        let metrics = MonospaceMetrics::default();
        let scene = render_rect_stamp(&fields("A", "B", "C", true), Size::new(200.0, 200.0), &metrics);

        assert_eq!(scene.commands()[0], DrawCommand::Clear);
        let border = scene.commands().iter().find_map(|c| match c {
            DrawCommand::StrokeRect { rect, .. } => Some(*rect),
            _ => None,
        });
        let border = border.expect("border drawn");
        assert!((border.x0 - 10.0).abs() < f64::EPSILON);
        assert!((border.y0 - 10.0).abs() < f64::EPSILON);
        assert!((border.width() - 180.0).abs() < f64::EPSILON);
        assert!((border.height() - 180.0).abs() < f64::EPSILON);

        let width = metrics.measure("A", &Font::stamp());
        let origins = text_origins(&scene);
        assert_eq!(origins.len(), 3);
        assert_eq!(origins[0], ("A".to_string(), Point::new(100.0 - width / 2.0, 40.0)));
        assert_eq!(origins[1], ("B".to_string(), Point::new(100.0 - width / 2.0, 106.0)));
        assert_eq!(origins[2], ("C".to_string(), Point::new(100.0 - width / 2.0, 180.0)));
    }

    #[test]
    fn test_lines_centered_by_own_width() {
        let metrics = MonospaceMetrics::default();
        let scene = render_rect_stamp(
            &fields("ACME", "", "Approved by QA", false),
            Size::new(300.0, 300.0),
            &metrics,
        );
        let font = Font::stamp();
        for (text, origin) in text_origins(&scene) {
            let width = metrics.measure(&text, &font);
            assert!((origin.x + width / 2.0 - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_border_when_disabled() {
        let scene = render_rect_stamp(
            &fields("A", "B", "C", false),
            Size::new(200.0, 200.0),
            &MonospaceMetrics::default(),
        );
        assert!(!scene.commands().iter().any(|c| matches!(c, DrawCommand::StrokeRect { .. })));
    }

    #[test]
    fn test_whitespace_lines_draw_nothing() {
        let scene = render_rect_stamp(
            &fields("   ", "\t", "", false),
            Size::new(200.0, 200.0),
            &MonospaceMetrics::default(),
        );
        assert!(!scene.has_content());
    }

    #[test]
    fn test_stamp_name_never_rendered() {
        let mut f = fields("A", "B", "C", true);
        f.stamp_name = "   ".into();
        let metrics = MonospaceMetrics::default();
        let scene = render_rect_stamp(&f, Size::new(200.0, 200.0), &metrics);
        assert!(scene.texts().all(|t| t != "   "));

        f.stamp_name = "Secret".into();
        let scene = render_rect_stamp(&f, Size::new(200.0, 200.0), &metrics);
        assert!(scene.texts().all(|t| t != "Secret"));
    }

    #[test]
    fn test_stamp_name_kept_verbatim_and_ignored_by_layout() {
        let metrics = MonospaceMetrics::default();
        let size = Size::new(200.0, 200.0);
        let unnamed = fields("A", "B", "C", true);
        let mut named = unnamed.clone();
        named.set_text(TextField::Name, "  Office 12 ");

        let json = serde_json::to_string(&named).unwrap();
        let restored: RectStampFields = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.stamp_name, "  Office 12 ");

        assert_eq!(
            render_rect_stamp(&restored, size, &metrics),
            render_rect_stamp(&unnamed, size, &metrics)
        );
    }

    #[test]
    fn test_uses_stamp_color_and_font() {
        let mut f = fields("A", "", "", true);
        f.stamp_color = StampColor::new(200, 0, 0, 255);
        let scene = render_rect_stamp(&f, Size::new(200.0, 200.0), &MonospaceMetrics::default());
        for command in scene.commands() {
            match command {
                DrawCommand::StrokeRect { color, .. } => assert_eq!(*color, f.stamp_color),
                DrawCommand::FillText { color, font, align, baseline, .. } => {
                    assert_eq!(*color, f.stamp_color);
                    assert_eq!(*font, Font::stamp());
                    assert_eq!(*align, TextAlign::Left);
                    assert_eq!(*baseline, TextBaseline::Alphabetic);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_tiny_surface_degrades() {
        let scene = render_rect_stamp(
            &fields("A", "B", "C", true),
            Size::new(5.0, 5.0),
            &MonospaceMetrics::default(),
        );
        assert!(scene.has_content());
    }

    #[test]
    fn test_fields_deserialize_with_defaults() {
        let f: RectStampFields = serde_json::from_str(r#"{"text_top": "PAID", "show_border": true}"#).unwrap();
        assert_eq!(f.text_top, "PAID");
        assert!(f.show_border);
        assert_eq!(f.text_center, "");
        assert_eq!(f.stamp_color, StampColor::black());
    }

    #[test]
    fn test_set_text() {
        let mut f = RectStampFields::default();
        f.set_text(TextField::Top, "top");
        f.set_text(TextField::Name, "name");
        assert_eq!(f.text_top, "top");
        assert_eq!(f.stamp_name, "name");
    }
}
