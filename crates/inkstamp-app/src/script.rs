//! Scripted UI events, replayed against a [`Session`].
//!
//! A script is a JSON document standing in for the widgets that would
//! otherwise drive the session:
//!
//! ```json
//! {"events": [
//!     {"type": "select_view", "view": "Tab3"},
//!     {"type": "set_stamp_text", "field": "center", "value": "PAID"},
//!     {"type": "save_stamp"}
//! ]}
//! ```

use crate::error::{AppError, AppResult};
use crate::input::PointerEvent;
use crate::session::Session;
use inkstamp_core::{ActiveView, TextField};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One UI interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SelectView { view: ActiveView },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    SetPenColor { color: String },
    ClearDrawing,
    SetStampText { field: TextField, value: String },
    SetShowBorder { show: bool },
    SetStampColor { color: String },
    /// Redraw the rectangular stamp.
    Stamp,
    SetCircleText { field: TextField, value: String },
    SetCircleShowBorder { show: bool },
    SetShowAdditionalCircle { show: bool },
    SetCircleStampColor { color: String },
    SetPreviewText { value: String },
    SetPreviewColor { color: String },
    SaveStamp,
}

/// Ordered list of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<SessionEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} events from: {:?}", script.events.len(), path);
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Session {
    /// Dispatch a single event.
    pub fn apply(&mut self, event: &SessionEvent) {
        log::trace!("Event: {:?}", event);
        match event {
            SessionEvent::SelectView { view } => self.select_view(*view),
            SessionEvent::PointerDown { x, y } => self.handle_pointer(PointerEvent::down(*x, *y)),
            SessionEvent::PointerMove { x, y } => self.handle_pointer(PointerEvent::moved(*x, *y)),
            SessionEvent::PointerUp => self.handle_pointer(PointerEvent::Up),
            SessionEvent::SetPenColor { color } => self.set_pen_color(color),
            SessionEvent::ClearDrawing => self.clear_drawing(),
            SessionEvent::SetStampText { field, value } => self.set_stamp_text(*field, value.as_str()),
            SessionEvent::SetShowBorder { show } => self.set_show_border(*show),
            SessionEvent::SetStampColor { color } => self.set_stamp_color(color),
            SessionEvent::Stamp => self.update_stamp(),
            SessionEvent::SetCircleText { field, value } => self.set_circle_text(*field, value.as_str()),
            SessionEvent::SetCircleShowBorder { show } => self.set_circle_show_border(*show),
            SessionEvent::SetShowAdditionalCircle { show } => self.set_show_additional_circle(*show),
            SessionEvent::SetCircleStampColor { color } => self.set_circle_stamp_color(color),
            SessionEvent::SetPreviewText { value } => self.set_preview_text(value.as_str()),
            SessionEvent::SetPreviewColor { color } => self.set_preview_color(color),
            SessionEvent::SaveStamp => {
                self.save_stamp();
            }
        }
    }

    /// Dispatch every event in order.
    pub fn run(&mut self, script: &Script) {
        for event in &script.events {
            self.apply(event);
        }
        log::debug!("Ran {} events", script.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, SurfaceSize};
    use crate::session::SurfaceKind;
    use inkstamp_core::StampColor;
    use std::io::Write;

    fn config() -> AppConfig {
        AppConfig {
            drawing_size: SurfaceSize::new(120, 80),
            stamp_size: SurfaceSize::new(200, 200),
            circle_stamp_size: SurfaceSize::new(200, 200),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_events() {
        let script = Script::from_json(
            r#"{"events": [
                {"type": "select_view", "view": "Tab3"},
                {"type": "pointer_down", "x": 1.0, "y": 2.0},
                {"type": "pointer_up"},
                {"type": "set_stamp_text", "field": "bottom", "value": "2024"},
                {"type": "set_show_additional_circle", "show": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            script.events,
            vec![
                SessionEvent::SelectView { view: ActiveView::Tab3 },
                SessionEvent::PointerDown { x: 1.0, y: 2.0 },
                SessionEvent::PointerUp,
                SessionEvent::SetStampText {
                    field: TextField::Bottom,
                    value: "2024".into()
                },
                SessionEvent::SetShowAdditionalCircle { show: true },
            ]
        );
    }

    #[test]
    fn test_unknown_event_rejected() {
        let err = Script::from_json(r#"{"events": [{"type": "explode"}]}"#).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_drawing_script() {
        let script = Script {
            events: vec![
                SessionEvent::PointerDown { x: 10.0, y: 40.0 },
                SessionEvent::PointerMove { x: 60.0, y: 40.0 },
                SessionEvent::PointerMove { x: 110.0, y: 40.0 },
                SessionEvent::PointerUp,
                SessionEvent::SetPenColor { color: "#00ff00".into() },
            ],
        };
        let mut session = Session::new(&config());
        session.run(&script);

        assert_eq!(session.ledger().len(), 2);
        let surface = session.surface(SurfaceKind::Drawing).unwrap();
        assert_eq!(surface.pixel(80, 40), Some(StampColor::new(0, 255, 0, 255)));
    }

    #[test]
    fn test_stamp_script_saves() {
        let script = Script {
            events: vec![
                SessionEvent::SelectView { view: ActiveView::Tab3 },
                SessionEvent::SetStampText {
                    field: TextField::Center,
                    value: "PAID".into(),
                },
                SessionEvent::SetShowBorder { show: true },
                SessionEvent::SaveStamp,
            ],
        };
        let mut session = Session::new(&config());
        session.run(&script);
        assert!(session.stamp_data_url().is_some_and(|u| u.starts_with("data:image/png;base64,")));
    }

    #[test]
    fn test_save_on_untouched_stamp_is_noop() {
        let script = Script {
            events: vec![SessionEvent::SaveStamp],
        };
        let mut session = Session::new(&config());
        session.run(&script);
        assert!(session.stamp_data_url().is_none());
    }

    #[test]
    fn test_explicit_stamp_event() {
        let mut session = Session::new(&config());
        session.apply(&SessionEvent::SetShowBorder { show: true });
        assert!(!session.surface(SurfaceKind::Stamp).unwrap().has_ink());

        session.apply(&SessionEvent::SelectView { view: ActiveView::Tab3 });
        session.apply(&SessionEvent::Stamp);
        assert!(session.surface(SurfaceKind::Stamp).unwrap().has_ink());
    }

    #[test]
    fn test_preview_events() {
        let script = Script::from_json(
            r#"{"events": [
                {"type": "set_preview_text", "value": "Ink"},
                {"type": "set_preview_color", "color": "blue"}
            ]}"#,
        )
        .unwrap();
        let mut session = Session::new(&config());
        session.run(&script);
        assert_eq!(session.preview().text, "Ink");
        assert_eq!(session.preview().color, StampColor::new(0, 0, 255, 255));
    }

    #[test]
    fn test_load_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"events": [{{"type": "clear_drawing"}}]}}"#).unwrap();
        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.events, vec![SessionEvent::ClearDrawing]);
    }
}
