//! Editing session: owns the state and surfaces and redraws on every change.
//!
//! The drawing surface and the rectangular stamp only react while their tab
//! is active. The circular stamp and the font preview redraw on every change
//! to their fields, whichever tab is showing.

use crate::config::{AppConfig, SurfaceSize};
use crate::input::PointerEvent;
use inkstamp_core::{
    ActiveView, CircleStampFields, FontPreview, MonospaceMetrics, RectStampFields, Scene, StampColor, StrokeLedger,
    TextField, render_circle_stamp, render_font_preview, render_rect_stamp,
};
use inkstamp_render::{PixmapSurface, Renderer, export_image, to_data_uri};
use kurbo::Point;

/// One of the surfaces a session paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Drawing,
    Stamp,
    CircleStamp,
    FontPreview,
}

impl SurfaceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Drawing => "drawing",
            SurfaceKind::Stamp => "stamp",
            SurfaceKind::CircleStamp => "circle stamp",
            SurfaceKind::FontPreview => "font preview",
        }
    }
}

/// Live editor state.
#[derive(Debug)]
pub struct Session {
    view: ActiveView,
    ledger: StrokeLedger,
    rect_fields: RectStampFields,
    circle_fields: CircleStampFields,
    preview: FontPreview,
    drawing_surface: Option<PixmapSurface>,
    stamp_surface: Option<PixmapSurface>,
    circle_surface: Option<PixmapSurface>,
    preview_surface: Option<PixmapSurface>,
    /// Whether the rectangular stamp has been laid out at least once.
    stamp_rendered: bool,
    stamp_data_url: Option<String>,
}

impl Session {
    /// Create a session with freshly allocated surfaces and run the initial redraws.
    ///
    /// A surface that cannot be allocated is left out; everything that would
    /// paint it becomes a no-op.
    pub fn new(config: &AppConfig) -> Self {
        let pen_color = StampColor::parse(&config.pen_color).unwrap_or_else(|e| {
            log::warn!("{}; falling back to black", e);
            StampColor::black()
        });
        let metrics = MonospaceMetrics::new(config.glyph_advance_ratio);
        let mut session = Self {
            view: config.initial_view,
            ledger: StrokeLedger::new(pen_color).with_replay_mode(config.replay_color_mode),
            rect_fields: RectStampFields::default(),
            circle_fields: CircleStampFields::default(),
            preview: FontPreview::default(),
            drawing_surface: create_surface(SurfaceKind::Drawing, config.drawing_size, metrics),
            stamp_surface: create_surface(SurfaceKind::Stamp, config.stamp_size, metrics),
            circle_surface: create_surface(SurfaceKind::CircleStamp, config.circle_stamp_size, metrics),
            preview_surface: create_surface(SurfaceKind::FontPreview, config.preview_size, metrics),
            stamp_rendered: false,
            stamp_data_url: None,
        };
        session.replay_drawing();
        session.update_stamp();
        session.update_circle_stamp();
        session.update_font_preview();
        session
    }

    /// Build a session around explicit surfaces, without the initial redraws.
    ///
    /// The font preview starts without a surface; see [`Session::with_preview_surface`].
    pub fn with_surfaces(
        view: ActiveView,
        ledger: StrokeLedger,
        drawing_surface: Option<PixmapSurface>,
        stamp_surface: Option<PixmapSurface>,
        circle_surface: Option<PixmapSurface>,
    ) -> Self {
        Self {
            view,
            ledger,
            rect_fields: RectStampFields::default(),
            circle_fields: CircleStampFields::default(),
            preview: FontPreview::default(),
            drawing_surface,
            stamp_surface,
            circle_surface,
            preview_surface: None,
            stamp_rendered: false,
            stamp_data_url: None,
        }
    }

    pub fn with_preview_surface(mut self, surface: PixmapSurface) -> Self {
        self.preview_surface = Some(surface);
        self
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn ledger(&self) -> &StrokeLedger {
        &self.ledger
    }

    pub fn rect_fields(&self) -> &RectStampFields {
        &self.rect_fields
    }

    pub fn circle_fields(&self) -> &CircleStampFields {
        &self.circle_fields
    }

    pub fn preview(&self) -> &FontPreview {
        &self.preview
    }

    pub fn surface(&self, kind: SurfaceKind) -> Option<&PixmapSurface> {
        match kind {
            SurfaceKind::Drawing => self.drawing_surface.as_ref(),
            SurfaceKind::Stamp => self.stamp_surface.as_ref(),
            SurfaceKind::CircleStamp => self.circle_surface.as_ref(),
            SurfaceKind::FontPreview => self.preview_surface.as_ref(),
        }
    }

    /// The last exported stamp as a PNG data URI.
    pub fn stamp_data_url(&self) -> Option<&str> {
        self.stamp_data_url.as_deref()
    }

    /// Switch tabs. Nothing is redrawn until the next change.
    pub fn select_view(&mut self, view: ActiveView) {
        log::debug!("View: {} -> {}", self.view, view);
        self.view = view;
    }

    fn drawing_active(&self) -> bool {
        self.view.is_drawing() && self.drawing_surface.is_some()
    }

    // --- Drawing ---

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.begin_stroke(position),
            PointerEvent::Move { position } => self.extend_stroke(position),
            PointerEvent::Up => self.end_stroke(),
        }
    }

    /// Put the pen down at `point`.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.view.is_drawing() {
            self.ledger.begin_stroke(point);
        }
    }

    /// Drag the pen to `point`, painting the new segment straight onto the surface.
    pub fn extend_stroke(&mut self, point: Point) {
        if !self.drawing_active() {
            return;
        }
        let Some(surface) = self.drawing_surface.as_mut() else {
            return;
        };
        if let Some(segment) = self.ledger.extend_stroke(point) {
            let mut overlay = Scene::new(surface.size());
            overlay.stroke_line(segment.line(), segment.color, inkstamp_core::PEN_WIDTH);
            surface.render_scene(&overlay);
        }
    }

    /// Lift the pen.
    pub fn end_stroke(&mut self) {
        self.ledger.end_stroke();
    }

    /// Change the pen color and repaint the drawing with it.
    ///
    /// Invalid colors are logged and ignored.
    pub fn set_pen_color(&mut self, color: &str) {
        if !self.view.is_drawing() {
            return;
        }
        match StampColor::parse(color) {
            Ok(color) => {
                self.ledger.set_color(color);
                self.replay_drawing();
            }
            Err(e) => log::warn!("Ignoring pen color: {}", e),
        }
    }

    /// Erase the drawing and its history, and reset the pen color.
    pub fn clear_drawing(&mut self) {
        if !self.drawing_active() {
            return;
        }
        self.ledger.clear();
        if let Some(surface) = self.drawing_surface.as_mut() {
            surface.clear();
        }
        log::debug!("Drawing cleared");
    }

    /// Repaint the drawing surface from the full stroke history.
    pub fn replay_drawing(&mut self) {
        if !self.view.is_drawing() {
            return;
        }
        let Some(surface) = self.drawing_surface.as_mut() else {
            return;
        };
        let scene = self.ledger.replay(surface.size());
        surface.render_scene(&scene);
        log::debug!("Replayed {} segments", self.ledger.len());
    }

    // --- Rectangular stamp ---

    pub fn set_stamp_text(&mut self, field: TextField, value: impl Into<String>) {
        self.rect_fields.set_text(field, value);
        self.update_stamp();
    }

    pub fn set_show_border(&mut self, show: bool) {
        self.rect_fields.show_border = show;
        self.update_stamp();
    }

    /// Invalid colors are logged and ignored.
    pub fn set_stamp_color(&mut self, color: &str) {
        match StampColor::parse(color) {
            Ok(color) => {
                self.rect_fields.stamp_color = color;
                self.update_stamp();
            }
            Err(e) => log::warn!("Ignoring stamp color: {}", e),
        }
    }

    /// Redraw the rectangular stamp if its tab is active.
    pub fn update_stamp(&mut self) {
        if !self.view.is_rect_stamp() {
            return;
        }
        let Some(surface) = self.stamp_surface.as_mut() else {
            return;
        };
        let scene = render_rect_stamp(&self.rect_fields, surface.size(), &*surface);
        surface.render_scene(&scene);
        self.stamp_rendered = true;
    }

    /// Export the rectangular stamp as a PNG data URI.
    ///
    /// Leaves the previous export in place when the stamp has never been
    /// drawn or its surface is missing.
    pub fn save_stamp(&mut self) -> Option<&str> {
        if !self.stamp_rendered {
            log::debug!("Stamp not drawn yet; nothing to save");
            return None;
        }
        let png = export_image(self.stamp_surface.as_ref())?;
        self.stamp_data_url = Some(to_data_uri(&png));
        self.stamp_data_url.as_deref()
    }

    // --- Circular stamp ---

    pub fn set_circle_text(&mut self, field: TextField, value: impl Into<String>) {
        self.circle_fields.set_text(field, value);
        self.update_circle_stamp();
    }

    pub fn set_circle_show_border(&mut self, show: bool) {
        self.circle_fields.circle_show_border = show;
        self.update_circle_stamp();
    }

    pub fn set_show_additional_circle(&mut self, show: bool) {
        self.circle_fields.show_additional_circle = show;
        self.update_circle_stamp();
    }

    /// Invalid colors are logged and ignored.
    pub fn set_circle_stamp_color(&mut self, color: &str) {
        match StampColor::parse(color) {
            Ok(color) => {
                self.circle_fields.stamp_color = color;
                self.update_circle_stamp();
            }
            Err(e) => log::warn!("Ignoring circle stamp color: {}", e),
        }
    }

    /// Redraw the circular stamp, regardless of the active tab.
    pub fn update_circle_stamp(&mut self) {
        let Some(surface) = self.circle_surface.as_mut() else {
            return;
        };
        let scene = render_circle_stamp(&self.circle_fields, surface.size(), &*surface);
        surface.render_scene(&scene);
    }

    // --- Font preview ---

    pub fn set_preview_text(&mut self, value: impl Into<String>) {
        self.preview.text = value.into();
        self.update_font_preview();
    }

    /// Invalid colors are logged and ignored.
    pub fn set_preview_color(&mut self, color: &str) {
        match StampColor::parse(color) {
            Ok(color) => {
                self.preview.color = color;
                self.update_font_preview();
            }
            Err(e) => log::warn!("Ignoring preview color: {}", e),
        }
    }

    /// Redraw the font preview, regardless of the active tab.
    pub fn update_font_preview(&mut self) {
        let Some(surface) = self.preview_surface.as_mut() else {
            return;
        };
        let scene = render_font_preview(&self.preview, surface.size());
        surface.render_scene(&scene);
    }
}

fn create_surface(kind: SurfaceKind, size: SurfaceSize, metrics: MonospaceMetrics) -> Option<PixmapSurface> {
    match PixmapSurface::new(size.width, size.height) {
        Ok(surface) => Some(surface.with_metrics(metrics)),
        Err(e) => {
            log::error!("No {} surface: {}", kind.name(), e);
            None
        }
    }
}
