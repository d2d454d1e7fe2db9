//! tiny-skia based renderer implementation.

use crate::renderer::{RenderResult, Renderer, RendererError};
use font8x8::{BASIC_FONTS, GREEK_FONTS, LATIN_FONTS, UnicodeFonts};
use inkstamp_core::color::StampColor;
use inkstamp_core::scene::{DrawCommand, Scene};
use inkstamp_core::text::{Font, MonospaceMetrics, TextAlign, TextBaseline, TextMetrics};
use kurbo::{Circle, Line, Point, Rect, Size};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Rows and columns of a bitmap glyph.
const GLYPH_CELLS: usize = 8;
/// Glyph rows drawn above the alphabetic baseline; the last row is the descender.
const GLYPH_ASCENT_ROWS: f64 = 7.0;

/// A CPU raster surface backed by a tiny-skia [`Pixmap`].
///
/// Text is drawn from 8x8 bitmap glyphs stretched to the font's advance and
/// size, so the surface's [`TextMetrics`] are monospace.
pub struct PixmapSurface {
    pixmap: Pixmap,
    metrics: MonospaceMetrics,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl PixmapSurface {
    /// Create a transparent surface.
    ///
    /// Fails when either dimension is zero or the pixel buffer would be too large.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RendererError::Surface(format!("cannot allocate {width}x{height} surface")))?;
        Ok(Self {
            pixmap,
            metrics: MonospaceMetrics::default(),
        })
    }

    pub fn with_metrics(mut self, metrics: MonospaceMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight (non-premultiplied) RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        rgba
    }

    /// Straight RGBA of the pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<StampColor> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(StampColor::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Whether any pixel is not fully transparent.
    pub fn has_ink(&self) -> bool {
        self.pixmap.pixels().iter().any(|p| p.alpha() > 0)
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn stroke_line(&mut self, line: Line, color: StampColor, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(line.p0.x as f32, line.p0.y as f32);
        pb.line_to(line.p1.x as f32, line.p1.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, width);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: StampColor, width: f64) {
        let Some(rect) =
            tiny_skia::Rect::from_xywh(rect.x0 as f32, rect.y0 as f32, rect.width() as f32, rect.height() as f32)
        else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        self.stroke_path(&path, color, width);
    }

    fn stroke_circle(&mut self, circle: Circle, color: StampColor, width: f64) {
        if let Some(path) = PathBuilder::from_circle(circle.center.x as f32, circle.center.y as f32, circle.radius as f32)
        {
            self.stroke_path(&path, color, width);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: StampColor) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for point in rest {
            pb.line_to(point.x as f32, point.y as f32);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &Font,
        color: StampColor,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let advance = self.metrics.advance(font);
        let dot_w = advance / GLYPH_CELLS as f64;
        let dot_h = font.size_px / GLYPH_CELLS as f64;
        if dot_w <= 0.0 || dot_h <= 0.0 {
            return;
        }

        let left = match align {
            TextAlign::Left => origin.x,
            TextAlign::Center => origin.x - self.measure(text, font) / 2.0,
        };
        let top = match baseline {
            TextBaseline::Alphabetic => origin.y - dot_h * GLYPH_ASCENT_ROWS,
            TextBaseline::Middle => origin.y - font.size_px / 2.0,
        };

        let paint = paint(color);
        for (index, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch) else {
                continue;
            };
            let cell_x = left + index as f64 * advance;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_CELLS {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let x = cell_x + col as f64 * dot_w;
                    let y = top + row as f64 * dot_h;
                    if let Some(dot) = tiny_skia::Rect::from_xywh(x as f32, y as f32, dot_w as f32, dot_h as f32) {
                        self.pixmap.fill_rect(dot, &paint, Transform::identity(), None);
                    }
                }
            }
        }
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path, color: StampColor, width: f64) {
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }
}

/// Bitmap rows for `ch`, least significant bit leftmost.
fn glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
}

fn paint(color: StampColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl TextMetrics for PixmapSurface {
    fn measure(&self, text: &str, font: &Font) -> f64 {
        self.metrics.measure(text, font)
    }
}

impl Renderer for PixmapSurface {
    fn render_scene(&mut self, scene: &Scene) {
        for command in scene.commands() {
            match command {
                DrawCommand::Clear => self.clear(),
                DrawCommand::StrokeLine { line, color, width } => self.stroke_line(*line, *color, *width),
                DrawCommand::StrokeRect { rect, color, width } => self.stroke_rect(*rect, *color, *width),
                DrawCommand::StrokeCircle { circle, color, width } => self.stroke_circle(*circle, *color, *width),
                DrawCommand::FillPolygon { points, color } => self.fill_polygon(points, *color),
                DrawCommand::FillText {
                    text,
                    origin,
                    font,
                    color,
                    align,
                    baseline,
                } => self.fill_text(text, *origin, font, *color, *align, *baseline),
            }
        }
    }

    fn size(&self) -> Size {
        Size::new(f64::from(self.pixmap.width()), f64::from(self.pixmap.height()))
    }
}
