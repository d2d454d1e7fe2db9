//! Renderer trait abstraction.

use inkstamp_core::scene::Scene;
use kurbo::Size;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Surface error: {0}")]
    Surface(String),
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for rendering backends.
///
/// A backend owns one drawing surface and paints [`Scene`]s onto it. A scene
/// starting with a clear replaces whatever was there; any other scene is
/// painted over the existing pixels.
pub trait Renderer {
    /// Paint every command of `scene`, in order.
    fn render_scene(&mut self, scene: &Scene);

    /// Size of the underlying surface in pixels.
    fn size(&self) -> Size;
}
