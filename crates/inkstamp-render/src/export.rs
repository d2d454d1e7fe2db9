//! PNG export of rendered surfaces.

use crate::renderer::{RenderResult, RendererError};
use crate::skia_impl::PixmapSurface;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME type of exported images.
pub const PNG_MIME: &str = "image/png";

/// Encode straight RGBA8 pixels as a PNG.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RendererError::Encode(format!("PNG header: {e}")))?;
        writer
            .write_image_data(rgba_data)
            .map_err(|e| RendererError::Encode(format!("PNG data: {e}")))?;
    }
    Ok(png_data)
}

/// Encode a surface's current pixels as a PNG.
pub fn surface_to_png(surface: &PixmapSurface) -> RenderResult<Vec<u8>> {
    encode_png(&surface.to_rgba8(), surface.width(), surface.height())
}

/// Export a surface as PNG bytes.
///
/// Returns `None` when there is no surface, or when encoding fails (logged).
pub fn export_image(surface: Option<&PixmapSurface>) -> Option<Vec<u8>> {
    let surface = surface?;
    match surface_to_png(surface) {
        Ok(png) => {
            log::info!("Exported {}x{} PNG ({} bytes)", surface.width(), surface.height(), png.len());
            Some(png)
        }
        Err(e) => {
            log::error!("Failed to export surface: {}", e);
            None
        }
    }
}

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn to_data_uri(png_data: &[u8]) -> String {
    format!("data:{};base64,{}", PNG_MIME, STANDARD.encode(png_data))
}

/// Extract the PNG bytes from a URI produced by [`to_data_uri`].
pub fn from_data_uri(uri: &str) -> Option<Vec<u8>> {
    let payload = uri.strip_prefix("data:image/png;base64,")?;
    STANDARD.decode(payload).ok()
}
