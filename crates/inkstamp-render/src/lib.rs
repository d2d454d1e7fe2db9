//! InkStamp Render Library
//!
//! Renderer abstraction, a CPU raster backend built on tiny-skia, and PNG
//! export of rendered surfaces.

pub mod export;
mod renderer;
mod skia_impl;

pub use export::{encode_png, export_image, from_data_uri, surface_to_png, to_data_uri};
pub use renderer::{RenderResult, Renderer, RendererError};
pub use skia_impl::PixmapSurface;
