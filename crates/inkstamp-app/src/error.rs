//! Application error types.

use inkstamp_core::CoreError;
use inkstamp_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading configuration and scripts, or writing output.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Surface not available: {0}")]
    MissingSurface(&'static str),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
