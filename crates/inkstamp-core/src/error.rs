//! Core error types.

use thiserror::Error;

/// Errors raised at the parsing boundaries of the core.
///
/// Drawing and layout operations never fail; only converting untrusted
/// strings into typed values does.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },
    #[error("Unknown view: {0:?}")]
    UnknownView(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
