//! InkStamp application
//!
//! Session state tying the pen ledger and stamp compositors to their
//! surfaces, with view gating, redraw-on-change and PNG export.

pub mod config;
pub mod error;
pub mod input;
pub mod script;
pub mod session;

pub use config::{AppConfig, SurfaceSize};
pub use error::{AppError, AppResult};
pub use input::PointerEvent;
pub use script::{Script, SessionEvent};
pub use session::{Session, SurfaceKind};
