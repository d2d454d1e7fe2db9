//! InkStamp Core Library
//!
//! Platform-agnostic data structures and layout logic for freehand drawings
//! and rubber stamps. Nothing here touches pixels: drawings and stamps are
//! projected into [`Scene`] display lists that a renderer rasterizes.

pub mod color;
pub mod error;
pub mod geometry;
pub mod ledger;
pub mod preview;
pub mod scene;
pub mod stamp;
pub mod text;
pub mod view;

pub use color::StampColor;
pub use error::{CoreError, CoreResult};
pub use geometry::{arc_text_positions, star_polygon};
pub use ledger::{PEN_WIDTH, ReplayColorMode, Segment, StrokeLedger};
pub use preview::{FontPreview, render_font_preview};
pub use scene::{DrawCommand, Scene};
pub use stamp::{CircleStampFields, RectStampFields, TextField, render_circle_stamp, render_rect_stamp};
pub use text::{Font, FontFamily, MonospaceMetrics, TextAlign, TextBaseline, TextMetrics, normalize_text};
pub use view::ActiveView;
