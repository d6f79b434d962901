//! Render a chapter of a pipe-delimited KJV dataset as wrapped terminal text,
//! with verse numbers shown as inline subscripts.

pub mod render;
pub mod scripture;
pub mod subscript;
pub mod width;
pub mod wrap;

// Re-export main types for convenience
pub use render::{render_chapter, Outcome, RenderError, Report};
pub use scripture::{scan_chapter, scan_reader, ChapterQuery, ScanError, Verse};
pub use subscript::subscript;
pub use width::{wrap_width, FixedWidth, TerminalWidth, WidthSource};
pub use wrap::wrap;
