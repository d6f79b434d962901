use std::env;

use crossterm::terminal;
use log::debug;

/// Columns assumed when the terminal size cannot be determined.
pub const DEFAULT_COLUMNS: usize = 80;
/// Columns kept free at the right edge of the terminal.
pub const MARGIN: usize = 4;
/// Narrowest wrap width ever used.
pub const MIN_WRAP_WIDTH: usize = 40;

/// Something that knows how wide the output is.
pub trait WidthSource {
    /// Column count, or `None` if it cannot be determined.
    fn columns(&self) -> Option<usize>;
}

/// Width of the controlling terminal.
///
/// A positive `COLUMNS` environment variable takes priority over asking the
/// terminal itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn columns(&self) -> Option<usize> {
        if let Some(cols) = parse_columns(env::var("COLUMNS").ok().as_deref()) {
            debug!("Using COLUMNS={} from environment", cols);
            return Some(cols);
        }

        match terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(cols as usize),
            Ok(_) => None,
            Err(e) => {
                debug!("Terminal size unavailable: {}", e);
                None
            }
        }
    }
}

/// A positive column count from a `COLUMNS`-style value.
fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
}

/// A width fixed up front, e.g. from `--width` or a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn columns(&self) -> Option<usize> {
        Some(self.0)
    }
}

/// Width to wrap text at: the detected columns less the margin, never below
/// [`MIN_WRAP_WIDTH`].
pub fn wrap_width(source: &dyn WidthSource) -> usize {
    let columns = source.columns().unwrap_or(DEFAULT_COLUMNS);
    let width = columns.saturating_sub(MARGIN).max(MIN_WRAP_WIDTH);
    debug!("Terminal has {} columns, wrapping at {}", columns, width);
    width
}
