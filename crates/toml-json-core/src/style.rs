//! Output layout for the rendered JSON.

/// Spaces per nesting level used when no indent is requested.
pub const DEFAULT_INDENT: usize = 2;

/// Widest indent the renderer emits; larger requests are capped.
pub const MAX_INDENT: usize = 16;

/// How the JSON text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// One member per line, nested levels indented by `indent` spaces.
    Pretty { indent: usize },
    /// Everything on a single line, no insignificant whitespace.
    Compact,
}

impl OutputStyle {
    /// Pretty output with a custom indent width.
    pub fn pretty(indent: usize) -> Self {
        Self::Pretty { indent }
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::Pretty {
            indent: DEFAULT_INDENT,
        }
    }
}
