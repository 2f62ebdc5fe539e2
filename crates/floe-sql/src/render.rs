//! Dual-mode rendering: compact single-line or expanded multi-line output.

use tracing::trace;

/// Compact renderings shorter than this are used verbatim by [`Render::render`].
pub const MAX_WIDTH: usize = 120;

const PREFIX: &str = "    ";

/// Adds a single level of indentation to each non-empty line of `text`.
pub fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + PREFIX.len() * 4);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(PREFIX);
            out.push_str(line);
        }
    }
    out
}

/// The output contract shared by every expression node.
///
/// `packed` and `spacious` must denote the same SQL fragment; they differ
/// only in whitespace. `render` picks between them per node, so a short
/// child may still print compactly inside an expanded parent.
pub trait Render {
    /// Produces a compact single-line representation.
    fn packed(&self) -> String;

    /// Produces an expanded multi-line representation.
    fn spacious(&self) -> String;

    /// Selects the compact form when it fits within [`MAX_WIDTH`], the
    /// expanded form otherwise.
    fn render(&self) -> String {
        let text = self.packed();
        if text.len() < MAX_WIDTH {
            text
        } else {
            trace!(len = text.len(), "compact form too wide, expanding");
            self.spacious()
        }
    }
}
