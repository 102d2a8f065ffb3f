//! Diagnostic diff rendering for mismatch messages.
//!
//! The alignment itself comes from the `dissimilar` crate; this module only
//! renders its equal/delete/insert spans into the delimited block appended
//! to [`Error::Mismatch`](crate::Error::Mismatch). The diff never
//! influences pass/fail.

use dissimilar::Chunk;

const BLOCK_OPEN: &str = "---- diff (expected vs actual) ----";
const BLOCK_CLOSE: &str = "-----------------------------------";

/// Render a character-level alignment of `expected` against `actual`.
///
/// Equal spans are rendered bare; spans present only in `expected` are
/// wrapped in `[-`..`-]`, spans present only in `actual` in `{+`..`+}`.
/// Plain markers, no terminal colors.
pub fn render(expected: &str, actual: &str) -> String {
    let mut out = String::new();
    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(text) => out.push_str(text),
            Chunk::Delete(text) => {
                out.push_str("[-");
                out.push_str(text);
                out.push_str("-]");
            }
            Chunk::Insert(text) => {
                out.push_str("{+");
                out.push_str(text);
                out.push_str("+}");
            }
        }
    }
    out
}

/// Build the full detail text for a mismatch: the plain assertion message
/// followed by the delimited diff block.
pub(crate) fn mismatch_detail(expected: &str, actual: &str) -> String {
    format!(
        "expected {expected}, got {actual}\n\n{BLOCK_OPEN}\n{}\n{BLOCK_CLOSE}",
        render(expected, actual)
    )
}
