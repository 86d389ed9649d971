//! Tokenizing source text and producing the marked-up render.

use crate::finder::TruncationResult;
use crate::probe::Word;

/// Horizontal ellipsis, used when no marker text is configured.
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// Split text into the word tokens the host renders as inline boxes.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Flat text of the render after the marker has been placed.
///
/// The marker attaches to the word before it, so the text reads
/// `"kept words…"`. Words after the marker remain in the render until the
/// restorer cuts them; hidden words are left out.
pub fn render_marked(words: &[Word], result: &TruncationResult, ellipsis: &str) -> String {
    let mut out = words[result.retained.clone()]
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(ellipsis);

    if !result.overflowed_single_word {
        for word in &words[result.retained.end..] {
            out.push(' ');
            out.push_str(&word.text);
        }
    }
    out
}
