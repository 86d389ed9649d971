//! Search for the word at which overflowing text must be cut.
//!
//! The finder walks the measured word boxes once, in reading order, and stops
//! at the first word that either cannot fit the container width on its own or
//! reaches below the height budget. At a height violation it looks back one
//! word: if the ellipsis still fits after the previous word, the cut is placed
//! after it, otherwise the previous word is dropped as well.

use core::ops::Range;

use crate::error::{Result, TruncateError};
use crate::probe::Word;
use crate::request::Container;

/// Where the ellipsis marker goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EllipsisPlacement {
    /// In the word flow, immediately before the word at `before`.
    Inline { before: usize },
    /// Absolutely positioned over the container, offsets measured from its
    /// top-right corner.
    Overlay { top: f32, right: f32 },
}

/// Outcome of one boundary search.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncationResult {
    /// Last word kept before the marker, if any word is kept.
    pub boundary_word_index: Option<usize>,
    /// Kept words joined by single spaces, without the marker.
    pub truncated_text: String,
    /// A single word was wider than the container.
    pub overflowed_single_word: bool,
    pub placement: EllipsisPlacement,
    /// Range of word indices that stay visible.
    pub retained: Range<usize>,
    /// Words the host must hide.
    pub hidden: Vec<usize>,
}

impl TruncationResult {
    fn inline(words: &[Word], before: usize) -> Self {
        let retained = 0..before;
        Self {
            boundary_word_index: before.checked_sub(1),
            truncated_text: join_words(&words[retained.clone()]),
            overflowed_single_word: false,
            placement: EllipsisPlacement::Inline { before },
            retained,
            hidden: Vec::new(),
        }
    }

    fn overflowed(words: &[Word], index: usize) -> Self {
        Self {
            boundary_word_index: Some(index),
            truncated_text: words[index].text.clone(),
            overflowed_single_word: true,
            placement: EllipsisPlacement::Overlay {
                top: 0.0,
                right: 0.0,
            },
            retained: index..index + 1,
            hidden: (0..words.len()).filter(|&i| i != index).collect(),
        }
    }

    /// Texts of the words that stay visible.
    pub fn visible_words<'a>(&self, words: &'a [Word]) -> impl Iterator<Item = &'a str> + 'a {
        words[self.retained.clone()].iter().map(|word| word.text.as_str())
    }
}

/// Find the cut point for words that overflow `max_height`.
///
/// Callers are expected to invoke this only once overflow is known; a scan
/// that never crosses the budget yields [`TruncateError::NoBoundary`].
pub fn find_boundary(
    words: &[Word],
    container: &Container,
    max_height: f32,
    ellipsis_width: f32,
) -> Result<TruncationResult> {
    if words.is_empty() {
        return Err(TruncateError::NoContent);
    }
    if !(container.width > 0.0) {
        return Err(TruncateError::InvalidContainer(container.width));
    }
    if !(max_height > 0.0) {
        return Err(TruncateError::InvalidBudget(max_height));
    }

    let ellipsis_width = ellipsis_width.ceil();
    let mut last_word: Option<(usize, &Word)> = None;
    let mut space_width: Option<f32> = None;

    for (position, word) in words.iter().enumerate() {
        if word.bbox.width > container.width {
            log::warn!(
                "word {:?} is {}px wide in a {}px container; pinning ellipsis over it",
                word.text,
                word.bbox.width,
                container.width
            );
            return Ok(TruncationResult::overflowed(words, position));
        }

        if space_width.is_none() {
            if let Some((_, last)) = last_word {
                if last.same_line(word) {
                    // Sampled from the first same-line pair only.
                    space_width = Some((word.bbox.left - last.bbox.width).ceil());
                }
            }
        }

        let Some((last_position, last)) = last_word else {
            last_word = Some((position, word));
            continue;
        };

        if word.bbox.bottom() > max_height {
            let left_pos = last.bbox.left.ceil() + last.bbox.width + space_width.unwrap_or(0.0);
            let before = if container.width - left_pos > ellipsis_width {
                position
            } else {
                last_position
            };
            log::debug!(
                "height budget {} crossed at word {} ({:?}); ellipsis at {} of {}px, cut before word {}",
                max_height,
                position,
                word.text,
                left_pos,
                container.width,
                before
            );
            return Ok(TruncationResult::inline(words, before));
        }

        last_word = Some((position, word));
    }

    Err(TruncateError::NoBoundary)
}

fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
