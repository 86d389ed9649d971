use core::ops::Range;

/// A single line of inline word boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    /// Word indices placed on this line, in reading order.
    pub word_range: Range<usize>,
    /// Visual width of the line in pixels, from the first word's left edge
    /// to the last word's right edge.
    pub width: f32,
    /// Total height of the line box in pixels.
    pub height: f32,
    /// Y position of line box top (relative to the container) in pixels.
    pub y_offset: f32,
}

impl LineBox {
    /// Get line box bottom Y position.
    pub fn bottom_y(&self) -> f32 {
        self.y_offset + self.height
    }

    /// Number of words on this line.
    pub fn word_count(&self) -> usize {
        self.word_range.len()
    }

    /// Check if a word index is placed on this line.
    pub fn contains_word(&self, index: usize) -> bool {
        self.word_range.contains(&index)
    }
}
