use unicode_segmentation::UnicodeSegmentation;

use crate::layout::LineBox;
use crate::probe::{BoundingBox, LayoutProbe, Size};
use crate::render::tokenize;

/// Metrics of the fixed-advance font used by [`FlowLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowMetrics {
    /// Horizontal advance of one grapheme cluster in pixels.
    pub advance: f32,
    /// Gap between two words on the same line in pixels.
    pub space_width: f32,
    /// Height of every line box in pixels.
    pub line_height: f32,
}

impl Default for FlowMetrics {
    fn default() -> Self {
        Self {
            advance: 8.0,
            space_width: 4.0,
            line_height: 18.0,
        }
    }
}

impl FlowMetrics {
    /// Width of `text` rendered on a single line.
    pub fn text_width(&self, text: &str) -> f32 {
        text.graphemes(true).count() as f32 * self.advance
    }
}

/// Inline layout of word tokens in a fixed-width box.
///
/// Each token is an unbreakable inline box. Tokens flow left to right and
/// wrap greedily when the next one would cross the right edge; a token wider
/// than the box sits alone on its line and overflows it. The ellipsis marker
/// is laid out as one more token directly after the last word, with no gap,
/// so the natural content height accounts for it.
#[derive(Debug, Clone)]
pub struct FlowLayout {
    width: f32,
    metrics: FlowMetrics,
    /// Word boxes in reading order.
    words: Vec<BoundingBox>,
    /// Box of the ellipsis marker.
    ellipsis: BoundingBox,
    /// Line boxes; the marker counts as token `words.len()`.
    lines: Vec<LineBox>,
}

impl FlowLayout {
    /// Lay out `tokens` and the trailing `ellipsis` marker in a box `width`
    /// pixels wide.
    pub fn new(tokens: &[&str], ellipsis: &str, width: f32, metrics: FlowMetrics) -> Self {
        let line_height = metrics.line_height;
        let marker_index = tokens.len();
        let widths = tokens
            .iter()
            .map(|token| metrics.text_width(token))
            .chain(core::iter::once(metrics.text_width(ellipsis)));

        let mut boxes = Vec::with_capacity(tokens.len() + 1);
        let mut lines = Vec::new();
        let mut line_start = 0usize;
        let mut right = 0.0f32;
        let mut y = 0.0f32;

        for (index, token_width) in widths.enumerate() {
            let gap = if index == line_start || index == marker_index {
                0.0
            } else {
                metrics.space_width
            };
            let mut left = right + gap;

            if index > line_start && left + token_width > width {
                lines.push(LineBox {
                    word_range: line_start..index,
                    width: right,
                    height: line_height,
                    y_offset: y,
                });
                y += line_height;
                line_start = index;
                left = 0.0;
            }

            boxes.push(BoundingBox::new(y, left, token_width, line_height));
            right = left + token_width;
        }

        lines.push(LineBox {
            word_range: line_start..marker_index + 1,
            width: right,
            height: line_height,
            y_offset: y,
        });

        let ellipsis = boxes.pop().unwrap_or_default();
        Self {
            width,
            metrics,
            words: boxes,
            ellipsis,
            lines,
        }
    }

    /// Tokenize `text` and lay it out.
    pub fn render(text: &str, ellipsis: &str, width: f32, metrics: FlowMetrics) -> Self {
        Self::new(&tokenize(text), ellipsis, width, metrics)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn metrics(&self) -> &FlowMetrics {
        &self.metrics
    }

    /// All line boxes, top to bottom.
    pub fn lines(&self) -> &[LineBox] {
        &self.lines
    }

    /// Box of the ellipsis marker.
    pub fn ellipsis_box(&self) -> BoundingBox {
        self.ellipsis
    }

    /// Natural height of the content, marker included.
    pub fn content_height(&self) -> f32 {
        self.lines.last().map(LineBox::bottom_y).unwrap_or(0.0)
    }
}

impl LayoutProbe for FlowLayout {
    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn measure(&self, index: usize) -> Option<BoundingBox> {
        self.words.get(index).copied()
    }

    fn measure_container(&self) -> Size {
        Size::new(self.width, self.content_height())
    }

    fn measure_ellipsis(&self) -> f32 {
        self.ellipsis.width
    }
}
