//! Layout queries supplied by the host renderer.
//!
//! The probe is a pure accessor: it reports where the host placed each word
//! token and how large the container currently is. It must be queried only
//! after the text has been split into tokens and rendered, so that positions
//! reflect the actual wrapping.

use crate::error::{Result, TruncateError};

/// Axis-aligned box of a rendered token, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Distance from the container top in pixels.
    pub top: f32,
    /// Distance from the container left edge in pixels.
    pub left: f32,
    /// Rendered width in pixels.
    pub width: f32,
    /// Rendered height in pixels.
    pub height: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Width and height of a box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One whitespace-delimited token of the source text with its measured box.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Position in reading order.
    pub index: usize,
    /// Token text.
    pub text: String,
    /// Box reported by the layout host.
    pub bbox: BoundingBox,
}

impl Word {
    pub fn new(index: usize, text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            index,
            text: text.into(),
            bbox,
        }
    }

    /// Words sharing the same top offset belong to the same line box.
    pub fn same_line(&self, other: &Word) -> bool {
        self.bbox.top == other.bbox.top
    }
}

/// Read access to the host's rendering state.
pub trait LayoutProbe {
    /// Number of rendered word tokens (the ellipsis marker excluded).
    fn word_count(&self) -> usize;

    /// Bounding box of the word token at `index`.
    fn measure(&self, index: usize) -> Option<BoundingBox>;

    /// Current container dimensions; `height` is the natural content height.
    fn measure_container(&self) -> Size;

    /// Rendered width of the ellipsis marker token.
    fn measure_ellipsis(&self) -> f32;

    /// Line height, taken from the first word's box.
    fn line_height(&self) -> Result<f32> {
        if self.word_count() == 0 {
            return Err(TruncateError::NoContent);
        }
        self.measure(0)
            .map(|bbox| bbox.height)
            .ok_or(TruncateError::MissingMeasurement(0))
    }
}

/// Pair each token with the box the host measured for it.
pub fn collect_words<P: LayoutProbe + ?Sized>(probe: &P, tokens: &[&str]) -> Result<Vec<Word>> {
    if tokens.is_empty() || probe.word_count() == 0 {
        return Err(TruncateError::NoContent);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, text)| {
            probe
                .measure(index)
                .map(|bbox| Word::new(index, *text, bbox))
                .ok_or(TruncateError::MissingMeasurement(index))
        })
        .collect()
}
