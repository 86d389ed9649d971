//! Immutable snapshot of everything one truncation pass measures.

use crate::error::{Result, TruncateError};
use crate::probe::{LayoutProbe, Word, collect_words};
use crate::render::{DEFAULT_ELLIPSIS, tokenize};
use crate::restore::AuxiliaryFields;

/// How much vertical space the text may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightBudget {
    /// A number of lines, multiplied by the measured line height.
    Lines(u32),
    /// An explicit height in layout pixels.
    Pixels(f32),
}

impl Default for HeightBudget {
    fn default() -> Self {
        Self::Lines(1)
    }
}

impl HeightBudget {
    /// Pick the budget from optional settings. An explicit height wins over a
    /// line count; with neither, one line is allowed.
    pub fn from_options(max_lines: Option<u32>, max_height: Option<f32>) -> Self {
        match (max_height, max_lines) {
            (Some(height), _) => Self::Pixels(height),
            (None, Some(lines)) => Self::Lines(lines),
            (None, None) => Self::default(),
        }
    }

    /// Resolve to pixels for the given line height.
    pub fn resolve(&self, line_height: f32) -> f32 {
        match *self {
            Self::Lines(lines) => line_height * lines as f32,
            Self::Pixels(height) => height,
        }
    }
}

/// Options recognized by the truncation entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncateOptions {
    pub budget: HeightBudget,
    /// Region of the container holding the text; `None` means the container itself.
    pub text_selector: Option<String>,
    /// Fields that receive the untruncated text.
    pub attributes: AuxiliaryFields,
    /// Marker text inserted at the cut point.
    pub ellipsis: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            budget: HeightBudget::default(),
            text_selector: None,
            attributes: AuxiliaryFields::default(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

/// Container measurements taken before any mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f32,
    /// Natural height of the rendered content.
    pub height: f32,
    pub line_height: f32,
    pub max_height: f32,
}

impl Container {
    pub fn new(width: f32, height: f32, line_height: f32, max_height: f32) -> Self {
        Self {
            width,
            height,
            line_height,
            max_height,
        }
    }
}

/// Measured inputs for one pass. Built once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncationRequest {
    original_text: String,
    words: Vec<Word>,
    container: Container,
    ellipsis: String,
    ellipsis_width: f32,
}

impl TruncationRequest {
    /// Snapshot the host's layout of `original_text`.
    ///
    /// The host must already have rendered the tokens of `original_text`
    /// (see [`tokenize`]) followed by the ellipsis marker.
    pub fn measure<P: LayoutProbe + ?Sized>(
        probe: &P,
        original_text: &str,
        options: &TruncateOptions,
    ) -> Result<Self> {
        let original_text = original_text.trim();
        let tokens = tokenize(original_text);
        let words = collect_words(probe, &tokens)?;

        let line_height = probe.line_height()?;
        let size = probe.measure_container();
        if !(size.width > 0.0) {
            return Err(TruncateError::InvalidContainer(size.width));
        }

        let max_height = options.budget.resolve(line_height);
        if !(max_height > 0.0) {
            return Err(TruncateError::InvalidBudget(max_height));
        }

        log::trace!(
            "measured {} words: width={} height={} line_height={} max_height={}",
            words.len(),
            size.width,
            size.height,
            line_height,
            max_height
        );

        Ok(Self {
            original_text: original_text.to_string(),
            words,
            container: Container::new(size.width, size.height, line_height, max_height),
            ellipsis: options.ellipsis.clone(),
            ellipsis_width: probe.measure_ellipsis(),
        })
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    pub fn ellipsis_width(&self) -> f32 {
        self.ellipsis_width
    }

    /// Whether the rendered content overflows the budget.
    ///
    /// The marker token is part of the render, so the content height alone can
    /// exceed the budget while every word still fits; that case needs no cut
    /// unless some word is wider than the container.
    pub fn needs_truncation(&self) -> bool {
        let Container {
            width, height, max_height, ..
        } = self.container;
        height > max_height
            && self
                .words
                .iter()
                .any(|word| word.bbox.bottom() > max_height || word.bbox.width > width)
    }
}
