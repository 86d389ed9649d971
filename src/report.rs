use std::collections::BTreeMap;

use elide_text::{EllipsisPlacement, Outcome, TextElement};
use serde::Serialize;

/// JSON view of one pass.
#[derive(Debug, Serialize)]
pub struct Report {
    pub truncated: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_word_index: Option<usize>,
    pub overflowed_single_word: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub hidden_words: Vec<usize>,
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
}

/// Serializable copy of [`EllipsisPlacement`]; `elide-text` stays free of serde.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    Inline { before: usize },
    Overlay { top: f32, right: f32 },
}

impl From<EllipsisPlacement> for Marker {
    fn from(placement: EllipsisPlacement) -> Self {
        match placement {
            EllipsisPlacement::Inline { before } => Self::Inline { before },
            EllipsisPlacement::Overlay { top, right } => Self::Overlay { top, right },
        }
    }
}

impl Report {
    /// Summarize `outcome` and the state it left on `target`.
    pub fn new(outcome: &Outcome, target: &TextElement) -> Self {
        let result = outcome.result();
        Self {
            truncated: outcome.is_truncated(),
            text: outcome.visible_text().to_string(),
            boundary_word_index: result.and_then(|r| r.boundary_word_index),
            overflowed_single_word: result.is_some_and(|r| r.overflowed_single_word),
            marker: target.marker().map(Marker::from),
            hidden_words: target.hidden_words().collect(),
            fields: target.fields().clone(),
            max_height: target.max_height(),
        }
    }
}
