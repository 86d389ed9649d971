//! Collapse the marked-up render back to flat text and republish the
//! original text into auxiliary fields.

use crate::error::{Result, TruncateError};
use crate::target::TextTarget;

/// Identifiers of the fields that receive the untruncated text, such as a
/// tooltip (`title`) or a data attribute (`data-text`).
///
/// A single identifier converts into a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxiliaryFields(Vec<String>);

impl AuxiliaryFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AuxiliaryFields {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<Vec<String>> for AuxiliaryFields {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<&[&str]> for AuxiliaryFields {
    fn from(names: &[&str]) -> Self {
        names.iter().map(|name| name.to_string()).collect()
    }
}

impl<const N: usize> From<[&str; N]> for AuxiliaryFields {
    fn from(names: [&str; N]) -> Self {
        names.iter().map(|name| name.to_string()).collect()
    }
}

impl FromIterator<String> for AuxiliaryFields {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One field assignment produced by [`restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub name: String,
    pub value: String,
}

/// Flat truncated text plus the field assignments to publish with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restoration {
    /// Render prefix up to and including the marker.
    pub truncated_text: String,
    pub fields_written: Vec<FieldWrite>,
}

impl Restoration {
    /// Replace the target's word structure with the flat text and write
    /// every auxiliary field.
    pub fn apply<T: TextTarget + ?Sized>(&self, target: &mut T) {
        target.set_text(&self.truncated_text);
        for field in &self.fields_written {
            target.set_field(&field.name, &field.value);
        }
    }
}

/// Cut `rendered_text` just after the first `ellipsis` and pair every field
/// in `fields` with `original_text`.
pub fn restore(
    rendered_text: &str,
    ellipsis: &str,
    original_text: &str,
    fields: &AuxiliaryFields,
) -> Result<Restoration> {
    let position = (!ellipsis.is_empty())
        .then(|| rendered_text.find(ellipsis))
        .flatten()
        .ok_or_else(|| TruncateError::MarkerNotFound(ellipsis.to_string()))?;

    let truncated_text = rendered_text[..position + ellipsis.len()].to_string();
    let fields_written = fields
        .iter()
        .map(|name| FieldWrite {
            name: name.to_string(),
            value: original_text.to_string(),
        })
        .collect();

    Ok(Restoration {
        truncated_text,
        fields_written,
    })
}
