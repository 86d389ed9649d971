//! Write-back surface for the result of a pass.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, TruncateError};
use crate::finder::EllipsisPlacement;

/// Host capabilities a pass writes its result through.
pub trait TextTarget {
    /// Replace the rendered word structure with flat text.
    fn set_text(&mut self, text: &str);

    /// Write an auxiliary field (tooltip, data attribute, ...).
    fn set_field(&mut self, name: &str, value: &str);

    /// Hide the word token at `index`.
    fn hide_word(&mut self, index: usize);

    /// Position the ellipsis marker.
    fn place_marker(&mut self, placement: EllipsisPlacement);

    /// Clip the container to the resolved height budget.
    fn set_max_height(&mut self, max_height: f32);
}

/// A text container, optionally split into named regions.
///
/// Stands in for a host element: it stores the text, the written fields and
/// the visibility and marker state a pass leaves behind. The first write-back
/// keeps the original content aside so a later pass can start over from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextElement {
    name: String,
    text: String,
    regions: Vec<TextElement>,
    original: Option<Original>,
    fields: BTreeMap<String, String>,
    hidden: BTreeSet<usize>,
    marker: Option<EllipsisPlacement>,
    max_height: Option<f32>,
}

/// Content of an element before its first `set_text`.
#[derive(Debug, Clone, PartialEq)]
struct Original {
    text: String,
    regions: Vec<TextElement>,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A region that a text selector can locate by `name`.
    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new(text)
        }
    }

    pub fn with_region(mut self, region: TextElement) -> Self {
        self.regions.push(region);
        self
    }

    pub fn push_region(&mut self, region: TextElement) {
        self.regions.push(region);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own text followed by the text of every region, space separated.
    pub fn text(&self) -> String {
        joined(&self.text, &self.regions)
    }

    /// Text as it was before any pass wrote back to this element.
    pub fn original_text(&self) -> String {
        match &self.original {
            Some(original) => joined(&original.text, &original.regions),
            None => self.text(),
        }
    }

    /// Put back the original content and drop the hidden words and marker a
    /// previous pass left, here and in every region. Written fields and the
    /// max height stay.
    pub fn reset(&mut self) {
        if let Some(original) = self.original.take() {
            self.text = original.text;
            self.regions = original.regions;
        }
        self.hidden.clear();
        self.marker = None;
        for region in &mut self.regions {
            region.reset();
        }
    }

    pub fn regions(&self) -> &[TextElement] {
        &self.regions
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn hidden_words(&self) -> impl Iterator<Item = usize> + '_ {
        self.hidden.iter().copied()
    }

    pub fn marker(&self) -> Option<EllipsisPlacement> {
        self.marker
    }

    pub fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    /// Locate the element holding the text to truncate.
    ///
    /// An empty selector selects this element; otherwise the first region
    /// (depth first) whose name matches.
    pub fn select(&mut self, selector: Option<&str>) -> Result<&mut TextElement> {
        match selector.map(str::trim) {
            None | Some("") => Ok(self),
            Some(name) => self
                .find_region(name)
                .ok_or_else(|| TruncateError::SelectorNotFound(name.to_string())),
        }
    }

    fn find_region(&mut self, name: &str) -> Option<&mut TextElement> {
        self.regions.iter_mut().find_map(|region| {
            if region.name == name {
                Some(region)
            } else {
                region.find_region(name)
            }
        })
    }
}

fn joined(text: &str, regions: &[TextElement]) -> String {
    let mut parts = Vec::with_capacity(1 + regions.len());
    if !text.is_empty() {
        parts.push(text.to_string());
    }
    parts.extend(
        regions
            .iter()
            .map(TextElement::text)
            .filter(|text| !text.is_empty()),
    );
    parts.join(" ")
}

impl TextTarget for TextElement {
    fn set_text(&mut self, text: &str) {
        let previous = Original {
            text: std::mem::replace(&mut self.text, text.to_string()),
            regions: std::mem::take(&mut self.regions),
        };
        self.original.get_or_insert(previous);
    }

    fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    fn hide_word(&mut self, index: usize) {
        self.hidden.insert(index);
    }

    fn place_marker(&mut self, placement: EllipsisPlacement) {
        self.marker = Some(placement);
    }

    fn set_max_height(&mut self, max_height: f32) {
        self.max_height = Some(max_height);
    }
}
