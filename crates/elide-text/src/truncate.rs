//! One truncation pass, from measured layout to written-back text.

use crate::error::{Result, TruncateError};
use crate::finder::{TruncationResult, find_boundary};
use crate::layout::{FlowLayout, FlowMetrics};
use crate::probe::LayoutProbe;
use crate::render::render_marked;
use crate::request::{TruncateOptions, TruncationRequest};
use crate::restore::{AuxiliaryFields, Restoration, restore};
use crate::target::{TextElement, TextTarget};

/// What a pass did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The content fits the budget; the text was left untouched.
    Fits { text: String },
    /// The text was cut and written back.
    Truncated {
        result: TruncationResult,
        restoration: Restoration,
    },
}

impl Outcome {
    /// Text the container shows after the pass.
    pub fn visible_text(&self) -> &str {
        match self {
            Self::Fits { text } => text,
            Self::Truncated { restoration, .. } => &restoration.truncated_text,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    pub fn result(&self) -> Option<&TruncationResult> {
        match self {
            Self::Fits { .. } => None,
            Self::Truncated { result, .. } => Some(result),
        }
    }
}

/// Measure the host's render of `original_text` and truncate it.
pub fn run_pass<P, T>(
    probe: &P,
    target: &mut T,
    original_text: &str,
    options: &TruncateOptions,
) -> Result<Outcome>
where
    P: LayoutProbe + ?Sized,
    T: TextTarget + ?Sized,
{
    let request = TruncationRequest::measure(probe, original_text, options)?;
    truncate(&request, target, &options.attributes)
}

/// Run the finder and restorer over an already measured request.
pub fn truncate<T: TextTarget + ?Sized>(
    request: &TruncationRequest,
    target: &mut T,
    attributes: &AuxiliaryFields,
) -> Result<Outcome> {
    let container = request.container();
    target.set_max_height(container.max_height);

    if !request.needs_truncation() {
        log::debug!(
            "content height {} within budget {}",
            container.height,
            container.max_height
        );
        return Ok(Outcome::Fits {
            text: request.original_text().to_string(),
        });
    }

    let result = match find_boundary(
        request.words(),
        container,
        container.max_height,
        request.ellipsis_width(),
    ) {
        Ok(result) => result,
        // Only a lone word reaches past the budget; there is nothing to cut between.
        Err(TruncateError::NoBoundary) => {
            log::debug!("no word boundary below budget {}", container.max_height);
            return Ok(Outcome::Fits {
                text: request.original_text().to_string(),
            });
        }
        Err(err) => return Err(err),
    };

    for &index in &result.hidden {
        target.hide_word(index);
    }
    target.place_marker(result.placement);

    let rendered = render_marked(request.words(), &result, request.ellipsis());
    let restoration = restore(
        &rendered,
        request.ellipsis(),
        request.original_text(),
        attributes,
    )?;
    restoration.apply(target);

    log::debug!(
        "truncated {} words to {:?}",
        request.words().len(),
        restoration.truncated_text
    );
    Ok(Outcome::Truncated {
        result,
        restoration,
    })
}

/// Truncate the text of `element`, or of the region picked by the text
/// selector, laid out by the reference [`FlowLayout`] in a box `width`
/// pixels wide.
///
/// The element is reset first, so running again after a resize starts from
/// the original text rather than from the previous cut.
pub fn truncate_element(
    element: &mut TextElement,
    width: f32,
    metrics: FlowMetrics,
    options: &TruncateOptions,
) -> Result<Outcome> {
    element.reset();
    let target = element.select(options.text_selector.as_deref())?;
    let text = target.text();
    let text = text.trim();

    let layout = FlowLayout::render(text, &options.ellipsis, width, metrics);
    run_pass(&layout, target, text, options)
}
