use anyhow::Result;
use elide_text::{
    EllipsisPlacement, FlowLayout, FlowMetrics, HeightBudget, Outcome, TextElement, TextTarget,
    TruncateError, TruncateOptions, TruncationRequest, run_pass, truncate, truncate_element,
};

fn metrics() -> FlowMetrics {
    FlowMetrics {
        advance: 10.0,
        space_width: 10.0,
        line_height: 18.0,
    }
}

fn lines(max_lines: u32) -> TruncateOptions {
    TruncateOptions {
        budget: HeightBudget::Lines(max_lines),
        ..TruncateOptions::default()
    }
}

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn cuts_single_line_after_last_fitting_word() -> Result<()> {
    let mut element = TextElement::new("The quick brown fox jumps");
    let outcome = truncate_element(&mut element, 220.0, metrics(), &lines(1))?;

    let result = outcome.result().expect("text should be truncated");
    assert_eq!(result.boundary_word_index, Some(3));
    assert_eq!(result.placement, EllipsisPlacement::Inline { before: 4 });
    assert_eq!(outcome.visible_text(), "The quick brown fox…");
    assert_eq!(element.text(), "The quick brown fox…");
    assert_eq!(element.max_height(), Some(18.0));
    assert_eq!(
        element.marker(),
        Some(EllipsisPlacement::Inline { before: 4 })
    );
    Ok(())
}

#[test]
fn drops_last_word_when_marker_would_overflow() -> Result<()> {
    let mut element = TextElement::new(PANGRAM);
    let outcome = truncate_element(&mut element, 100.0, metrics(), &lines(2))?;

    // After "fox" and its trailing gap the marker would start at the right edge.
    assert_eq!(outcome.visible_text(), "The quick brown…");
    assert_eq!(element.max_height(), Some(36.0));
    Ok(())
}

#[test]
fn explicit_pixel_budget() -> Result<()> {
    let options = TruncateOptions {
        budget: HeightBudget::Pixels(54.0),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new(PANGRAM);
    let outcome = truncate_element(&mut element, 100.0, metrics(), &options)?;

    assert_eq!(outcome.visible_text(), "The quick brown fox jumps…");
    assert_eq!(element.max_height(), Some(54.0));
    Ok(())
}

#[test]
fn overlong_word_pins_marker_over_container() -> Result<()> {
    let mut element = TextElement::new("Supercalifragilisticexpialidocious is long");
    let outcome = truncate_element(&mut element, 200.0, metrics(), &lines(1))?;

    let result = outcome.result().expect("text should be truncated");
    assert!(result.overflowed_single_word);
    assert_eq!(result.hidden, vec![1, 2]);
    assert_eq!(
        element.marker(),
        Some(EllipsisPlacement::Overlay {
            top: 0.0,
            right: 0.0
        })
    );
    assert_eq!(element.hidden_words().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(outcome.visible_text(), "Supercalifragilisticexpialidocious…");
    Ok(())
}

#[test]
fn lone_overlong_word_gets_overlay_marker() -> Result<()> {
    let mut element = TextElement::new("Supercalifragilisticexpialidocious");
    let outcome = truncate_element(&mut element, 200.0, metrics(), &lines(1))?;

    let result = outcome.result().expect("text should be truncated");
    assert!(result.overflowed_single_word);
    assert!(result.hidden.is_empty());
    assert_eq!(
        element.marker(),
        Some(EllipsisPlacement::Overlay {
            top: 0.0,
            right: 0.0
        })
    );
    assert_eq!(outcome.visible_text(), "Supercalifragilisticexpialidocious…");
    Ok(())
}

#[test]
fn rerun_on_same_element_starts_from_original_text() -> Result<()> {
    let options = TruncateOptions {
        attributes: "title".into(),
        ..lines(2)
    };
    let mut element = TextElement::new(PANGRAM);

    let first = truncate_element(&mut element, 100.0, metrics(), &options)?;
    let second = truncate_element(&mut element, 100.0, metrics(), &options)?;
    assert_eq!(first, second);
    assert_eq!(second.visible_text(), "The quick brown…");
    assert_eq!(element.original_text(), PANGRAM);

    let wider = truncate_element(&mut element, 1000.0, metrics(), &options)?;
    assert!(!wider.is_truncated());
    assert_eq!(wider.visible_text(), PANGRAM);
    assert_eq!(element.text(), PANGRAM);
    assert!(element.marker().is_none());
    Ok(())
}

#[test]
fn rerun_restores_selected_region() -> Result<()> {
    let options = TruncateOptions {
        text_selector: Some("body".to_string()),
        ..lines(1)
    };
    let mut card = TextElement::new("").with_region(TextElement::named("body", PANGRAM));

    truncate_element(&mut card, 100.0, metrics(), &options)?;
    assert_eq!(card.regions()[0].text(), "The…");

    let wider = truncate_element(&mut card, 1000.0, metrics(), &options)?;
    assert!(!wider.is_truncated());
    assert_eq!(card.regions()[0].text(), PANGRAM);
    Ok(())
}

#[test]
fn original_text_lands_in_every_attribute() -> Result<()> {
    let original = "Hello world, this is long";
    let options = TruncateOptions {
        attributes: ["title", "data-text"].into(),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new(original);
    let outcome = truncate_element(&mut element, 120.0, metrics(), &options)?;

    assert!(outcome.is_truncated());
    assert_eq!(element.text(), "Hello…");
    assert_eq!(element.field("title"), Some(original));
    assert_eq!(element.field("data-text"), Some(original));
    Ok(())
}

#[test]
fn single_attribute_name() -> Result<()> {
    let options = TruncateOptions {
        attributes: "title".into(),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new(PANGRAM);
    truncate_element(&mut element, 100.0, metrics(), &options)?;

    assert_eq!(element.fields().len(), 1);
    assert_eq!(element.field("title"), Some(PANGRAM));
    Ok(())
}

#[test]
fn fitting_text_is_left_alone() -> Result<()> {
    let options = TruncateOptions {
        attributes: "title".into(),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new("  Short text ");
    let outcome = truncate_element(&mut element, 200.0, metrics(), &options)?;

    assert_eq!(
        outcome,
        Outcome::Fits {
            text: "Short text".to_string()
        }
    );
    assert_eq!(element.text(), "  Short text ");
    assert!(element.fields().is_empty());
    assert!(element.marker().is_none());
    assert_eq!(element.max_height(), Some(18.0));
    Ok(())
}

#[test]
fn marker_wrapping_alone_is_not_an_overflow() -> Result<()> {
    // The words fill the line exactly; only the marker wraps.
    let mut element = TextElement::new("abcde");
    let outcome = truncate_element(&mut element, 50.0, metrics(), &lines(1))?;
    assert!(!outcome.is_truncated());
    Ok(())
}

#[test]
fn lone_word_taller_than_budget_is_kept() -> Result<()> {
    let options = TruncateOptions {
        budget: HeightBudget::Pixels(10.0),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new("word");
    let outcome = truncate_element(&mut element, 100.0, metrics(), &options)?;
    assert_eq!(outcome.visible_text(), "word");
    Ok(())
}

#[test]
fn selector_truncates_only_the_matching_region() -> Result<()> {
    let options = TruncateOptions {
        text_selector: Some("body".to_string()),
        attributes: "title".into(),
        ..TruncateOptions::default()
    };
    let mut card = TextElement::new("")
        .with_region(TextElement::named("heading", "A heading that is long enough"))
        .with_region(TextElement::named("body", PANGRAM));
    truncate_element(&mut card, 100.0, metrics(), &options)?;

    let heading = &card.regions()[0];
    let body = &card.regions()[1];
    assert_eq!(heading.text(), "A heading that is long enough");
    assert!(heading.fields().is_empty());
    assert_eq!(body.text(), "The…");
    assert_eq!(body.field("title"), Some(PANGRAM));
    Ok(())
}

#[test]
fn missing_region_is_reported() {
    let options = TruncateOptions {
        text_selector: Some("footer".to_string()),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new(PANGRAM);
    let err = truncate_element(&mut element, 100.0, metrics(), &options).unwrap_err();
    assert_eq!(err, TruncateError::SelectorNotFound("footer".to_string()));
}

#[test]
fn empty_text_is_no_content() {
    let mut element = TextElement::new("   ");
    let err = truncate_element(&mut element, 100.0, metrics(), &lines(1)).unwrap_err();
    assert_eq!(err, TruncateError::NoContent);
}

#[test]
fn custom_marker_text() -> Result<()> {
    let options = TruncateOptions {
        ellipsis: "...".to_string(),
        ..TruncateOptions::default()
    };
    let mut element = TextElement::new("The quick brown fox jumps");
    let outcome = truncate_element(&mut element, 240.0, metrics(), &options)?;

    // left_pos 200 leaves 40px, more than the 30px marker.
    assert_eq!(outcome.visible_text(), "The quick brown fox...");
    Ok(())
}

#[test]
fn repeated_passes_agree() -> Result<()> {
    let pristine = TextElement::new(PANGRAM);
    let options = TruncateOptions {
        attributes: ["title"].into(),
        ..lines(2)
    };

    let mut first = pristine.clone();
    let mut second = pristine.clone();
    let a = truncate_element(&mut first, 130.0, metrics(), &options)?;
    let b = truncate_element(&mut second, 130.0, metrics(), &options)?;

    assert_eq!(a, b);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn restored_text_splits_back_into_kept_words() -> Result<()> {
    let options = lines(2);
    let layout = FlowLayout::render(PANGRAM, &options.ellipsis, 130.0, metrics());
    let request = TruncationRequest::measure(&layout, PANGRAM, &options)?;

    let mut element = TextElement::new(PANGRAM);
    let outcome = truncate(&request, &mut element, &options.attributes)?;
    let result = outcome.result().expect("text should be truncated");

    let kept: Vec<_> = result.visible_words(request.words()).collect();
    let (before_marker, after_marker) = outcome
        .visible_text()
        .split_once(options.ellipsis.as_str())
        .expect("marker present");
    assert_eq!(before_marker.split_whitespace().collect::<Vec<_>>(), kept);
    assert!(after_marker.is_empty());
    Ok(())
}

#[test]
fn kept_words_stay_within_budget() -> Result<()> {
    for width in [90.0f32, 100.0, 130.0, 170.0, 250.0] {
        for max_lines in 1..=3 {
            let options = lines(max_lines);
            let layout = FlowLayout::render(PANGRAM, &options.ellipsis, width, metrics());
            let request = TruncationRequest::measure(&layout, PANGRAM, &options)?;
            let mut element = TextElement::new(PANGRAM);
            let outcome = truncate(&request, &mut element, &options.attributes)?;

            let Some(result) = outcome.result() else {
                continue;
            };
            let max_height = request.container().max_height;
            for word in &request.words()[result.retained.clone()] {
                assert!(
                    word.bbox.top < max_height,
                    "{:?} starts below the budget at width {}",
                    word.text,
                    width
                );
            }
        }
    }
    Ok(())
}

/// A host that records calls instead of storing an element.
#[derive(Default)]
struct RecordingTarget {
    calls: Vec<String>,
}

impl TextTarget for RecordingTarget {
    fn set_text(&mut self, text: &str) {
        self.calls.push(format!("text {text}"));
    }

    fn set_field(&mut self, name: &str, value: &str) {
        self.calls.push(format!("field {name}={value}"));
    }

    fn hide_word(&mut self, index: usize) {
        self.calls.push(format!("hide {index}"));
    }

    fn place_marker(&mut self, placement: EllipsisPlacement) {
        self.calls.push(format!("marker {placement:?}"));
    }

    fn set_max_height(&mut self, max_height: f32) {
        self.calls.push(format!("max-height {max_height}"));
    }
}

#[test]
fn write_back_order() -> Result<()> {
    let text = "Supercalifragilisticexpialidocious is long";
    let options = TruncateOptions {
        attributes: "title".into(),
        ..TruncateOptions::default()
    };
    let layout = FlowLayout::render(text, &options.ellipsis, 200.0, metrics());
    let mut target = RecordingTarget::default();
    run_pass(&layout, &mut target, text, &options)?;

    assert_eq!(
        target.calls,
        vec![
            "max-height 18".to_string(),
            "hide 1".to_string(),
            "hide 2".to_string(),
            "marker Overlay { top: 0.0, right: 0.0 }".to_string(),
            "text Supercalifragilisticexpialidocious…".to_string(),
            format!("field title={text}"),
        ]
    );
    Ok(())
}
