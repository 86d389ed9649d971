use elide_text::{
    FlowLayout, FlowMetrics, HeightBudget, LayoutProbe, TextElement, TruncateOptions,
    truncate_element,
};

fn main() {
    let text = "The quick brown fox jumps over the lazy dog while the cat watches from the fence";
    let metrics = FlowMetrics::default();
    let width = 160.0;

    println!("=== Truncation Demo ===\n");
    println!("Text: {:?}", text);
    println!("Container width: {}px, line height: {}px\n", width, metrics.line_height);

    let layout = FlowLayout::render(text, "…", width, metrics);
    println!("--- Layout ---");
    for (i, line) in layout.lines().iter().enumerate() {
        println!(
            "  line {} at y={:>4}: words {:?}, width {}",
            i, line.y_offset, line.word_range, line.width
        );
    }
    println!("  content height: {}\n", layout.measure_container().height);

    println!("--- Passes ---");
    for max_lines in 1..=4 {
        let options = TruncateOptions {
            budget: HeightBudget::Lines(max_lines),
            attributes: ["title"].into(),
            ..TruncateOptions::default()
        };
        let mut element = TextElement::new(text);
        match truncate_element(&mut element, width, metrics, &options) {
            Ok(outcome) => println!(
                "  {} line(s): {:?} (truncated: {})",
                max_lines,
                outcome.visible_text(),
                outcome.is_truncated()
            ),
            Err(e) => println!("  {} line(s): error: {}", max_lines, e),
        }
    }
}
