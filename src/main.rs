mod cli;
mod report;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use elide_config::{ElideConfig, TruncateConfig};
use elide_text::{FlowMetrics, HeightBudget, TextElement, TruncateOptions, truncate_element};

use crate::cli::Cli;
use crate::report::Report;

fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ElideConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ElideConfig::load_or_default(),
    };
    config.merge_with_env();
    cli.apply_to(&mut config);

    let mut element = TextElement::new(read_text(&cli)?);
    for (name, text) in &cli.regions {
        element.push_region(TextElement::named(name, text));
    }

    let options = options_from(&config.truncate);
    let metrics = FlowMetrics {
        advance: config.layout.advance,
        space_width: config.layout.space_width,
        line_height: config.layout.line_height,
    };
    log::debug!(
        "width={} metrics={:?} options={:?}",
        config.layout.width,
        metrics,
        options
    );

    let outcome = truncate_element(&mut element, config.layout.width, metrics, &options)
        .context("truncation pass failed")?;

    let target = element.select(options.text_selector.as_deref())?;
    if cli.json {
        let report = Report::new(&outcome, target);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", outcome.visible_text());
        for (name, value) in target.fields() {
            println!("{name}: {value}");
        }
    }
    Ok(())
}

fn read_text(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    if !cli.regions.is_empty() {
        return Ok(String::new());
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;
    Ok(text)
}

fn options_from(config: &TruncateConfig) -> TruncateOptions {
    TruncateOptions {
        budget: HeightBudget::from_options(config.max_lines, config.max_height),
        text_selector: config.text_selector.clone(),
        attributes: config.attributes.to_vec().into(),
        ellipsis: config.ellipsis.clone(),
    }
}
