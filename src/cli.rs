use std::path::PathBuf;

use clap::Parser;
use elide_config::{Attributes, ElideConfig};

#[derive(Parser)]
#[command(
    name = "elide",
    about = "Find where text must be cut to fit a box and mark it with an ellipsis",
    version
)]
pub struct Cli {
    /// Text to truncate (reads --input or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Named region of the container, repeatable
    #[arg(long = "region", value_name = "NAME=TEXT", value_parser = parse_region)]
    pub regions: Vec<(String, String)>,

    /// Configuration file (defaults to ./elide.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub truncate: TruncateArgs,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Truncation options; each overrides the configuration file.
#[derive(clap::Args)]
#[command(next_help_heading = "Truncation")]
pub struct TruncateArgs {
    /// Maximum number of visible lines
    #[arg(short = 'l', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_lines: Option<u32>,

    /// Height budget in pixels, instead of a line count
    #[arg(long, value_name = "PX", conflicts_with = "max_lines")]
    pub max_height: Option<f32>,

    /// Region holding the text to truncate
    #[arg(short, long, value_name = "NAME")]
    pub selector: Option<String>,

    /// Field that receives the original text, repeatable
    #[arg(short = 'a', long = "attribute", value_name = "NAME")]
    pub attributes: Vec<String>,

    /// Marker inserted at the cut point
    #[arg(long, value_name = "TEXT")]
    pub ellipsis: Option<String>,
}

/// Metrics of the reference layout.
#[derive(clap::Args)]
#[command(next_help_heading = "Layout")]
pub struct LayoutArgs {
    /// Container width in pixels
    #[arg(short, long, value_name = "PX")]
    pub width: Option<f32>,

    /// Advance of one character in pixels
    #[arg(long, value_name = "PX")]
    pub advance: Option<f32>,

    /// Gap between words in pixels
    #[arg(long, value_name = "PX")]
    pub space_width: Option<f32>,

    /// Line height in pixels
    #[arg(long, value_name = "PX")]
    pub line_height: Option<f32>,
}

impl Cli {
    /// Overlay command-line flags on a loaded configuration.
    pub fn apply_to(&self, config: &mut ElideConfig) {
        let truncate = &mut config.truncate;
        if let Some(lines) = self.truncate.max_lines {
            truncate.max_lines = Some(lines);
            truncate.max_height = None;
        }
        if let Some(height) = self.truncate.max_height {
            truncate.max_height = Some(height);
        }
        if let Some(selector) = &self.truncate.selector {
            truncate.text_selector = Some(selector.clone());
        }
        if !self.truncate.attributes.is_empty() {
            truncate.attributes = Attributes::Many(self.truncate.attributes.clone());
        }
        if let Some(ellipsis) = &self.truncate.ellipsis {
            truncate.ellipsis = ellipsis.clone();
        }

        let layout = &mut config.layout;
        if let Some(width) = self.layout.width {
            layout.width = width;
        }
        if let Some(advance) = self.layout.advance {
            layout.advance = advance;
        }
        if let Some(space) = self.layout.space_width {
            layout.space_width = space;
        }
        if let Some(line_height) = self.layout.line_height {
            layout.line_height = line_height;
        }
    }
}

fn parse_region(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, text)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("expected NAME=TEXT, got {arg:?}")),
    }
}
