//! elide configuration system
//!
//! Loads truncation options and reference layout metrics from `elide.toml`,
//! with environment variables taking precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ElideConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for elide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElideConfig {
    /// Truncation entry-point options
    pub truncate: TruncateConfig,
    /// Reference layout metrics
    pub layout: LayoutConfig,
}

/// Auxiliary fields that receive the untruncated text.
///
/// Accepts either a single name (`attributes = "title"`) or a list
/// (`attributes = ["title", "data-text"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attributes {
    One(String),
    Many(Vec<String>),
}

impl Default for Attributes {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Attributes {
    /// Field names as a list; a single name becomes a one-element list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name.clone()],
            Self::Many(names) => names.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(_) => false,
            Self::Many(names) => names.is_empty(),
        }
    }
}

/// Truncation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    /// Maximum number of visible lines (1 when neither this nor `max_height` is set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    /// Explicit height budget in layout pixels; takes precedence over `max_lines`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    /// Name of the region holding the text to truncate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_selector: Option<String>,
    /// Fields that receive the original text
    pub attributes: Attributes,
    /// Marker inserted at the cut point
    pub ellipsis: String,
}

/// Reference layout metrics, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Container width
    pub width: f32,
    /// Advance of one grapheme cluster
    pub advance: f32,
    /// Gap between words on one line
    pub space_width: f32,
    /// Line box height
    pub line_height: f32,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            max_lines: None,
            max_height: None,
            text_selector: None,
            attributes: Attributes::default(),
            ellipsis: "\u{2026}".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            advance: 8.0,
            space_width: 4.0,
            line_height: 18.0,
        }
    }
}

impl ElideConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (elide.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        match Self::load_from_file("elide.toml") {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(e) => {
                log::warn!("ignoring elide.toml: {}", e);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        // Truncation settings
        if let Some(lines) = parse_env::<u32>("ELIDE_MAX_LINES") {
            self.truncate.max_lines = Some(lines);
        }
        if let Some(height) = parse_env::<f32>("ELIDE_MAX_HEIGHT") {
            self.truncate.max_height = Some(height);
        }
        if let Ok(selector) = std::env::var("ELIDE_TEXT_SELECTOR") {
            self.truncate.text_selector = Some(selector);
        }
        if let Ok(val) = std::env::var("ELIDE_ATTRIBUTES") {
            self.truncate.attributes = Attributes::Many(
                val.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }
        if let Ok(ellipsis) = std::env::var("ELIDE_ELLIPSIS") {
            self.truncate.ellipsis = ellipsis;
        }

        // Layout settings
        if let Some(width) = parse_env::<f32>("ELIDE_WIDTH") {
            self.layout.width = width;
        }
        if let Some(advance) = parse_env::<f32>("ELIDE_ADVANCE") {
            self.layout.advance = advance;
        }
        if let Some(space) = parse_env::<f32>("ELIDE_SPACE_WIDTH") {
            self.layout.space_width = space;
        }
        if let Some(line_height) = parse_env::<f32>("ELIDE_LINE_HEIGHT") {
            self.layout.line_height = line_height;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from elide.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", key, val);
            None
        }
    }
}
