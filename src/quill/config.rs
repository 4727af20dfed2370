use crate::error::{QuillError, Result};
use crate::render::{RenderOptions, DEFAULT_LINE_WIDTH_SCALE, DEFAULT_MARGIN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_PREFIX: &str = "page_";

/// Configuration for quill, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuillConfig {
    /// Where converted pages are written. Defaults to a directory named after
    /// the notebook title.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Stroke width per unit of pen pressure
    #[serde(default = "default_line_width_scale")]
    pub line_width_scale: f64,

    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Output file names are `{prefix}{NNN}.svg`
    #[serde(default = "default_page_prefix")]
    pub page_file_prefix: String,
}

fn default_line_width_scale() -> f64 {
    DEFAULT_LINE_WIDTH_SCALE
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

fn default_page_prefix() -> String {
    DEFAULT_PAGE_PREFIX.to_string()
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            line_width_scale: DEFAULT_LINE_WIDTH_SCALE,
            margin: DEFAULT_MARGIN,
            page_file_prefix: DEFAULT_PAGE_PREFIX.to_string(),
        }
    }
}

/// Keys accepted by `quill config`.
pub const CONFIG_KEYS: [&str; 4] = ["output-dir", "line-width", "margin", "page-prefix"];

impl QuillConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuillError::Io)?;
        let config: QuillConfig =
            serde_json::from_str(&content).map_err(QuillError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuillError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuillError::Serialization)?;
        fs::write(config_path, content).map_err(QuillError::Io)?;
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            line_width_scale: self.line_width_scale,
            margin: self.margin,
        }
    }

    pub fn page_file_name(&self, number: usize) -> String {
        format!("{}{:03}.svg", self.page_file_prefix, number)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "output-dir" => Ok(self
                .output_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "line-width" => Ok(self.line_width_scale.to_string()),
            "margin" => Ok(self.margin.to_string()),
            "page-prefix" => Ok(self.page_file_prefix.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a key from its textual value. An empty `output-dir` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output-dir" => {
                self.output_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "line-width" => self.line_width_scale = parse_positive(key, value)?,
            "margin" => {
                self.margin = value
                    .parse()
                    .map_err(|_| QuillError::Config(format!("{} must be a number", key)))?
            }
            "page-prefix" => {
                if value.contains(['/', '\\']) {
                    return Err(QuillError::Config(
                        "page-prefix cannot contain path separators".to_string(),
                    ));
                }
                self.page_file_prefix = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(QuillError::Config(format!(
            "{} must be a positive number",
            key
        ))),
    }
}

fn unknown_key(key: &str) -> QuillError {
    QuillError::Config(format!(
        "unknown key `{}` (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
