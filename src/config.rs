use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Site layout configuration, loaded from a TOML file. Every field has a
/// default so a config file is optional, and partial files fill in the rest.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of Markdown sources.
    pub content_dir: PathBuf,
    /// Directory of static assets copied into the output verbatim.
    pub static_dir: PathBuf,
    /// Directory the generated site is written to. Deleted on each build.
    pub output_dir: PathBuf,
    /// HTML template containing the `{{ Title }}` and `{{ Content }}` tokens.
    pub template: PathBuf,
    /// Prefix substituted into absolute `href`/`src` values.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
