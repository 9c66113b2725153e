use crate::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::warn;

/// A named list of cleaning steps, usually kept in a TOML file:
///
/// ```toml
/// steps = ["html", "inline_whitespace", "underscores"]
/// ```
///
/// Step names are checked when the pipeline is validated or run, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CleanerConfig {
    #[serde(default)]
    pub steps: Vec<String>,
}

impl CleanerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CleanerConfig =
            toml::from_str(content).context("Failed to parse cleaner config TOML")?;
        if config.steps.is_empty() {
            warn!("cleaner config lists no steps; text will pass through unchanged");
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cleaner config: {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}
