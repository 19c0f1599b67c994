//! File Scenario Source - TOML or JSON Scenario Files
//!
//! Reads a scenario from disk. The format follows the file extension:
//! `.toml` for hand-written scenarios, `.json` for machine-generated
//! ones.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, instrument};

use crate::ports::scenario_source::{Scenario, ScenarioSource};

/// Encoding of a scenario document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    /// Fails for missing or unsupported extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(other) => bail!(
                "Unsupported scenario extension '.{other}' for {} (expected .toml or .json)",
                path.display()
            ),
            None => bail!(
                "Scenario file {} has no extension (expected .toml or .json)",
                path.display()
            ),
        }
    }

    /// Decodes a scenario document.
    ///
    /// # Errors
    /// Returns the underlying parser error with context.
    pub fn decode(self, content: &str) -> Result<Scenario> {
        match self {
            Self::Toml => toml::from_str(content).context("Failed to parse TOML scenario"),
            Self::Json => serde_json::from_str(content).context("Failed to parse JSON scenario"),
        }
    }
}

/// Scenario loaded from a file path on every call.
#[derive(Debug, Clone)]
pub struct FileScenarioSource {
    path: PathBuf,
    format: ScenarioFormat,
}

impl FileScenarioSource {
    /// Create a source for `path`, resolving the format up front.
    ///
    /// # Errors
    /// Fails when the extension is not `.toml` or `.json`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = ScenarioFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl ScenarioSource for FileScenarioSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_scenario(&self) -> Result<Scenario> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read scenario file: {}", self.path.display()))?;

        let scenario = self
            .format
            .decode(&content)
            .with_context(|| format!("Invalid scenario file: {}", self.path.display()))?;

        debug!(houses = scenario.houses.len(), "Scenario file loaded");
        Ok(scenario)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
