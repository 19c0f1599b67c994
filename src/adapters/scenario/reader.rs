//! Stream Scenario Source - Scenarios From Any Reader
//!
//! Buffers a whole document from a `Read` (stdin in the CLI) at
//! construction, so loading is repeatable and needs no `&mut`.

use std::io::Read;

use anyhow::{Context, Result};

use super::file::ScenarioFormat;
use crate::ports::scenario_source::{Scenario, ScenarioSource};

/// Scenario decoded from an in-memory buffer.
#[derive(Debug, Clone)]
pub struct ReaderScenarioSource {
    content: String,
    format: ScenarioFormat,
    label: String,
}

impl ReaderScenarioSource {
    /// Read everything from `reader` up front.
    ///
    /// # Errors
    /// Fails if the stream cannot be read or is not UTF-8.
    pub fn from_reader(mut reader: impl Read, format: ScenarioFormat, label: &str) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read scenario from {label}"))?;

        Ok(Self {
            content,
            format,
            label: label.to_string(),
        })
    }
}

impl ScenarioSource for ReaderScenarioSource {
    fn load_scenario(&self) -> Result<Scenario> {
        self.format
            .decode(&self.content)
            .with_context(|| format!("Invalid scenario from {}", self.label))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reads_json_stream() {
        let input = br#"{"name": "stdin", "houses": [{"odd": 2.5, "stake": 40, "is_fixed": true}]}"#;
        let source =
            ReaderScenarioSource::from_reader(&input[..], ScenarioFormat::Json, "stdin").unwrap();

        let scenario = source.load_scenario().unwrap();
        assert_eq!(scenario.name.as_deref(), Some("stdin"));
        assert_eq!(scenario.houses[0].stake, dec!(40));
        assert_eq!(source.describe(), "stdin");
        // Buffered, so a second load sees the same document.
        assert_eq!(source.load_scenario().unwrap(), scenario);
    }

    #[test]
    fn test_bad_stream_reports_label() {
        let source =
            ReaderScenarioSource::from_reader(&b"not json"[..], ScenarioFormat::Json, "pipe").unwrap();
        let err = source.load_scenario().unwrap_err();
        assert!(err.to_string().contains("pipe"), "{err}");
    }
}
