//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    rounding_step = %config.solver.rounding_step,
    strict = config.solver.strict,
    explicit_anchor = config.solver.require_explicit_anchor,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load the config at `path` if it exists, defaults otherwise.
///
/// Used for the implicit `config.toml` lookup; a file that exists
/// but fails to parse or validate is still an error.
///
/// # Errors
/// Propagates read, parse and validation failures of an existing file.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if path.exists() {
    load_config(path)
  } else {
    debug!(path = %path.display(), "No config file, using defaults");
    Ok(AppConfig::default())
  }
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Returns an error on malformed TOML or invalid values.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).context("Failed to parse config TOML")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-negative rounding step
/// - Known log level
/// - Non-empty application name
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );

  anyhow::ensure!(
    config.solver.rounding_step >= Decimal::ZERO,
    "solver.rounding_step must not be negative, got {}",
    config.solver.rounding_step
  );

  let level = config.logging.level.to_ascii_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "logging.level must be one of {:?}, got {:?}",
    LOG_LEVELS,
    config.logging.level
  );

  Ok(())
}
