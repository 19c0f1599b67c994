//! Configuration Module - TOML-based Solver Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! Rounding and anchor policy live here so the domain layer
//! takes them as plain arguments.

pub mod loader;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Top-level application configuration.
///
/// Every section is optional in the file; missing sections take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
  /// Application identity.
  #[serde(default)]
  pub app: AppSection,
  /// Stake solver parameters.
  #[serde(default)]
  pub solver: SolverConfig,
  /// Logging output.
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// Application identity configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppSection {
  /// Human-readable name, attached to log output.
  #[serde(default = "default_name")]
  pub name: String,
}

/// Stake solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolverConfig {
  /// Increment non-anchor stakes are rounded to. Zero disables rounding.
  #[serde(default = "default_rounding_step")]
  pub rounding_step: Decimal,
  /// Reject invalid house sets instead of degrading to zero stakes.
  #[serde(default = "default_true")]
  pub strict: bool,
  /// Refuse to default the anchor to the first house.
  #[serde(default)]
  pub require_explicit_anchor: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Emit JSON lines instead of human-readable output.
  #[serde(default)]
  pub json: bool,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
    }
  }
}

impl Default for SolverConfig {
  fn default() -> Self {
    Self {
      rounding_step: default_rounding_step(),
      strict: true,
      require_explicit_anchor: false,
    }
  }
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "dutching-arb".to_string()
}

fn default_rounding_step() -> Decimal {
  dec!(0.01)
}

const fn default_true() -> bool {
  true
}

fn default_log_level() -> String {
  "info".to_string()
}
