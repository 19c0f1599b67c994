//! Scenario Source Port - House Configuration Input Interface
//!
//! Defines where a set of houses to solve comes from. The use case
//! only sees this trait; files, stdin and test doubles implement it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::house::HouseInput;

/// One event's worth of wagers to dutch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
  /// Optional label carried through to the report.
  #[serde(default)]
  pub name: Option<String>,
  /// Overrides the configured rounding step for this scenario.
  #[serde(default)]
  pub rounding_step: Option<Decimal>,
  /// One house per mutually exclusive outcome.
  pub houses: Vec<HouseInput>,
}

impl Scenario {
  /// An unnamed scenario using the configured rounding step.
  pub const fn new(houses: Vec<HouseInput>) -> Self {
    Self {
      name: None,
      rounding_step: None,
      houses,
    }
  }
}

/// Trait for scenario providers.
pub trait ScenarioSource {
  /// Load the scenario to solve.
  ///
  /// # Errors
  /// Returns an error if the scenario cannot be read or decoded.
  fn load_scenario(&self) -> anyhow::Result<Scenario>;

  /// Human-readable origin for log output.
  fn describe(&self) -> String;
}
