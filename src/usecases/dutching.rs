//! Dutching Service - Scenario Evaluation Workflow
//!
//! The application use case around the pure solver:
//! 1. Loads a scenario through the `ScenarioSource` port
//! 2. Resolves the rounding step (caller override, then scenario, else config)
//! 3. Enforces the configured anchor / validation policy
//! 4. Runs the stake solver
//! 5. Logs the outcome and returns a serializable evaluation

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::SolverConfig;
use crate::domain::house::{ArbResult, HouseInput};
use crate::domain::{odds, partition, solver, validation};
use crate::ports::scenario_source::{Scenario, ScenarioSource};

/// Outcome of evaluating one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
  /// Scenario label, if any.
  pub scenario_name: Option<String>,
  /// Rounding step actually applied.
  pub rounding_step: Decimal,
  /// Index of the anchor house, `None` for an empty scenario.
  pub anchor_index: Option<usize>,
  /// Σ 100 / effective odd across priced houses.
  pub book_percentage: Decimal,
  /// Solver output.
  pub result: ArbResult,
}

/// Use case evaluating scenarios under a solver configuration.
#[derive(Debug, Clone)]
pub struct DutchingService {
  config: SolverConfig,
  rounding_override: Option<Decimal>,
}

impl DutchingService {
  /// Create a service with the given solver settings.
  pub const fn new(config: SolverConfig) -> Self {
    Self {
      config,
      rounding_override: None,
    }
  }

  /// Rounding step that wins over both the scenario and the config.
  #[must_use]
  pub const fn with_rounding_override(mut self, step: Option<Decimal>) -> Self {
    self.rounding_override = step;
    self
  }

  /// Load a scenario from `source` and evaluate it.
  ///
  /// # Errors
  /// Fails when the scenario cannot be loaded or, in strict mode,
  /// when the houses violate a precondition (see
  /// [`validation::validate_houses`]).
  #[instrument(skip(self, source), fields(source = %source.describe()))]
  pub fn evaluate(&self, source: &dyn ScenarioSource) -> Result<Evaluation> {
    let scenario = source
      .load_scenario()
      .with_context(|| format!("Failed to load scenario from {}", source.describe()))?;

    self.evaluate_scenario(scenario)
  }

  /// Evaluate an already loaded scenario.
  ///
  /// # Errors
  /// In strict mode, returns the violated precondition.
  pub fn evaluate_scenario(&self, scenario: Scenario) -> Result<Evaluation> {
    let rounding_step = self
      .rounding_override
      .or(scenario.rounding_step)
      .unwrap_or(self.config.rounding_step);

    let anchor_index = self.resolve_anchor(&scenario.houses)?;

    // Preconditions were checked by resolve_anchor when strict.
    let result = solver::calculate_arb(&scenario.houses, rounding_step);

    let evaluation = Evaluation {
      scenario_name: scenario.name,
      rounding_step,
      anchor_index,
      book_percentage: odds::book_percentage(&scenario.houses),
      result,
    };

    log_evaluation(&scenario.houses, &evaluation);

    Ok(evaluation)
  }

  /// Apply the anchor policy and report the chosen anchor.
  fn resolve_anchor(&self, houses: &[HouseInput]) -> Result<Option<usize>> {
    if self.config.strict || self.config.require_explicit_anchor {
      let mut choice = validation::validate_houses(houses)?;
      if self.config.require_explicit_anchor {
        choice = choice.require_explicit()?;
      }
      if !choice.explicit {
        warn!(
          anchor = choice.index,
          "No house marked fixed, anchoring on the first house"
        );
      }
      return Ok(Some(choice.index));
    }

    let anchor = partition::select_anchor(houses);
    if anchor.is_some() && !houses.iter().any(|h| h.is_fixed) {
      warn!("No house marked fixed, anchoring on the first house");
    }
    Ok(anchor)
  }
}

impl Default for DutchingService {
  fn default() -> Self {
    Self::new(SolverConfig::default())
  }
}

/// Structured log output for one evaluation.
fn log_evaluation(houses: &[HouseInput], evaluation: &Evaluation) {
  let result = &evaluation.result;

  for (index, (house, res)) in houses.iter().zip(&result.results).enumerate() {
    debug!(
      index,
      kind = %house.kind,
      odd = %house.odd,
      final_odd = %res.final_odd,
      effective_odd = %res.effective_odd,
      stake = %res.computed_stake,
      liability = %res.liability,
      profit_if_win = %res.profit_if_win,
      "House solved"
    );
  }

  if let Some(index) = evaluation.anchor_index {
    if houses.get(index).is_some_and(|h| !h.participates_in_profit) {
      warn!(
        anchor = index,
        "Anchor does not participate in profit; pool sized to its return"
      );
    }
  }

  if !houses.is_empty() && result.total_invested.is_zero() {
    warn!("No real money invested; ROI reported as 0");
  }

  info!(
    scenario = evaluation.scenario_name.as_deref().unwrap_or("-"),
    houses = houses.len(),
    rounding_step = %evaluation.rounding_step,
    book_pct = %evaluation.book_percentage.round_dp(2),
    target_return = %result.target_return,
    total_invested = %result.total_invested,
    min_profit = %result.min_profit.round_dp(2),
    roi = %result.roi.round_dp(2),
    is_arb = result.is_arb,
    "Scenario evaluated"
  );

  if !houses.is_empty() && !result.is_arb {
    warn!(
      min_profit = %result.min_profit.round_dp(2),
      "Configuration is not a guaranteed-profit position"
    );
  }
}
