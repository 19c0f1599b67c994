//! Core dutching domain types.
//!
//! Defines the per-house input record, the per-house result and the
//! aggregate arbitrage result. Every money and odds quantity is a
//! `Decimal` so stakes round exactly to the configured increment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────
// Bet mechanics
// ────────────────────────────────────────────

/// How a wager pays out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetKind {
    /// Ordinary bet: stake returned on a win, commission on winnings.
    #[default]
    Back,
    /// Exchange bet against the outcome. Real exposure is the liability.
    Lay,
    /// Promotional stake: only net winnings are collected.
    Freebet,
}

impl BetKind {
    /// Maps form-style boolean flags onto a bet kind.
    ///
    /// A house flagged as both freebet and lay is treated as a freebet.
    pub const fn from_flags(is_freebet: bool, is_lay: bool) -> Self {
        match (is_freebet, is_lay) {
            (true, _) => Self::Freebet,
            (false, true) => Self::Lay,
            (false, false) => Self::Back,
        }
    }
}

impl std::fmt::Display for BetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Back => write!(f, "BACK"),
            Self::Lay => write!(f, "LAY"),
            Self::Freebet => write!(f, "FREEBET"),
        }
    }
}

// ────────────────────────────────────────────
// Input
// ────────────────────────────────────────────

/// One wagering opportunity on one outcome of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseInput {
    /// Quoted decimal odd (>= 1).
    pub odd: Decimal,
    /// Given stake. Only read when this house is the anchor.
    #[serde(default)]
    pub stake: Decimal,
    /// Commission in percent, [0, 100).
    #[serde(default)]
    pub commission_percent: Decimal,
    /// Promotional boost applied to the profit part of the odd, in percent.
    #[serde(default)]
    pub increase_percent: Decimal,
    /// Back, lay or freebet.
    #[serde(default)]
    pub kind: BetKind,
    /// Marks the anchor whose stake is given rather than solved for.
    #[serde(default)]
    pub is_fixed: bool,
    /// When false the stake only covers the total outlay (break-even).
    #[serde(default = "default_true")]
    pub participates_in_profit: bool,
}

const fn default_true() -> bool {
    true
}

impl HouseInput {
    /// A participating back bet at `odd` with no stake, commission or boost.
    pub const fn back(odd: Decimal) -> Self {
        Self {
            odd,
            stake: Decimal::ZERO,
            commission_percent: Decimal::ZERO,
            increase_percent: Decimal::ZERO,
            kind: BetKind::Back,
            is_fixed: false,
            participates_in_profit: true,
        }
    }

    /// Same house as a lay bet.
    #[must_use]
    pub const fn lay(mut self) -> Self {
        self.kind = BetKind::Lay;
        self
    }

    /// Same house as a freebet.
    #[must_use]
    pub const fn freebet(mut self) -> Self {
        self.kind = BetKind::Freebet;
        self
    }

    /// Marks this house as the anchor with the given stake.
    #[must_use]
    pub const fn fixed(mut self, stake: Decimal) -> Self {
        self.stake = stake;
        self.is_fixed = true;
        self
    }

    #[must_use]
    pub const fn with_commission(mut self, percent: Decimal) -> Self {
        self.commission_percent = percent;
        self
    }

    #[must_use]
    pub const fn with_increase(mut self, percent: Decimal) -> Self {
        self.increase_percent = percent;
        self
    }

    /// Sizes this house to break even instead of sharing profit.
    #[must_use]
    pub const fn zeroing(mut self) -> Self {
        self.participates_in_profit = false;
        self
    }

    /// Commission as a fraction of one.
    pub fn commission_rate(&self) -> Decimal {
        self.commission_percent / Decimal::ONE_HUNDRED
    }
}

// ────────────────────────────────────────────
// Output
// ────────────────────────────────────────────

/// Solved figures for one house, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseResult {
    /// Odd after boost (and freebet stripping).
    pub final_odd: Decimal,
    /// Net return per unit staked.
    pub effective_odd: Decimal,
    /// Stake to place. Rounded for every house but the anchor.
    pub computed_stake: Decimal,
    /// Lay exposure `stake × (odd − 1)`; zero for back and freebet.
    pub liability: Decimal,
    /// Net profit if this house's outcome occurs.
    pub profit_if_win: Decimal,
}

/// Aggregate result of one dutching calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbResult {
    /// Return the anchor implies for every participating house.
    pub target_return: Decimal,
    /// Real money at risk after rounding.
    pub total_invested: Decimal,
    /// One entry per input house, same order.
    pub results: Vec<HouseResult>,
    /// Worst-case profit across valid outcomes.
    pub min_profit: Decimal,
    /// `min_profit / total_invested × 100`, zero without investment.
    pub roi: Decimal,
    /// True when the worst case is not a loss.
    pub is_arb: bool,
}
