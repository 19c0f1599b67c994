//! Role partitioning.
//!
//! Picks the anchor house, derives the return every participating house
//! must match, and splits the remaining houses into participating and
//! zeroing groups.

use rust_decimal::Decimal;

use super::house::{BetKind, HouseInput};
use super::odds;

/// A house with its stage-one figures attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedHouse {
    /// Position in the input sequence.
    pub index: usize,
    pub kind: BetKind,
    /// Quoted odd, used for lay liability.
    pub odd: Decimal,
    pub final_odd: Decimal,
    pub effective_odd: Decimal,
    pub commission_rate: Decimal,
    pub participates_in_profit: bool,
}

impl PricedHouse {
    /// Runs the normalizer and classifier over one input house.
    pub fn from_input(index: usize, house: &HouseInput) -> Self {
        let commission_rate = house.commission_rate();
        let final_odd = odds::final_odd(house);
        Self {
            index,
            kind: house.kind,
            odd: house.odd,
            final_odd,
            effective_odd: odds::effective_odd(house.kind, final_odd, commission_rate),
            commission_rate,
            participates_in_profit: house.participates_in_profit,
        }
    }

    /// Houses with a non-positive final odd take no part in the solve.
    pub fn is_valid(&self) -> bool {
        self.final_odd > Decimal::ZERO
    }
}

/// Index of the anchor: the first house flagged fixed, else index 0.
///
/// Returns `None` only for an empty slice.
pub fn select_anchor(houses: &[HouseInput]) -> Option<usize> {
    if houses.is_empty() {
        return None;
    }
    Some(houses.iter().position(|h| h.is_fixed).unwrap_or(0))
}

/// Return implied by the anchor's given stake.
///
/// - Lay: `stake × (final − c)`
/// - Back / freebet: `stake × effective`
///
/// Saturates at the `Decimal` range.
pub fn fixed_net_return(anchor: &PricedHouse, stake: Decimal) -> Decimal {
    let rate = match anchor.kind {
        BetKind::Lay => odds::lay_return_rate(anchor.final_odd, anchor.commission_rate),
        BetKind::Back | BetKind::Freebet => anchor.effective_odd,
    };
    stake.saturating_mul(rate)
}

/// Non-anchor houses split by role. Invalid houses land in neither group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roles {
    pub participating: Vec<PricedHouse>,
    pub zeroing: Vec<PricedHouse>,
}

/// Splits every valid non-anchor house by its profit-participation flag.
pub fn partition_roles(priced: &[PricedHouse], anchor_index: usize) -> Roles {
    let (participating, zeroing) = priced
        .iter()
        .filter(|h| h.index != anchor_index && h.is_valid())
        .copied()
        .partition(|h| h.participates_in_profit);

    Roles {
        participating,
        zeroing,
    }
}
