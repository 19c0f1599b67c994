//! Odds normalization and return-rate classification.
//!
//! Two pure stages run per house before any stake is solved:
//! 1. `final_odd` applies the promotional boost and strips the stake
//!    component from freebets.
//! 2. `effective_odd` converts the final odd into the net return per
//!    unit staked under the house's commission and bet mechanics.
//!
//! Arithmetic saturates at the `Decimal` range instead of panicking.

use rust_decimal::Decimal;

use super::house::{BetKind, HouseInput};

/// Applies a percentage boost to the profit part of an odd.
///
/// `b = odd + (odd − 1) × increase / 100` when the boost is positive and
/// the odd is above evens; otherwise the odd is returned unchanged.
pub fn boosted_odd(odd: Decimal, increase_percent: Decimal) -> Decimal {
    if increase_percent > Decimal::ZERO && odd > Decimal::ONE {
        let bonus = odd
            .saturating_sub(Decimal::ONE)
            .saturating_mul(increase_percent)
            .checked_div(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX);
        odd.saturating_add(bonus)
    } else {
        odd
    }
}

/// Odd usable by later stages.
///
/// Freebets pay net winnings only, so one unit is taken off and the
/// result is floored at zero. Other kinds keep the boosted odd as is,
/// even when it is at or below one.
pub fn final_odd(house: &HouseInput) -> Decimal {
    let boosted = boosted_odd(house.odd, house.increase_percent);
    match house.kind {
        BetKind::Freebet => boosted.saturating_sub(Decimal::ONE).max(Decimal::ZERO),
        BetKind::Back | BetKind::Lay => boosted,
    }
}

/// Net return per unit of stake.
///
/// - Freebet: `final × (1 − c)`
/// - Lay: `final` (commission is applied inside the solver equations)
/// - Back: `1 + (final − 1) × (1 − c)`
pub fn effective_odd(kind: BetKind, final_odd: Decimal, commission_rate: Decimal) -> Decimal {
    let retained = Decimal::ONE.saturating_sub(commission_rate);
    match kind {
        BetKind::Freebet => final_odd.saturating_mul(retained),
        BetKind::Lay => final_odd,
        BetKind::Back => Decimal::ONE
            .saturating_add(final_odd.saturating_sub(Decimal::ONE).saturating_mul(retained)),
    }
}

/// Lay return per unit of backer stake: `final − c`.
pub fn lay_return_rate(final_odd: Decimal, commission_rate: Decimal) -> Decimal {
    final_odd.saturating_sub(commission_rate)
}

/// Exposure of a position: `stake × max(odd − 1, 0)` for lays, zero otherwise.
pub fn liability(kind: BetKind, stake: Decimal, odd: Decimal) -> Decimal {
    match kind {
        BetKind::Lay => stake.saturating_mul(odd.saturating_sub(Decimal::ONE).max(Decimal::ZERO)),
        BetKind::Back | BetKind::Freebet => Decimal::ZERO,
    }
}

/// Book percentage: Σ 100 / effective odd over houses with a positive
/// effective odd. Below 100 the prices admit a surebet before rounding.
///
/// A share too large to represent saturates at `Decimal::MAX`.
pub fn book_percentage(houses: &[HouseInput]) -> Decimal {
    houses
        .iter()
        .map(|house| {
            let fin = final_odd(house);
            effective_odd(house.kind, fin, house.commission_rate())
        })
        .filter(|eff| *eff > Decimal::ZERO)
        .map(|eff| Decimal::ONE_HUNDRED.checked_div(eff).unwrap_or(Decimal::MAX))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
