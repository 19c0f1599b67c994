//! Rounding and profit reconciliation.
//!
//! Solver stakes are idealized. This stage snaps every non-anchor stake
//! to a placeable increment, then re-derives the money actually at risk
//! and each outcome's profit from the rounded figures.
//!
//! Money sums saturate at the `Decimal` range rather than panic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::house::{ArbResult, BetKind, HouseResult};
use super::odds;
use super::partition::PricedHouse;

/// Rounds `stake` to the nearest multiple of `step`, halves going up.
///
/// A non-positive step disables rounding and returns `stake` untouched.
pub fn round_to_step(stake: Decimal, step: Decimal) -> Decimal {
    if step <= Decimal::ZERO {
        return stake;
    }
    match stake.checked_div(step) {
        Some(units) => units.saturating_add(dec!(0.5)).floor().saturating_mul(step),
        None => stake,
    }
}

/// A house after the proportional solve, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvedStake {
    pub house: PricedHouse,
    /// Idealized stake. Zero for houses excluded from the solve.
    pub stake: Decimal,
    /// The anchor keeps its given stake and is never rounded.
    pub is_anchor: bool,
}

/// Real money a position puts at risk: liability for lays, nothing for
/// freebets, the stake for back bets.
pub fn invested(kind: BetKind, stake: Decimal, liability: Decimal) -> Decimal {
    match kind {
        BetKind::Lay => liability,
        BetKind::Freebet => Decimal::ZERO,
        BetKind::Back => stake,
    }
}

/// Net profit if `house` wins, given the total actually invested.
///
/// - Lay: `stake × (1 − c) − (total − liability)`
/// - Back / freebet: `stake × effective − total`
pub fn profit_if_win(
    house: &PricedHouse,
    stake: Decimal,
    liability: Decimal,
    total_invested: Decimal,
) -> Decimal {
    match house.kind {
        BetKind::Lay => {
            let kept = stake.saturating_mul(Decimal::ONE.saturating_sub(house.commission_rate));
            kept.saturating_sub(total_invested.saturating_sub(liability))
        }
        BetKind::Back | BetKind::Freebet => stake
            .saturating_mul(house.effective_odd)
            .saturating_sub(total_invested),
    }
}

/// Rounds, recomputes total investment and per-house profit, and
/// assembles the aggregate result. Output order follows `solved`.
pub fn reconcile(solved: &[SolvedStake], rounding_step: Decimal, target_return: Decimal) -> ArbResult {
    let placed: Vec<(Decimal, Decimal)> = solved
        .iter()
        .map(|s| {
            let stake = if s.is_anchor {
                s.stake
            } else {
                round_to_step(s.stake, rounding_step)
            };
            (stake, odds::liability(s.house.kind, stake, s.house.odd))
        })
        .collect();

    let total_invested: Decimal = solved
        .iter()
        .zip(&placed)
        .map(|(s, &(stake, liability))| invested(s.house.kind, stake, liability))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let results: Vec<HouseResult> = solved
        .iter()
        .zip(&placed)
        .map(|(s, &(stake, liability))| HouseResult {
            final_odd: s.house.final_odd,
            effective_odd: s.house.effective_odd,
            computed_stake: stake,
            liability,
            profit_if_win: profit_if_win(&s.house, stake, liability, total_invested),
        })
        .collect();

    let min_profit = solved
        .iter()
        .zip(&results)
        .filter(|(s, _)| s.house.is_valid())
        .map(|(_, r)| r.profit_if_win)
        .min()
        .unwrap_or(Decimal::ZERO);

    let roi = return_on_investment(min_profit, total_invested);

    ArbResult {
        target_return,
        total_invested,
        results,
        min_profit,
        roi,
        is_arb: roi >= Decimal::ZERO,
    }
}

/// `profit / invested × 100`; zero without investment, saturated when
/// the share does not fit.
fn return_on_investment(profit: Decimal, invested: Decimal) -> Decimal {
    if invested.is_zero() {
        return Decimal::ZERO;
    }
    match profit.checked_div(invested) {
        Some(share) => share.saturating_mul(Decimal::ONE_HUNDRED),
        None if profit.is_sign_negative() != invested.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}
