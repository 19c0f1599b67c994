//! Proportional stake solver.
//!
//! Given the anchor's fixed stake, finds the aggregate real-money stake
//! at which every participating house returns exactly what the anchor
//! returns, while zeroing houses only recover their share of the pool.
//!
//! The solve is a single linear equation:
//!
//!   total = (anchor_outlay + Σ participating_outlay) / (1 − Σ 1/eff_zeroing)
//!
//! Outlay is real money at risk: the stake for back bets, the liability
//! for lays, nothing for freebets.
//!
//! Sums and products saturate at the `Decimal` range and divisions fall
//! back to zero, so no input makes the solve panic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::house::{ArbResult, BetKind, HouseInput};
use super::odds;
use super::partition::{self, PricedHouse};
use super::rounding::{self, SolvedStake};
use super::validation::{self, ValidationError};

/// Below this the zeroing group claims the whole pool and the solve
/// falls back to the plain outlay sum.
pub const MIN_POOL_SHARE: Decimal = dec!(0.001);

/// Idealized solver output, before rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeSolution {
    /// Anchor index in the input.
    pub anchor_index: usize,
    /// Return every participating house is sized to match.
    pub target_return: Decimal,
    /// Aggregate real-money stake the zeroing houses are sized against.
    pub total_stake: Decimal,
    /// One entry per input house, input order.
    pub solved: Vec<SolvedStake>,
}

/// `numerator / denominator`, or zero when the denominator is not
/// positive or the quotient does not fit.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Stake a participating house needs to return `target`.
pub fn participating_stake(house: &PricedHouse, target: Decimal) -> Decimal {
    match house.kind {
        BetKind::Lay => ratio(
            target,
            odds::lay_return_rate(house.final_odd, house.commission_rate),
        ),
        BetKind::Back | BetKind::Freebet => ratio(target, house.effective_odd),
    }
}

/// Real money a stake on `house` puts at risk.
fn outlay(house: &PricedHouse, stake: Decimal) -> Decimal {
    let liability = odds::liability(house.kind, stake, house.odd);
    rounding::invested(house.kind, stake, liability)
}

/// Solves every stake around the anchor at `anchor_index`.
///
/// A zeroing anchor only has to cover the pool, so the pool equals its
/// return; zeroing houses are sized from that and participating houses
/// keep their matched-return stakes.
///
/// # Panics
/// Panics if `anchor_index` is out of bounds for `houses`.
pub fn solve_stakes(houses: &[HouseInput], anchor_index: usize) -> StakeSolution {
    let priced: Vec<PricedHouse> = houses
        .iter()
        .enumerate()
        .map(|(i, h)| PricedHouse::from_input(i, h))
        .collect();

    let anchor = priced[anchor_index];
    let anchor_stake = houses[anchor_index].stake;
    let target_return = partition::fixed_net_return(&anchor, anchor_stake);
    let roles = partition::partition_roles(&priced, anchor_index);

    let mut stakes = vec![Decimal::ZERO; priced.len()];
    stakes[anchor_index] = anchor_stake;

    let mut participating_outlay = Decimal::ZERO;
    for house in &roles.participating {
        let stake = participating_stake(house, target_return);
        participating_outlay = participating_outlay.saturating_add(outlay(house, stake));
        stakes[house.index] = stake;
    }

    let anchor_outlay = outlay(&anchor, anchor_stake);

    let inverse_zeroing: Decimal = roles
        .zeroing
        .iter()
        .map(|h| ratio(Decimal::ONE, h.effective_odd))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let pool = anchor_outlay.saturating_add(participating_outlay);
    let denominator = Decimal::ONE.saturating_sub(inverse_zeroing);
    let total_stake = if !anchor.participates_in_profit {
        target_return
    } else if denominator > MIN_POOL_SHARE {
        pool.checked_div(denominator).unwrap_or(pool)
    } else {
        pool
    };

    for house in &roles.zeroing {
        stakes[house.index] = ratio(total_stake, house.effective_odd);
    }

    let solved = priced
        .into_iter()
        .zip(stakes)
        .map(|(house, stake)| SolvedStake {
            is_anchor: house.index == anchor_index,
            house,
            stake,
        })
        .collect();

    StakeSolution {
        anchor_index,
        target_return,
        total_stake,
        solved,
    }
}

/// Computes stakes, rounded placements and guaranteed profit for a set
/// of wagers on mutually exclusive outcomes.
///
/// The anchor is the first house flagged fixed, or house 0. Stakes of
/// every other house are rounded to `rounding_step` (disabled when not
/// positive) before profit is derived. Never fails: empty input yields a
/// zeroed result and degenerate prices collapse to zero stakes.
pub fn calculate_arb(houses: &[HouseInput], rounding_step: Decimal) -> ArbResult {
    let Some(anchor_index) = partition::select_anchor(houses) else {
        return ArbResult::default();
    };
    let solution = solve_stakes(houses, anchor_index);
    rounding::reconcile(&solution.solved, rounding_step, solution.target_return)
}

/// Like [`calculate_arb`], but rejects inputs that fail
/// [`validation::validate_houses`].
///
/// # Errors
/// Returns the first violated precondition.
pub fn try_calculate_arb(
    houses: &[HouseInput],
    rounding_step: Decimal,
) -> Result<ArbResult, ValidationError> {
    validation::validate_houses(houses)?;
    Ok(calculate_arb(houses, rounding_step))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Decimal, b: Decimal, tol: Decimal) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_empty_input_zeroed() {
        let result = calculate_arb(&[], dec!(0.01));
        assert_eq!(result, ArbResult::default());
        assert!(!result.is_arb);
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_two_way_surebet() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
            HouseInput::back(dec!(2.1)),
        ];
        let result = calculate_arb(&houses, dec!(0.01));

        assert_eq!(result.target_return, dec!(200));
        assert_eq!(result.results[1].computed_stake, dec!(95.24));
        assert_eq!(result.total_invested, dec!(195.24));
        assert_eq!(result.min_profit, dec!(4.76));
        assert!(close(result.roi, dec!(2.44), dec!(0.005)), "roi {}", result.roi);
        assert!(result.is_arb);
    }

    #[test]
    fn test_losing_book_not_arb() {
        let houses = [
            HouseInput::back(dec!(1.8)).fixed(dec!(100)),
            HouseInput::back(dec!(1.9)),
        ];
        let result = calculate_arb(&houses, dec!(0.01));
        assert!(result.min_profit < Decimal::ZERO);
        assert!(!result.is_arb);
    }

    #[test]
    fn test_three_way_profit_equalized_unrounded() {
        let houses = [
            HouseInput::back(dec!(3.2)).fixed(dec!(100)),
            HouseInput::back(dec!(3.6)),
            HouseInput::back(dec!(3.4)),
        ];
        let result = calculate_arb(&houses, Decimal::ZERO);
        let profits: Vec<_> = result.results.iter().map(|r| r.profit_if_win).collect();
        for p in &profits {
            assert!(close(*p, profits[0], dec!(0.000001)), "profits {profits:?}");
        }
    }

    #[test]
    fn test_anchor_not_first() {
        let houses = [
            HouseInput::back(dec!(2.1)),
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
        ];
        let result = calculate_arb(&houses, dec!(0.01));
        assert_eq!(result.results[1].computed_stake, dec!(100));
        assert_eq!(result.results[0].computed_stake, dec!(95.24));
    }

    #[test]
    fn test_lay_participant_sized_by_return_rate() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
            HouseInput::back(dec!(3.0)).lay().with_commission(dec!(5)),
        ];
        let solution = solve_stakes(&houses, 0);
        // 200 / (3.0 − 0.05)
        let expected = solution.target_return / dec!(2.95);
        assert_eq!(solution.solved[1].stake, expected);
        // anchor 100 + liability expected × 2
        assert_eq!(solution.total_stake, dec!(100) + expected * dec!(2));
    }

    #[test]
    fn test_freebet_participant_adds_no_outlay() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
            HouseInput::back(dec!(5.0)).freebet(),
        ];
        let solution = solve_stakes(&houses, 0);
        assert_eq!(solution.solved[1].stake, dec!(50));
        assert_eq!(solution.total_stake, dec!(100));

        let result = calculate_arb(&houses, dec!(0.01));
        assert_eq!(result.total_invested, dec!(100));
        assert_eq!(result.results[1].liability, Decimal::ZERO);
    }

    #[test]
    fn test_zeroing_house_breaks_even() {
        let houses = [
            HouseInput::back(dec!(2.5)).fixed(dec!(100)),
            HouseInput::back(dec!(4.0)),
            HouseInput::back(dec!(5.0)).zeroing(),
        ];
        let solution = solve_stakes(&houses, 0);
        // pool = 100 + 62.5, denominator = 1 − 0.2
        assert_eq!(solution.total_stake, dec!(203.125));
        assert_eq!(solution.solved[2].stake, dec!(40.625));

        let result = calculate_arb(&houses, Decimal::ZERO);
        assert_eq!(result.total_invested, dec!(203.125));
        assert_eq!(result.results[2].profit_if_win, Decimal::ZERO);
        assert_eq!(result.results[0].profit_if_win, dec!(46.875));
    }

    #[test]
    fn test_zeroing_pool_saturated_falls_back() {
        let houses = [
            HouseInput::back(dec!(3.0)).fixed(dec!(10)),
            HouseInput::back(dec!(1.5)).zeroing(),
            HouseInput::back(dec!(2.0)).zeroing(),
        ];
        let solution = solve_stakes(&houses, 0);
        assert_eq!(solution.total_stake, dec!(10));
    }

    #[test]
    fn test_zeroing_anchor_pool_is_its_return() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)).zeroing(),
            HouseInput::back(dec!(4.0)).zeroing(),
        ];
        let solution = solve_stakes(&houses, 0);
        assert_eq!(solution.total_stake, dec!(200));
        assert_eq!(solution.solved[1].stake, dec!(50));
    }

    #[test]
    fn test_invalid_house_kept_in_order() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
            HouseInput::back(dec!(1.0)).freebet(),
            HouseInput::back(dec!(2.1)),
        ];
        let result = calculate_arb(&houses, dec!(0.01));
        assert_eq!(result.results.len(), 3);
        assert_eq!(result.results[1].computed_stake, Decimal::ZERO);
        assert_eq!(result.results[1].final_odd, Decimal::ZERO);
        assert_eq!(result.results[2].computed_stake, dec!(95.24));
    }

    #[test]
    fn test_boosted_odd_reported() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)).with_increase(dec!(10)),
            HouseInput::back(dec!(2.0)),
        ];
        let result = calculate_arb(&houses, dec!(0.01));
        assert_eq!(result.results[0].final_odd, dec!(2.1));
        assert_eq!(result.target_return, dec!(210));
        assert_eq!(result.results[1].computed_stake, dec!(105));
        assert_eq!(result.min_profit, dec!(5));
    }

    #[test]
    fn test_try_calculate_rejects_two_anchors() {
        let houses = [
            HouseInput::back(dec!(2.0)).fixed(dec!(100)),
            HouseInput::back(dec!(2.1)).fixed(dec!(100)),
        ];
        assert_eq!(
            try_calculate_arb(&houses, dec!(0.01)),
            Err(ValidationError::MultipleAnchors { first: 0, second: 1 })
        );
    }

    #[test]
    fn test_extreme_anchor_saturates_without_panic() {
        let houses = [
            HouseInput::back(Decimal::from(1_000_000_000_000_000_000_i64))
                .fixed(Decimal::from(1_000_000_000_000_i64)),
            HouseInput::back(dec!(2.0)),
        ];
        assert!(validation::validate_houses(&houses).is_ok());

        let result = try_calculate_arb(&houses, dec!(0.01)).unwrap();
        assert_eq!(result.target_return, Decimal::MAX);
        assert_eq!(result.results.len(), 2);
        assert!(result.total_invested > Decimal::ZERO);
        assert_eq!(result.is_arb, result.roi >= Decimal::ZERO);
    }

    #[test]
    fn test_extreme_mixed_kinds_do_not_panic() {
        let houses = [
            HouseInput::back(Decimal::MAX).lay().fixed(Decimal::MAX),
            HouseInput::back(Decimal::MAX).with_increase(Decimal::MAX),
            HouseInput::back(dec!(1.0000000000000000000000000001)).zeroing(),
            HouseInput::back(dec!(1.0000000000000000000000000001)).freebet(),
            HouseInput::back(Decimal::MAX).lay().zeroing(),
        ];
        let result = calculate_arb(&houses, dec!(0.01));
        assert_eq!(result.results.len(), houses.len());
        assert_eq!(result.is_arb, result.roi >= Decimal::ZERO);
    }

    #[test]
    fn test_deterministic() {
        let houses = [
            HouseInput::back(dec!(2.3)).fixed(dec!(75)),
            HouseInput::back(dec!(4.1)).lay().with_commission(dec!(2)),
            HouseInput::back(dec!(6.0)).freebet().with_commission(dec!(3)),
            HouseInput::back(dec!(7.5)).zeroing(),
        ];
        assert_eq!(calculate_arb(&houses, dec!(0.5)), calculate_arb(&houses, dec!(0.5)));
    }
}
