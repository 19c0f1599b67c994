//! Input preconditions.
//!
//! `calculate_arb` absorbs bad input into numeric fallbacks. Callers
//! that want bad configurations rejected up front run these checks
//! first; the anchor choice is made explicit instead of silently
//! defaulting.

use rust_decimal::Decimal;
use thiserror::Error;

use super::house::HouseInput;

/// Why a set of houses cannot be solved as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no houses given")]
    Empty,

    #[error("houses {first} and {second} are both marked fixed; exactly one anchor is allowed")]
    MultipleAnchors { first: usize, second: usize },

    #[error("no house is marked fixed")]
    MissingAnchor,

    #[error("house {index}: odd must be at least 1, got {odd}")]
    InvalidOdd { index: usize, odd: Decimal },

    #[error("house {index}: stake must not be negative, got {stake}")]
    NegativeStake { index: usize, stake: Decimal },

    #[error("house {index}: commission must be in [0, 100), got {percent}")]
    CommissionOutOfRange { index: usize, percent: Decimal },

    #[error("house {index}: odds increase must not be negative, got {percent}")]
    NegativeIncrease { index: usize, percent: Decimal },
}

/// Which house anchors the calculation and whether it was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorChoice {
    pub index: usize,
    /// False when no house was flagged and index 0 was used.
    pub explicit: bool,
}

impl AnchorChoice {
    /// Fails when the anchor was not flagged by the caller.
    pub const fn require_explicit(self) -> Result<Self, ValidationError> {
        if self.explicit {
            Ok(self)
        } else {
            Err(ValidationError::MissingAnchor)
        }
    }
}

/// Checks every house and resolves the anchor.
///
/// # Errors
/// Returns the first violated precondition, scanning houses in order.
pub fn validate_houses(houses: &[HouseInput]) -> Result<AnchorChoice, ValidationError> {
    if houses.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut anchor: Option<usize> = None;

    for (index, house) in houses.iter().enumerate() {
        validate_house(index, house)?;

        if house.is_fixed {
            if let Some(first) = anchor {
                return Err(ValidationError::MultipleAnchors { first, second: index });
            }
            anchor = Some(index);
        }
    }

    Ok(match anchor {
        Some(index) => AnchorChoice { index, explicit: true },
        None => AnchorChoice { index: 0, explicit: false },
    })
}

fn validate_house(index: usize, house: &HouseInput) -> Result<(), ValidationError> {
    if house.odd < Decimal::ONE {
        return Err(ValidationError::InvalidOdd { index, odd: house.odd });
    }
    if house.stake < Decimal::ZERO {
        return Err(ValidationError::NegativeStake { index, stake: house.stake });
    }
    if house.commission_percent < Decimal::ZERO || house.commission_percent >= Decimal::ONE_HUNDRED {
        return Err(ValidationError::CommissionOutOfRange {
            index,
            percent: house.commission_percent,
        });
    }
    if house.increase_percent < Decimal::ZERO {
        return Err(ValidationError::NegativeIncrease {
            index,
            percent: house.increase_percent,
        });
    }
    Ok(())
}
