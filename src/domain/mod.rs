//! Domain layer - Core dutching math and models.
//!
//! Pure logic only: no I/O, no logging, no shared state. Every call
//! recomputes from its inputs, so the solver is safe to call from any
//! number of threads at once.
//!
//! Stages, in data-flow order:
//! 1. `odds` - boost, freebet stripping, effective odd
//! 2. `partition` - anchor, target return, participating / zeroing split
//! 3. `solver` - proportional stake solve and the public entry points
//! 4. `rounding` - placeable stakes, actual investment, profit per outcome

pub mod house;
pub mod odds;
pub mod partition;
pub mod rounding;
pub mod solver;
pub mod validation;

// Re-export core types for convenience
pub use house::{ArbResult, BetKind, HouseInput, HouseResult};
pub use odds::book_percentage;
pub use solver::{calculate_arb, try_calculate_arb};
pub use validation::{AnchorChoice, ValidationError, validate_houses};
