//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the application workflows.
//!
//! Use cases:
//! - `DutchingService`: Load a scenario, apply policy, solve, report

pub mod dutching;

pub use dutching::{DutchingService, Evaluation};
