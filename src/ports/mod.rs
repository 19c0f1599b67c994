//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ScenarioSource`: Where house configurations come from

pub mod scenario_source;

pub use scenario_source::{Scenario, ScenarioSource};
