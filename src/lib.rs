//! Dutching Arb — Library Root
//!
//! Stake solver for dutching / arbitrage across back, lay and freebet
//! wagers. Re-exports all modules for the binary, integration tests
//! and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use domain::{ArbResult, BetKind, HouseInput, HouseResult, calculate_arb, try_calculate_arb};
