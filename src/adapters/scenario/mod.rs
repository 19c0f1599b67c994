//! Scenario adapters.
//!
//! Implementations of `ScenarioSource` backed by files on disk and by
//! any byte stream (stdin in the CLI).

pub mod file;
pub mod reader;

pub use file::{FileScenarioSource, ScenarioFormat};
pub use reader::ReaderScenarioSource;
