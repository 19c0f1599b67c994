//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (file I/O, byte streams).
//!
//! Adapter categories:
//! - `scenario`: Scenario files (TOML/JSON) and stdin streams

pub mod scenario;
