//! Testing infrastructure for corexia integration tests.
//!
//! - `TestWorld`: isolated data dir + CLI execution
//! - `assertions`: JSON output checks for list pages

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
