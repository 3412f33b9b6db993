//! Testing infrastructure for tracksync integration tests.
//!
//! - `TestWorld`: throwaway project directory plus a configured CLI command
//! - `fixtures`: tracker documents used across tests

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
