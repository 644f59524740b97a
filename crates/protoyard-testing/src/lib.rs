//! Testing infrastructure for protoyard integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative workspace setup
//! - `assertions`: Assertions over the aggregated index and CLI JSON output
//! - `fixtures`: Sample metadata documents and project trees

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
