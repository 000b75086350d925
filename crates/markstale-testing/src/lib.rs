//! Testing infrastructure for markstale integration tests.
//!
//! - `TestWorld`: fluent setup of a temporary mirror tree with markers of controlled age
//! - `CliResult`: captured output of a `markstale` invocation

pub mod world;

pub use world::{CliResult, TestWorld};
