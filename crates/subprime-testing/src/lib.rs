//! Testing infrastructure for subprime integration tests.
//!
//! - `TestWorld`: isolated config and content files for CLI runs
//! - `fixtures`: content documents, valid and broken
//! - `assertions`: checks on `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
