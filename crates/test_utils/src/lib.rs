//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim key-field test suite.
//!
//! # Modules
//!
//! - `fixtures`: Claim texts with known extraction results
//! - `builders`: Builder for field records
//! - `assertions`: Custom assertion helpers for field records and diffs
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
