//! Claims Key-Field Domain
//!
//! Pulls a fixed set of key fields out of unstructured claim text and compares
//! two claims' fields to tell a genuinely different claim from a duplicate.
//!
//! ```text
//! claim text -> extract_key_fields -> FieldRecord ─┐
//!                                                  ├─> compute_differences -> critical count >= threshold?
//! claim text -> extract_key_fields -> FieldRecord ─┘
//! ```
//!
//! All operations are pure and never fail.

pub mod patterns;
pub mod extraction;
pub mod diff;
pub mod distinctness;

pub use extraction::{extract_key_fields, extract_with_provenance, Extraction};
pub use diff::{compute_differences, DifferenceEntry, MISSING_VALUE};
pub use distinctness::{
    key_fields_indicate_different_claim, ClaimComparison, DistinctnessPolicy,
    CRITICAL_CLAIM_FIELDS, DEFAULT_MIN_DIFFERENCES,
};
