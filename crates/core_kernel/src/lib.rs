//! Core Kernel - Shared value types for claim field extraction
//!
//! This crate provides the building blocks used by the claims domain and the API:
//! - Claim field identifiers and the field record extracted from claim text
//! - Common error types

pub mod fields;
pub mod error;

pub use fields::{ClaimField, FieldRecord};
pub use error::CoreError;
