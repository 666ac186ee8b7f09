//! Claims DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimField, FieldRecord};
use domain_claims::{ClaimComparison, DifferenceEntry};

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// Also report which pattern produced each field
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub fields: FieldRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<BTreeMap<ClaimField, &'static str>>,
}

#[derive(Debug, Deserialize)]
pub struct DifferencesRequest {
    pub new_fields: FieldRecord,
    pub existing_fields: FieldRecord,
}

#[derive(Debug, Serialize)]
pub struct DifferencesResponse {
    pub differences: Vec<DifferenceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub new_fields: FieldRecord,
    pub existing_fields: FieldRecord,
    pub min_differences: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CompareTextRequest {
    pub new_text: String,
    pub existing_text: String,
    pub min_differences: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CompareTextResponse {
    pub new_fields: FieldRecord,
    pub existing_fields: FieldRecord,
    pub comparison: ClaimComparison,
}
