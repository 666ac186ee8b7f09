//! Claims handlers

use axum::{extract::State, Json};
use tracing::info;

use core_kernel::CoreError;
use domain_claims::{
    compute_differences, extract_key_fields, extract_with_provenance, ClaimComparison,
    DistinctnessPolicy,
};

use crate::{AppState, error::ApiError};
use crate::dto::claims::*;

/// Extracts key fields from claim text
pub async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    check_text_size(&state, "text", &request.text)?;

    let extraction = extract_with_provenance(&request.text);
    info!(
        populated = extraction.fields.populated_count(),
        "Extracted claim key fields"
    );

    Ok(Json(ExtractResponse {
        fields: extraction.fields,
        provenance: request.explain.then_some(extraction.provenance),
    }))
}

/// Lists the fields on which two records differ
pub async fn differences(
    Json(request): Json<DifferencesRequest>,
) -> Result<Json<DifferencesResponse>, ApiError> {
    let differences = compute_differences(&request.new_fields, &request.existing_fields);
    Ok(Json(DifferencesResponse { differences }))
}

/// Decides whether two field records describe different claims
pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ClaimComparison>, ApiError> {
    let policy = resolve_policy(&state, request.min_differences);
    let comparison = policy.compare(&request.new_fields, &request.existing_fields);
    log_verdict(&comparison);
    Ok(Json(comparison))
}

/// Extracts both claim texts and compares the results
pub async fn compare_text(
    State(state): State<AppState>,
    Json(request): Json<CompareTextRequest>,
) -> Result<Json<CompareTextResponse>, ApiError> {
    check_text_size(&state, "new_text", &request.new_text)?;
    check_text_size(&state, "existing_text", &request.existing_text)?;

    let new_fields = extract_key_fields(&request.new_text);
    let existing_fields = extract_key_fields(&request.existing_text);
    let comparison = resolve_policy(&state, request.min_differences).compare(&new_fields, &existing_fields);
    log_verdict(&comparison);

    Ok(Json(CompareTextResponse {
        new_fields,
        existing_fields,
        comparison,
    }))
}

fn resolve_policy(state: &AppState, min_differences: Option<i64>) -> DistinctnessPolicy {
    min_differences
        .map(DistinctnessPolicy::new)
        .unwrap_or_else(|| state.config.distinctness_policy())
}

fn check_text_size(state: &AppState, name: &str, text: &str) -> Result<(), CoreError> {
    let limit = state.config.max_text_bytes;
    if text.len() > limit {
        return Err(CoreError::validation(format!(
            "{name} is {} bytes, limit is {limit}",
            text.len()
        )));
    }
    Ok(())
}

fn log_verdict(comparison: &ClaimComparison) {
    info!(
        critical = comparison.critical_difference_count,
        min_differences = comparison.min_differences,
        is_different_claim = comparison.is_different_claim,
        "Compared claims"
    );
}
