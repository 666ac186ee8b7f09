//! Heuristic key-field extraction from unstructured claim text
//!
//! Extraction is best-effort: each field is filled from the first pattern in
//! its table that matches, and left null otherwise. It never fails.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use core_kernel::{ClaimField, FieldRecord};

use crate::patterns::{
    first_capture, FieldPattern, AMOUNT_PATTERNS, CLAIMANT_NAME_PATTERNS,
    INCIDENT_DATE_PATTERNS, POLICY_PATTERNS,
};

/// Longest claimant name kept, in characters
pub const MAX_CLAIMANT_NAME_CHARS: usize = 80;

/// Extracted fields together with the pattern that produced each one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub fields: FieldRecord,
    /// Label of the winning pattern for every populated field
    pub provenance: BTreeMap<ClaimField, &'static str>,
}

/// Extracts claim amount, claimant name, incident date and policy number
///
/// The returned record always holds all four keys; unmatched fields are null.
///
/// # Examples
///
/// ```
/// use core_kernel::ClaimField;
/// use domain_claims::extract_key_fields;
///
/// let fields = extract_key_fields("Policy No: ABC-123, Rs 5,000");
/// assert_eq!(fields.field(ClaimField::PolicyNumber), Some("ABC-123"));
/// assert_eq!(fields.field(ClaimField::ClaimAmount), Some("5,000"));
/// assert_eq!(fields.field(ClaimField::IncidentDate), None);
/// ```
pub fn extract_key_fields(text: &str) -> FieldRecord {
    extract_with_provenance(text).fields
}

/// Same as [`extract_key_fields`], also reporting which pattern matched
pub fn extract_with_provenance(text: &str) -> Extraction {
    let mut extraction = Extraction {
        fields: FieldRecord::tracked(),
        provenance: BTreeMap::new(),
    };

    extraction.fill(ClaimField::ClaimAmount, &AMOUNT_PATTERNS, text, |value| value);
    extraction.fill(ClaimField::PolicyNumber, &POLICY_PATTERNS, text, |value| value);
    extraction.fill(ClaimField::IncidentDate, &INCIDENT_DATE_PATTERNS, text, |value| value);
    extraction.fill(ClaimField::ClaimantName, &CLAIMANT_NAME_PATTERNS, text, truncate_name);

    extraction
}

impl Extraction {
    fn fill(
        &mut self,
        field: ClaimField,
        patterns: &[FieldPattern],
        text: &str,
        normalize: fn(String) -> String,
    ) {
        if let Some((pattern, value)) = first_capture(patterns, text) {
            debug!(
                field = %field,
                pattern = pattern.label,
                precedence = pattern.precedence,
                "Matched claim field"
            );
            self.fields.set_field(field, Some(normalize(value)));
            self.provenance.insert(field, pattern.label);
        }
    }
}

fn truncate_name(name: String) -> String {
    match name.char_indices().nth(MAX_CLAIMANT_NAME_CHARS) {
        Some((cut, _)) => name[..cut].to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name_keeps_short_names() {
        assert_eq!(truncate_name("Asha Rao".to_string()), "Asha Rao");
    }

    #[test]
    fn test_truncate_name_cuts_on_char_boundary() {
        let long = "é".repeat(100);
        let cut = truncate_name(long);
        assert_eq!(cut.chars().count(), MAX_CLAIMANT_NAME_CHARS);
    }

    #[test]
    fn test_provenance_only_for_populated_fields() {
        let extraction = extract_with_provenance("Policy No: PN-77");

        assert_eq!(extraction.provenance.len(), 1);
        assert_eq!(
            extraction.provenance.get(&ClaimField::PolicyNumber),
            Some(&"policy_keyword")
        );
    }
}
