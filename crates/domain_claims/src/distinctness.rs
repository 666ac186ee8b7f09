//! Deciding whether two field records describe different claims
//!
//! Two claims filed on the same form template look alike structurally. This
//! check keeps them from being merged as duplicates when enough of the fields
//! that identify a claim disagree. It is a guard against false-positive
//! deduplication, not an equivalence test.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ClaimField, FieldRecord};

use crate::diff::{compute_differences, DifferenceEntry};

/// Fields that identify a distinct claim
pub const CRITICAL_CLAIM_FIELDS: [ClaimField; 4] = [
    ClaimField::PolicyNumber,
    ClaimField::ClaimantName,
    ClaimField::ClaimAmount,
    ClaimField::IncidentDate,
];

/// Critical differences required by default
pub const DEFAULT_MIN_DIFFERENCES: i64 = 2;

/// Whether a record key is one of [`CRITICAL_CLAIM_FIELDS`]
pub fn is_critical_field(field: &str) -> bool {
    CRITICAL_CLAIM_FIELDS.iter().any(|critical| critical.as_str() == field)
}

/// Threshold for calling two claims different
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinctnessPolicy {
    /// Critical differences needed; values <= 0 are always met, values above
    /// the number of critical fields never are
    pub min_differences: i64,
}

impl Default for DistinctnessPolicy {
    fn default() -> Self {
        Self {
            min_differences: DEFAULT_MIN_DIFFERENCES,
        }
    }
}

/// Outcome of comparing a new claim's fields against an existing claim's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimComparison {
    /// Every differing field, critical or not
    pub differences: Vec<DifferenceEntry>,
    /// How many of `differences` are critical fields
    pub critical_difference_count: usize,
    /// Threshold the verdict was reached with
    pub min_differences: i64,
    pub is_different_claim: bool,
}

impl DistinctnessPolicy {
    pub fn new(min_differences: i64) -> Self {
        Self { min_differences }
    }

    /// Diffs the two records and applies the threshold
    pub fn compare(&self, new_fields: &FieldRecord, existing_fields: &FieldRecord) -> ClaimComparison {
        let differences = compute_differences(new_fields, existing_fields);
        let critical_difference_count = differences
            .iter()
            .filter(|d| is_critical_field(&d.field))
            .count();
        let is_different_claim = critical_difference_count as i64 >= self.min_differences;

        debug!(
            differences = differences.len(),
            critical = critical_difference_count,
            min_differences = self.min_differences,
            is_different_claim,
            "Compared claim key fields"
        );

        ClaimComparison {
            differences,
            critical_difference_count,
            min_differences: self.min_differences,
            is_different_claim,
        }
    }
}

/// Returns true iff at least `min_differences` critical fields differ
///
/// Pass [`DEFAULT_MIN_DIFFERENCES`] for the usual threshold.
pub fn key_fields_indicate_different_claim(
    new_fields: &FieldRecord,
    existing_fields: &FieldRecord,
    min_differences: i64,
) -> bool {
    DistinctnessPolicy::new(min_differences)
        .compare(new_fields, existing_fields)
        .is_different_claim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_fields_cover_all_tracked_fields() {
        for field in ClaimField::ALL {
            assert!(is_critical_field(field.as_str()));
        }
        assert!(!is_critical_field("branch_code"));
    }

    #[test]
    fn test_default_policy_threshold() {
        assert_eq!(DistinctnessPolicy::default().min_differences, 2);
    }

    #[test]
    fn test_non_critical_differences_do_not_count() {
        let new: FieldRecord = [("branch_code", Some("N1")), ("adjuster", Some("A"))]
            .into_iter()
            .collect();
        let existing = FieldRecord::empty();

        let comparison = DistinctnessPolicy::default().compare(&new, &existing);
        assert_eq!(comparison.differences.len(), 2);
        assert_eq!(comparison.critical_difference_count, 0);
        assert!(!comparison.is_different_claim);
    }
}
