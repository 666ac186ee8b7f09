//! Field-by-field comparison of two field records

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use core_kernel::FieldRecord;

/// Placeholder rendered for a null or missing value
pub const MISSING_VALUE: &str = "—";

/// One field on which two records disagree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifferenceEntry {
    pub field: String,
    /// Value in the existing record, or [`MISSING_VALUE`]
    pub old_value: String,
    /// Value in the new record, or [`MISSING_VALUE`]
    pub new_value: String,
}

/// Compares `new_fields` against `existing_fields`
///
/// Every key present in either record is checked. A key produces an entry when
/// its values differ, null against a value included; two nulls are not a
/// difference. Entries come out in key order.
pub fn compute_differences(
    new_fields: &FieldRecord,
    existing_fields: &FieldRecord,
) -> Vec<DifferenceEntry> {
    let keys: BTreeSet<&str> = new_fields.keys().chain(existing_fields.keys()).collect();

    keys.into_iter()
        .filter_map(|key| {
            let old_value = existing_fields.get(key);
            let new_value = new_fields.get(key);
            if old_value == new_value {
                return None;
            }
            Some(DifferenceEntry {
                field: key.to_string(),
                old_value: render(old_value),
                new_value: render(new_value),
            })
        })
        .collect()
}

fn render(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_key_order() {
        let new: FieldRecord = [("b", Some("2")), ("a", Some("1"))].into_iter().collect();
        let existing = FieldRecord::empty();

        let fields: Vec<String> = compute_differences(&new, &existing)
            .into_iter()
            .map(|d| d.field)
            .collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_explicit_null_equals_missing_key() {
        let new: FieldRecord = [("claim_amount", None::<&str>)].into_iter().collect();
        let existing = FieldRecord::empty();

        assert!(compute_differences(&new, &existing).is_empty());
    }
}
