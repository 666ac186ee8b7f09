//! Custom Test Assertions
//!
//! Assertion helpers for field records and difference lists that give more
//! meaningful failure messages than standard assertions.

use std::collections::BTreeMap;

use core_kernel::{ClaimField, FieldRecord};
use domain_claims::DifferenceEntry;

/// Asserts that a record holds exactly the four tracked keys
pub fn assert_tracked_shape(record: &FieldRecord) {
    let keys: Vec<&str> = record.keys().collect();
    let expected: Vec<&str> = ClaimField::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(keys, expected, "Record keys differ from the tracked fields: {record:?}");
}

/// Asserts the value of one tracked field
pub fn assert_field_eq(record: &FieldRecord, field: ClaimField, expected: Option<&str>) {
    assert_eq!(
        record.field(field),
        expected,
        "Unexpected value for {field}: record={record:?}"
    );
}

/// Asserts that two difference lists report the same fields with old and new swapped
///
/// # Panics
///
/// Panics if a field appears in only one list or its values are not mirrored
pub fn assert_differences_mirrored(forward: &[DifferenceEntry], backward: &[DifferenceEntry]) {
    let index = |diffs: &[DifferenceEntry]| -> BTreeMap<String, (String, String)> {
        diffs
            .iter()
            .map(|d| (d.field.clone(), (d.old_value.clone(), d.new_value.clone())))
            .collect()
    };
    let forward = index(forward);
    let backward = index(backward);

    assert_eq!(
        forward.keys().collect::<Vec<_>>(),
        backward.keys().collect::<Vec<_>>(),
        "Differing fields are not the same in both directions"
    );
    for (field, (old_value, new_value)) in &forward {
        let (back_old, back_new) = &backward[field];
        assert_eq!(
            (old_value, new_value),
            (back_new, back_old),
            "Values for {field} are not mirrored"
        );
    }
}

/// Finds the difference entry for a field
pub fn find_difference<'a>(diffs: &'a [DifferenceEntry], field: &str) -> Option<&'a DifferenceEntry> {
    diffs.iter().find(|d| d.field == field)
}
