//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim text and field records.

use core_kernel::{ClaimField, FieldRecord};
use proptest::prelude::*;

use crate::fixtures::ClaimTextFixtures;

/// Strategy for generating tracked claim fields
pub fn claim_field_strategy() -> impl Strategy<Value = ClaimField> {
    prop_oneof![
        Just(ClaimField::ClaimAmount),
        Just(ClaimField::ClaimantName),
        Just(ClaimField::IncidentDate),
        Just(ClaimField::PolicyNumber),
    ]
}

/// Strategy for a field value; a small alphabet keeps collisions likely
pub fn field_value_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-C1-3/,-]{1,3}")
}

/// Strategy for field records: the four tracked keys plus up to two extra keys
pub fn field_record_strategy() -> impl Strategy<Value = FieldRecord> {
    (
        proptest::collection::vec(field_value_strategy(), 4),
        proptest::collection::vec(("extra_[a-b]", field_value_strategy()), 0..3),
    )
        .prop_map(|(tracked, extras)| {
            let mut record = FieldRecord::tracked();
            for (field, value) in ClaimField::ALL.into_iter().zip(tracked) {
                record.set_field(field, value);
            }
            for (key, value) in extras {
                record.set(key, value);
            }
            record
        })
}

/// Strategy for arbitrary text, including text resembling claim forms
pub fn claim_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ -~₹\n]{0,200}",
        templated_claim_strategy().prop_map(|(text, _)| text),
    ]
}

/// Strategy for hospital-form text paired with the fields it encodes
///
/// Values are `[claim_amount, claimant_name, incident_date, policy_number]`.
pub fn templated_claim_strategy() -> impl Strategy<Value = (String, [String; 4])> {
    (
        1u32..10_000_000u32,
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}",
        (1u32..=28u32, 1u32..=12u32, 2000u32..2030u32),
        "[A-Z]{2,4}-[0-9]{3,6}",
    )
        .prop_map(|(amount, name, (day, month, year), policy)| {
            let amount = amount.to_string();
            let date = format!("{day}/{month}/{year}");
            let text = ClaimTextFixtures::hospital_form_with(&name, &date, &policy, &amount);
            (text, [amount, name, date, policy])
        })
}
