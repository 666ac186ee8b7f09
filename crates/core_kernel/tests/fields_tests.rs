//! Tests for claim field identifiers and field records

use core_kernel::{ClaimField, FieldRecord};
use proptest::prelude::*;

mod claim_field_tests {
    use super::*;

    #[test]
    fn test_all_fields_in_record_order() {
        let names: Vec<&str> = ClaimField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["claim_amount", "claimant_name", "incident_date", "policy_number"]
        );
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(ClaimField::IncidentDate.to_string(), "incident_date");
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&ClaimField::ClaimantName).unwrap();
        assert_eq!(json, "\"claimant_name\"");

        let parsed: ClaimField = serde_json::from_str("\"policy_number\"").unwrap();
        assert_eq!(parsed, ClaimField::PolicyNumber);
    }
}

mod field_record_tests {
    use super::*;

    #[test]
    fn test_default_is_tracked() {
        assert_eq!(FieldRecord::default(), FieldRecord::tracked());
    }

    #[test]
    fn test_serializes_as_flat_object_with_nulls() {
        let mut record = FieldRecord::tracked();
        record.set_field(ClaimField::ClaimAmount, Some("54,300".to_string()));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "claim_amount": "54,300",
                "claimant_name": null,
                "incident_date": null,
                "policy_number": null,
            })
        );
    }

    #[test]
    fn test_deserializes_partial_object() {
        let record: FieldRecord =
            serde_json::from_str(r#"{"policy_number": "P-1", "branch": null}"#).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.field(ClaimField::PolicyNumber), Some("P-1"));
        assert!(record.contains_key("branch"));
        assert_eq!(record.get("branch"), None);
        assert_eq!(record.get("claim_amount"), None);
    }

    #[test]
    fn test_iter_exposes_nulls() {
        let record: FieldRecord = [("a", Some("1")), ("b", None)].into_iter().collect();
        let pairs: Vec<(&str, Option<&str>)> = record.iter().collect();
        assert_eq!(pairs, vec![("a", Some("1")), ("b", None)]);
        assert_eq!(record.populated_count(), 1);
    }

    #[test]
    fn test_empty_record() {
        let record = FieldRecord::empty();
        assert!(record.is_empty());
        assert_eq!(record.keys().count(), 0);
    }
}

proptest! {
    #[test]
    fn prop_set_then_get_returns_value(key in "[a-z_]{1,12}", value in proptest::option::of(".{0,20}")) {
        let mut record = FieldRecord::empty();
        record.set(key.clone(), value.clone());
        prop_assert_eq!(record.get(&key), value.as_deref());
        prop_assert!(record.contains_key(&key));
    }
}
