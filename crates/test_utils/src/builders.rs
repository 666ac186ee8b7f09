//! Test Data Builders
//!
//! Builder for field records, so tests only spell out the fields they care about.

use core_kernel::{ClaimField, FieldRecord};

/// Builder for constructing test field records
///
/// Starts from a tracked record with all four fields null.
pub struct FieldRecordBuilder {
    record: FieldRecord,
}

impl Default for FieldRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRecordBuilder {
    /// Creates a new builder with all tracked fields null
    pub fn new() -> Self {
        Self {
            record: FieldRecord::tracked(),
        }
    }

    /// Creates a builder with no keys at all
    pub fn untracked() -> Self {
        Self {
            record: FieldRecord::empty(),
        }
    }

    /// Fields matching the hospital form fixture
    pub fn hospital_form() -> Self {
        Self::new()
            .claim_amount("54,300")
            .claimant_name("John Smith")
            .incident_date("12/05/2023")
            .policy_number("ABC-123")
    }

    pub fn claim_amount(self, value: impl Into<String>) -> Self {
        self.field(ClaimField::ClaimAmount, value)
    }

    pub fn claimant_name(self, value: impl Into<String>) -> Self {
        self.field(ClaimField::ClaimantName, value)
    }

    pub fn incident_date(self, value: impl Into<String>) -> Self {
        self.field(ClaimField::IncidentDate, value)
    }

    pub fn policy_number(self, value: impl Into<String>) -> Self {
        self.field(ClaimField::PolicyNumber, value)
    }

    /// Sets a tracked field
    pub fn field(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.record.set_field(field, Some(value.into()));
        self
    }

    /// Sets a tracked field to null
    pub fn null(mut self, field: ClaimField) -> Self {
        self.record.set_field(field, None);
        self
    }

    /// Sets an arbitrary key, null or not
    pub fn extra(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.record.set(key, value.map(str::to_string));
        self
    }

    pub fn build(self) -> FieldRecord {
        self.record
    }
}
