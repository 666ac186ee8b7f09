//! Claim field identifiers and the field record extracted from claim text

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A field tracked for every claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    /// Claimed amount, kept as the matched substring (e.g. "54,300")
    ClaimAmount,
    /// Name of the claimant or policy holder
    ClaimantName,
    /// Date of the incident as written in the text
    IncidentDate,
    /// Policy number
    PolicyNumber,
}

impl ClaimField {
    /// All tracked fields, in record order
    pub const ALL: [ClaimField; 4] = [
        ClaimField::ClaimAmount,
        ClaimField::ClaimantName,
        ClaimField::IncidentDate,
        ClaimField::PolicyNumber,
    ];

    /// Returns the record key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::ClaimAmount => "claim_amount",
            ClaimField::ClaimantName => "claimant_name",
            ClaimField::IncidentDate => "incident_date",
            ClaimField::PolicyNumber => "policy_number",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Structured fields for one claim
///
/// Keys map to either a trimmed string or `None`. A key that is missing and a
/// key holding `None` read the same through [`FieldRecord::get`]. Records
/// produced by [`FieldRecord::tracked`] (and by the heuristic extractor)
/// always carry all four [`ClaimField`] keys; records built by other
/// extractors may carry additional keys.
///
/// Keys iterate in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord {
    values: BTreeMap<String, Option<String>>,
}

impl FieldRecord {
    /// Creates a record holding every tracked field, all unset
    pub fn tracked() -> Self {
        ClaimField::ALL
            .into_iter()
            .map(|field| (field.as_str(), None::<String>))
            .collect()
    }

    /// Creates a record with no keys at all
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    /// Returns the value of a tracked field, if any
    pub fn field(&self, field: ClaimField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Stores a value (or an explicit null) under `key`
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Stores a value (or an explicit null) for a tracked field
    pub fn set_field(&mut self, field: ClaimField, value: Option<String>) {
        self.set(field.as_str(), value);
    }

    /// Whether the key is present, null or not
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates the keys present in this record
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates key/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys holding a non-null value
    pub fn populated_count(&self) -> usize {
        self.values.values().filter(|v| v.is_some()).count()
    }
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self::tracked()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for FieldRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}
