//! Ordered pattern tables for heuristic field extraction
//!
//! Each table is evaluated top to bottom and the first entry that matches
//! anywhere in the text wins. The order is part of the extraction contract:
//! a "treatment cost" figure outranks an "Rs" figure, which outranks a bare
//! figure with a unit suffix, which outranks the explicit "claim amount" and
//! "amount" labels. Do not reorder entries to make them "smarter".

use once_cell::sync::Lazy;
use regex::Regex;

/// A single extraction pattern and its rank within its table
#[derive(Debug)]
pub struct FieldPattern {
    /// 1-based rank; lower is tried first
    pub precedence: u8,
    /// Stable name reported in extraction provenance
    pub label: &'static str,
    /// Compiled pattern; capture group 1 holds the value
    pub regex: Regex,
    /// Captures passed over in favour of the next match (case-insensitive)
    pub skip_tokens: &'static [&'static str],
}

impl FieldPattern {
    fn skipping(mut self, tokens: &'static [&'static str]) -> Self {
        self.skip_tokens = tokens;
        self
    }

    /// Trimmed first capture of the first match whose token is not skipped
    pub fn capture(&self, text: &str) -> Option<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|token| {
                !self
                    .skip_tokens
                    .iter()
                    .any(|skip| token.eq_ignore_ascii_case(skip))
            })
            .map(str::to_string)
    }
}

/// Date shape shared by every date tier: D/M/YYYY with `/` or `-` separators
const DATE_SHAPE: &str = r"(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})";

pub static AMOUNT_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    compile(&[
        ("treatment_cost", r"(?i)treatment\s*cost[:\s]*[^\d]*([\d,]+(?:\.\d+)?)".to_string()),
        ("rupee_abbrev", r"(?i)[Rr]s\.?\s*([\d,]+(?:\.\d+)?)\s*(?:L|Lakh)?".to_string()),
        ("rupee_symbol", r"(?i)₹\s*([\d,]+(?:\.\d+)?)\s*(?:L|Lakh)?".to_string()),
        ("unit_suffix", r"(?i)([\d,]+(?:\.\d+)?)\s*(?:L|Lakh|INR)".to_string()),
        ("claim_amount", r"(?i)claim\s*amount[:\s]+([\d,]+(?:\.\d+)?)".to_string()),
        ("amount", r"(?i)amount[:\s]+([\d,]+(?:\.\d+)?)".to_string()),
    ])
});

// "Policy Holder Name" matches as policy + "Holder"; that match is passed
// over and the next one is used.
pub static POLICY_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    compile(&[(
        "policy_keyword",
        r"(?i)policy\s*(?:no|number|#)?[:\s]*([A-Za-z0-9\-/]+)".to_string(),
    )])
    .into_iter()
    .map(|pattern| pattern.skipping(&["holder"]))
    .collect()
});

pub static INCIDENT_DATE_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    compile(&[
        ("date_of_incident", format!(r"(?i)date\s+of\s+incident[:\s]*{DATE_SHAPE}")),
        (
            "keyword_date",
            format!(r"(?i)(?:incident|date|loss|accident)\s*(?:date)?[:\s]*{DATE_SHAPE}"),
        ),
        // Unanchored: any date-shaped substring is accepted.
        ("bare_date", DATE_SHAPE.to_string()),
    ])
});

pub static CLAIMANT_NAME_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    compile(&[
        ("policy_holder_name", r"(?i)policy\s*holder\s*name[:\s]*([A-Za-z\s]{2,50})".to_string()),
        ("claimant_keyword", r"(?i)(?:claimant|name|insured)[:\s]*([A-Za-z\s]{2,50})".to_string()),
    ])
});

fn compile(table: &[(&'static str, String)]) -> Vec<FieldPattern> {
    table
        .iter()
        .enumerate()
        .map(|(index, (label, pattern))| FieldPattern {
            precedence: (index + 1) as u8,
            label: *label,
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid extraction pattern `{label}`: {e}")),
            skip_tokens: &[],
        })
        .collect()
}

/// Returns the first pattern in `patterns` that matches `text`, with its
/// trimmed first capture group
pub fn first_capture<'p>(
    patterns: &'p [FieldPattern],
    text: &str,
) -> Option<(&'p FieldPattern, String)> {
    patterns
        .iter()
        .find_map(|pattern| pattern.capture(text).map(|value| (pattern, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(patterns: &[FieldPattern]) -> Vec<&'static str> {
        patterns.iter().map(|p| p.label).collect()
    }

    #[test]
    fn test_tables_compile_in_order() {
        assert_eq!(
            labels(&AMOUNT_PATTERNS),
            vec!["treatment_cost", "rupee_abbrev", "rupee_symbol", "unit_suffix", "claim_amount", "amount"]
        );
        assert_eq!(labels(&POLICY_PATTERNS), vec!["policy_keyword"]);
        assert_eq!(
            labels(&INCIDENT_DATE_PATTERNS),
            vec!["date_of_incident", "keyword_date", "bare_date"]
        );
        assert_eq!(
            labels(&CLAIMANT_NAME_PATTERNS),
            vec!["policy_holder_name", "claimant_keyword"]
        );
    }

    #[test]
    fn test_precedence_is_one_based_and_increasing() {
        for table in [&*AMOUNT_PATTERNS, &*INCIDENT_DATE_PATTERNS, &*CLAIMANT_NAME_PATTERNS] {
            let ranks: Vec<u8> = table.iter().map(|p| p.precedence).collect();
            let expected: Vec<u8> = (1..=table.len() as u8).collect();
            assert_eq!(ranks, expected);
        }
    }

    #[test]
    fn test_first_capture_prefers_earlier_entry() {
        // "amount:" appears first in the text, but "Rs" ranks higher.
        let text = "Amount: 100, paid Rs 250";
        let (pattern, value) = first_capture(&AMOUNT_PATTERNS, text).unwrap();
        assert_eq!(pattern.label, "rupee_abbrev");
        assert_eq!(value, "250");
    }

    #[test]
    fn test_first_capture_none_when_nothing_matches() {
        assert!(first_capture(&AMOUNT_PATTERNS, "no figures here").is_none());
    }

    #[test]
    fn test_policy_holder_label_is_skipped() {
        let policy = &POLICY_PATTERNS[0];

        assert_eq!(policy.capture("Policy Holder Name: A B, Policy No: GOLD-PLAN").as_deref(), Some("GOLD-PLAN"));
        assert_eq!(policy.capture("POLICY HOLDER only"), None);
    }

    #[test]
    fn test_bare_date_needs_no_keyword() {
        let (pattern, value) = first_capture(&INCIDENT_DATE_PATTERNS, "ref 3-4-21").unwrap();
        assert_eq!(pattern.label, "bare_date");
        assert_eq!(value, "3-4-21");
    }
}
