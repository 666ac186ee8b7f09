//! Pre-built Test Fixtures
//!
//! Claim texts with known extraction results. Each fixture documents the
//! pattern that is expected to win for every field it populates.

/// Fixture for raw claim text
pub struct ClaimTextFixtures;

impl ClaimTextFixtures {
    /// Hospital claim form where every field has an explicit label
    ///
    /// amount `54,300` (treatment_cost), name `John Smith` (policy_holder_name),
    /// date `12/05/2023` (date_of_incident), policy `ABC-123`
    pub fn hospital_form() -> &'static str {
        "Policy Holder Name: John Smith, Date of Incident: 12/05/2023, Policy No: ABC-123, Treatment Cost 54,300"
    }

    /// Text with no recognizable field
    pub fn no_patterns() -> &'static str {
        "hello world"
    }

    /// Rupee amount in lakh with an unlabelled accident date
    ///
    /// amount `1.2` (rupee_abbrev), name `Meera Nair` (claimant_keyword),
    /// date `03-11-2023` (bare_date), policy `HLT/2023/0042`
    pub fn rupee_lakh_claim() -> &'static str {
        "Insured: Meera Nair, Policy Number: HLT/2023/0042, Accident on 03-11-2023, claim of Rs. 1.2 Lakh"
    }

    /// Explicit "Claim Amount" label and a "Date:" label
    ///
    /// amount `45000` (claim_amount), name `Ravi Kumar` (claimant_keyword),
    /// date `7/8/2024` (keyword_date), no policy
    pub fn labelled_claim_amount() -> &'static str {
        "Claimant: Ravi Kumar. Claim Amount: 45000. Date: 7/8/2024"
    }

    /// Bare "Amount:" label, nothing else
    ///
    /// amount `1200` (amount)
    pub fn bare_amount_label() -> &'static str {
        "Amount: 1200 for repairs"
    }

    /// A unit-suffixed figure outranks an explicit "Claim Amount" label
    ///
    /// amount `8,500` (unit_suffix)
    pub fn unit_suffix_beats_claim_amount() -> &'static str {
        "Claim Amount: 9,000; hospital estimate 8,500 INR"
    }

    /// Rupee symbol amount
    ///
    /// amount `75,000` (rupee_symbol)
    pub fn rupee_symbol_claim() -> &'static str {
        "Total payable ₹ 75,000 towards surgery"
    }

    /// Fills the hospital form template with the given values
    pub fn hospital_form_with(name: &str, incident_date: &str, policy_number: &str, amount: &str) -> String {
        format!(
            "Policy Holder Name: {name}, Date of Incident: {incident_date}, Policy No: {policy_number}, Treatment Cost {amount}"
        )
    }
}
