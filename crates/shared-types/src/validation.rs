//! Claim-validation checklist result from the analysis service.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Approved,
    Rejected,
    NeedsMoreInfo,
    PendingReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingDocument,
    ExclusionClause,
    CoverageLimit,
    ExpiredPolicy,
    IncompleteInfo,
    ConflictingInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Pass,
    Fail,
    Pending,
}

/// One checklist finding raised while vetting a claim against its policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub issue_type: IssueKind,
    pub severity: IssueSeverity,
    pub status: IssueStatus,
    pub checklist_item: String,
    pub description: String,
    #[serde(default)]
    pub affected_sections: Vec<String>,
    pub recommendation: String,
}

/// The full validation verdict for the loaded claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimValidation {
    #[serde(default)]
    pub claim_id: String,
    pub status: ClaimStatus,
    pub is_valid: bool,
    pub confidence: f64,
    #[serde(default)]
    pub estimated_amount: Option<f64>,
    #[serde(default)]
    pub max_coverage_amount: Option<f64>,
    pub issues: Vec<ValidationIssue>,
    pub summary: String,
}

impl ClaimValidation {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(PayloadError::decode("claim validation"))
    }
}
