pub mod error;
pub mod payout;
pub mod plan;
pub mod types;
pub mod validation;

pub use error::PayloadError;
pub use payout::{ChartGeometry, PayoutPayload};
pub use plan::{ActionItem, ActionPlan, Priority};
pub use types::{mappings_from_json, Section, SectionMappings, StructuredDocument};
pub use validation::{
    ClaimStatus, ClaimValidation, IssueKind, IssueSeverity, IssueStatus, ValidationIssue,
};
