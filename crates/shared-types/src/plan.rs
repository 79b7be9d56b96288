//! The AI-suggested action plan, as served by the analysis service.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::validation::ClaimStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One unit of AI-suggested follow-up work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// ISO-date-prefixed string (`YYYY-MM-DD` or a full timestamp); the
    /// calendar index normalizes it to its calendar day.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub related_sections: Vec<String>,
    pub estimated_time: String,
}

/// A full suggestion plan. Produced once per suggestion request, immutable
/// once received, replaced wholesale on a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub plan_id: String,
    pub claim_id: String,
    pub status: ClaimStatus,
    pub actions: Vec<ActionItem>,
    pub total_estimated_time: String,
    #[serde(default)]
    pub critical_path: Vec<String>,
    #[serde(default)]
    pub next_steps: String,
    pub timestamp: String,
}

impl ActionPlan {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(PayloadError::decode("action plan"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_decodes_service_shape() {
        let json = r#"{
            "planId": "plan-77",
            "claimId": "claim-12",
            "status": "pending_review",
            "actions": [
                {
                    "id": "act-1",
                    "title": "Request repair invoice",
                    "description": "Ask the garage for an itemized invoice.",
                    "priority": "high",
                    "dueDate": "2025-10-28T10:00:00Z",
                    "assignee": "Adjuster A",
                    "relatedSections": ["report_sec_2"],
                    "estimatedTime": "2h"
                }
            ],
            "totalEstimatedTime": "2h",
            "criticalPath": ["act-1"],
            "nextSteps": "Review the repair invoice once received.",
            "timestamp": "2025-10-20T09:00:00Z"
        }"#;

        let plan = ActionPlan::from_json(json).unwrap();
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.actions[0].priority, Priority::High);
        assert_eq!(plan.status, ClaimStatus::PendingReview);
        assert_eq!(
            plan.actions[0].due_date.as_deref(),
            Some("2025-10-28T10:00:00Z")
        );
    }

    #[test]
    fn test_action_optional_fields_default() {
        let json = r#"{
            "id": "act-2",
            "title": "Call the customer",
            "description": "",
            "priority": "low",
            "estimatedTime": "30m"
        }"#;

        let action: ActionItem = serde_json::from_str(json).unwrap();
        assert_eq!(action.due_date, None);
        assert_eq!(action.assignee, None);
        assert!(action.related_sections.is_empty());
    }

    #[test]
    fn test_priority_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }
}
