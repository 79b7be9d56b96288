//! Checklist panel state for the claim-validation result.

use serde::{Deserialize, Serialize};
use shared_types::{ClaimValidation, IssueSeverity, IssueStatus, ValidationIssue};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub issue: ValidationIssue,
    pub is_highlighted: bool,
}

/// Renders the service's validation verdict as a selectable checklist.
#[wasm_bindgen]
pub struct ChecklistPanel {
    items: Vec<ChecklistItem>,
    summary: String,
    selected_id: Option<String>,
}

#[allow(clippy::derivable_impls)]
impl Default for ChecklistPanel {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            summary: String::new(),
            selected_id: None,
        }
    }
}

impl ChecklistPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the checklist with a freshly received validation result.
    pub fn set_validation(&mut self, validation: ClaimValidation) {
        self.summary = validation.summary;
        self.selected_id = None;
        self.items = validation
            .issues
            .into_iter()
            .enumerate()
            .map(|(idx, issue)| ChecklistItem {
                id: format!("issue-{}", idx),
                issue,
                is_highlighted: false,
            })
            .collect();
    }

    pub fn issues(&self) -> Vec<&ValidationIssue> {
        self.items.iter().map(|item| &item.issue).collect()
    }

    pub fn filter_by_severity(&self, severity: IssueSeverity) -> Vec<&ValidationIssue> {
        self.items
            .iter()
            .filter(|item| item.issue.severity == severity)
            .map(|item| &item.issue)
            .collect()
    }

    pub fn filter_by_status(&self, status: IssueStatus) -> Vec<&ValidationIssue> {
        self.items
            .iter()
            .filter(|item| item.issue.status == status)
            .map(|item| &item.issue)
            .collect()
    }

    pub fn select_issue(&mut self, id: &str) {
        // Clear previous selection
        for item in &mut self.items {
            item.is_highlighted = false;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_highlighted = true;
            self.selected_id = Some(id.to_string());
        } else {
            self.selected_id = None;
        }
    }

    pub fn get_selected(&self) -> Option<&ChecklistItem> {
        self.selected_id
            .as_ref()
            .and_then(|id| self.items.iter().find(|item| &item.id == id))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_default()
    }
}

// WASM bindings
#[wasm_bindgen]
impl ChecklistPanel {
    #[wasm_bindgen(constructor)]
    pub fn new_wasm() -> Self {
        console_error_panic_hook::set_once();
        Self::new()
    }

    #[wasm_bindgen(js_name = setValidation)]
    pub fn set_validation_wasm(&mut self, validation_json: &str) -> Result<(), JsValue> {
        let validation = ClaimValidation::from_json(validation_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse validation: {}", e)))?;
        self.set_validation(validation);
        Ok(())
    }

    #[wasm_bindgen(js_name = getItemsJson)]
    pub fn get_items_json(&self) -> String {
        self.to_json()
    }

    #[wasm_bindgen(js_name = getSummary)]
    pub fn get_summary(&self) -> String {
        self.summary.clone()
    }

    #[wasm_bindgen(js_name = getCriticalCount)]
    pub fn get_critical_count(&self) -> u32 {
        self.filter_by_severity(IssueSeverity::Critical).len() as u32
    }

    #[wasm_bindgen(js_name = getWarningCount)]
    pub fn get_warning_count(&self) -> u32 {
        self.filter_by_severity(IssueSeverity::Warning).len() as u32
    }

    #[wasm_bindgen(js_name = getInfoCount)]
    pub fn get_info_count(&self) -> u32 {
        self.filter_by_severity(IssueSeverity::Info).len() as u32
    }

    #[wasm_bindgen(js_name = getFailedCount)]
    pub fn get_failed_count(&self) -> u32 {
        self.filter_by_status(IssueStatus::Fail).len() as u32
    }

    #[wasm_bindgen(js_name = selectIssue)]
    pub fn select_issue_wasm(&mut self, id: &str) {
        self.select_issue(id);
    }

    #[wasm_bindgen(js_name = getSelectedJson)]
    pub fn get_selected_json(&self) -> Option<String> {
        self.get_selected()
            .and_then(|item| serde_json::to_string(item).ok())
    }

    #[wasm_bindgen(js_name = clearItems)]
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.summary.clear();
        self.selected_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ClaimStatus, IssueKind};

    fn issue(kind: IssueKind, severity: IssueSeverity, status: IssueStatus) -> ValidationIssue {
        ValidationIssue {
            issue_type: kind,
            severity,
            status,
            checklist_item: "Coverage check".to_string(),
            description: "Reported damage may exceed the coverage limit".to_string(),
            affected_sections: vec!["policy_sec_3".to_string()],
            recommendation: "Verify the per-incident cap".to_string(),
        }
    }

    fn validation(issues: Vec<ValidationIssue>) -> ClaimValidation {
        ClaimValidation {
            claim_id: "claim-1".to_string(),
            status: ClaimStatus::PendingReview,
            is_valid: false,
            confidence: 0.8,
            estimated_amount: Some(12_500_000.0),
            max_coverage_amount: Some(15_000_000.0),
            issues,
            summary: "Two findings".to_string(),
        }
    }

    #[test]
    fn test_panel_starts_empty() {
        let panel = ChecklistPanel::new();
        assert_eq!(panel.issues().len(), 0);
        assert!(panel.get_selected().is_none());
    }

    #[test]
    fn test_severity_and_status_counts() {
        let mut panel = ChecklistPanel::new();
        panel.set_validation(validation(vec![
            issue(
                IssueKind::CoverageLimit,
                IssueSeverity::Critical,
                IssueStatus::Fail,
            ),
            issue(
                IssueKind::IncompleteInfo,
                IssueSeverity::Warning,
                IssueStatus::Pending,
            ),
        ]));

        assert_eq!(panel.get_critical_count(), 1);
        assert_eq!(panel.get_warning_count(), 1);
        assert_eq!(panel.get_info_count(), 0);
        assert_eq!(panel.get_failed_count(), 1);
        assert_eq!(panel.get_summary(), "Two findings");
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut panel = ChecklistPanel::new();
        panel.set_validation(validation(vec![
            issue(
                IssueKind::CoverageLimit,
                IssueSeverity::Critical,
                IssueStatus::Fail,
            ),
            issue(
                IssueKind::ExpiredPolicy,
                IssueSeverity::Info,
                IssueStatus::Pass,
            ),
        ]));

        panel.select_issue("issue-0");
        panel.select_issue("issue-1");

        let selected = panel.get_selected().unwrap();
        assert_eq!(selected.id, "issue-1");
        let json = panel.to_json();
        let highlighted: Vec<_> = json
            .match_indices("\"is_highlighted\":true")
            .collect();
        assert_eq!(highlighted.len(), 1);
    }

    #[test]
    fn test_unknown_selection_clears() {
        let mut panel = ChecklistPanel::new();
        panel.set_validation(validation(vec![issue(
            IssueKind::CoverageLimit,
            IssueSeverity::Critical,
            IssueStatus::Fail,
        )]));

        panel.select_issue("issue-0");
        panel.select_issue("issue-99");
        assert!(panel.get_selected().is_none());
    }

    #[test]
    fn test_new_validation_resets_selection() {
        let mut panel = ChecklistPanel::new();
        panel.set_validation(validation(vec![issue(
            IssueKind::CoverageLimit,
            IssueSeverity::Critical,
            IssueStatus::Fail,
        )]));
        panel.select_issue("issue-0");

        panel.set_validation(validation(vec![]));
        assert!(panel.get_selected().is_none());
        assert_eq!(panel.issues().len(), 0);
    }
}
