//! Stateful claim session holding the active document pair in Rust.
//!
//! The analysis service delivers a report, its matching policy, and the
//! section mapping table in one response; the session replaces all three
//! wholesale and drops any plan or validation carried over from the
//! previous pair, mirroring how a fresh upload resets the workspace.

use shared_types::{
    mappings_from_json, ActionPlan, ClaimValidation, SectionMappings, StructuredDocument,
};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::highlight::{resolve_dom_selection, SelectionBinding};

/// Which side of the dual-pane view a lookup targets.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Report,
    Policy,
}

#[wasm_bindgen]
pub struct ClaimSession {
    report: Option<StructuredDocument>,
    policy: Option<StructuredDocument>,
    mappings: SectionMappings,
    plan: Option<ActionPlan>,
    validation: Option<ClaimValidation>,
}

#[allow(clippy::derivable_impls)]
impl Default for ClaimSession {
    fn default() -> Self {
        Self {
            report: None,
            policy: None,
            mappings: SectionMappings::new(),
            plan: None,
            validation: None,
        }
    }
}

impl ClaimSession {
    pub fn load_documents(
        &mut self,
        report: StructuredDocument,
        policy: StructuredDocument,
        mappings: SectionMappings,
    ) {
        self.report = Some(report);
        self.policy = Some(policy);
        self.mappings = mappings;
        // Derived results belong to the previous pair.
        self.plan = None;
        self.validation = None;
    }

    pub fn document(&self, side: DocumentSide) -> Option<&StructuredDocument> {
        match side {
            DocumentSide::Report => self.report.as_ref(),
            DocumentSide::Policy => self.policy.as_ref(),
        }
    }

    pub fn mappings(&self) -> &SectionMappings {
        &self.mappings
    }

    /// Policy section mapped to a report section, if any.
    pub fn mapped_policy_section(&self, report_section_id: &str) -> Option<&str> {
        self.mappings.get(report_section_id).map(String::as_str)
    }

    pub fn set_plan(&mut self, plan: ActionPlan) {
        self.plan = Some(plan);
    }

    pub fn set_validation(&mut self, validation: ClaimValidation) {
        self.validation = Some(validation);
    }

    pub fn plan(&self) -> Option<&ActionPlan> {
        self.plan.as_ref()
    }

    pub fn validation(&self) -> Option<&ClaimValidation> {
        self.validation.as_ref()
    }
}

// WASM bindings
#[wasm_bindgen]
impl ClaimSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ClaimSession {
        console_error_panic_hook::set_once();
        Self::default()
    }

    /// Replace the loaded document pair and its mapping table wholesale.
    #[wasm_bindgen(js_name = loadDocumentPair)]
    pub fn load_document_pair(
        &mut self,
        report_json: &str,
        policy_json: &str,
        mappings_json: &str,
    ) -> Result<(), JsValue> {
        let report = StructuredDocument::from_json(report_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse report: {}", e)))?;
        let policy = StructuredDocument::from_json(policy_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse policy: {}", e)))?;
        let mappings = mappings_from_json(mappings_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse mappings: {}", e)))?;

        self.load_documents(report, policy, mappings);
        Ok(())
    }

    #[wasm_bindgen(js_name = hasDocuments)]
    pub fn has_documents(&self) -> bool {
        self.report.is_some() && self.policy.is_some()
    }

    #[wasm_bindgen(js_name = sectionCount)]
    pub fn section_count(&self, side: DocumentSide) -> usize {
        self.document(side)
            .map(StructuredDocument::section_count)
            .unwrap_or(0)
    }

    #[wasm_bindgen(js_name = sectionText)]
    pub fn section_text(&self, side: DocumentSide, section_id: &str) -> Option<String> {
        self.document(side)
            .and_then(|doc| doc.section_text(section_id))
            .map(str::to_string)
    }

    #[wasm_bindgen(js_name = mappedPolicySection)]
    pub fn mapped_policy_section_wasm(&self, report_section_id: &str) -> Option<String> {
        self.mapped_policy_section(report_section_id)
            .map(str::to_string)
    }

    #[wasm_bindgen(js_name = mappingCount)]
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    #[wasm_bindgen(js_name = setPlan)]
    pub fn set_plan_wasm(&mut self, plan_json: &str) -> Result<(), JsValue> {
        let plan = ActionPlan::from_json(plan_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse plan: {}", e)))?;
        self.set_plan(plan);
        Ok(())
    }

    #[wasm_bindgen(js_name = setValidation)]
    pub fn set_validation_wasm(&mut self, validation_json: &str) -> Result<(), JsValue> {
        let validation = ClaimValidation::from_json(validation_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse validation: {}", e)))?;
        self.set_validation(validation);
        Ok(())
    }

    #[wasm_bindgen(js_name = hasPlan)]
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    #[wasm_bindgen(js_name = hasValidation)]
    pub fn has_validation(&self) -> bool {
        self.validation.is_some()
    }

    /// Resolve a selection against the session's current mapping table.
    #[wasm_bindgen(js_name = resolveSelection)]
    pub fn resolve_selection(
        &self,
        selected_text: &str,
        anchor: Option<Element>,
        root: &Element,
    ) -> Option<String> {
        resolve_dom_selection(selected_text, anchor.as_ref(), root, &self.mappings)
    }

    /// Attach selection listeners for the current document pair.
    ///
    /// The binding captures a snapshot of the mapping table; call again
    /// after `loadDocumentPair` (dropping the old binding) to rebind.
    #[wasm_bindgen(js_name = bindSelection)]
    pub fn bind_selection(
        &self,
        root: HtmlElement,
        on_highlight: js_sys::Function,
    ) -> Result<SelectionBinding, JsValue> {
        SelectionBinding::attach_with(root, self.mappings.clone(), on_highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ClaimStatus, Section};

    fn doc(id: &str, section_ids: &[&str]) -> StructuredDocument {
        StructuredDocument {
            id: id.to_string(),
            name: format!("{}.docx", id),
            sections: section_ids
                .iter()
                .map(|sec| Section {
                    id: sec.to_string(),
                    text: format!("Text of {}", sec),
                })
                .collect(),
        }
    }

    fn mappings() -> SectionMappings {
        SectionMappings::from([("report_sec_1".to_string(), "policy_sec_2".to_string())])
    }

    fn plan() -> ActionPlan {
        ActionPlan {
            plan_id: "plan-1".to_string(),
            claim_id: "claim-1".to_string(),
            status: ClaimStatus::PendingReview,
            actions: Vec::new(),
            total_estimated_time: "0h".to_string(),
            critical_path: Vec::new(),
            next_steps: String::new(),
            timestamp: "2025-10-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_pair_and_mappings() {
        let mut session = ClaimSession::default();
        session.load_documents(
            doc("report-1", &["report_sec_1", "report_sec_2"]),
            doc("policy-1", &["policy_sec_1", "policy_sec_2"]),
            mappings(),
        );

        assert!(session.has_documents());
        assert_eq!(session.section_count(DocumentSide::Report), 2);
        assert_eq!(
            session.section_text(DocumentSide::Policy, "policy_sec_2"),
            Some("Text of policy_sec_2".to_string())
        );
        assert_eq!(
            session.mapped_policy_section("report_sec_1"),
            Some("policy_sec_2")
        );
        assert_eq!(session.mapped_policy_section("report_sec_2"), None);
    }

    #[test]
    fn test_new_pair_clears_derived_state() {
        let mut session = ClaimSession::default();
        session.load_documents(
            doc("report-1", &["report_sec_1"]),
            doc("policy-1", &["policy_sec_1"]),
            mappings(),
        );
        session.set_plan(plan());
        assert!(session.has_plan());

        session.load_documents(
            doc("report-2", &["report_sec_1"]),
            doc("policy-2", &["policy_sec_1"]),
            SectionMappings::new(),
        );

        assert!(!session.has_plan());
        assert!(!session.has_validation());
        assert_eq!(session.mapping_count(), 0);
    }
}
