use shared_types::PayoutPayload;
use wasm_bindgen::prelude::*;

// Export modules
pub mod calendar_panel;
pub mod checklist_panel;
pub mod highlight;
pub mod payout_chart;
pub mod session;

// Re-export commonly used items
pub use calendar_panel::{CalendarPanel, GridCell};
pub use checklist_panel::{ChecklistItem, ChecklistPanel};
pub use highlight::{resolve_dom_selection, DomSectionNode, SelectionBinding};
pub use payout_chart::PayoutChart;
pub use session::{ClaimSession, DocumentSide};

/// WASM entry point: derive chart geometry from a raw payout payload.
///
/// Parsing failures inside the payload's fields resolve to zeros; only a
/// payload that is not valid JSON at all reports an error.
#[wasm_bindgen]
pub fn compute_payout_geometry(payload_json: &str) -> Result<String, JsValue> {
    let payload = PayoutPayload::from_json(payload_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse payload: {}", e)))?;

    let geometry = claim_engine::chart_geometry(&payload);
    serde_json::to_string(&geometry)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize geometry: {}", e)))
}
