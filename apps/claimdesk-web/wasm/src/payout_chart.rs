//! Payout-range chart state.

use claim_engine::chart_geometry;
use shared_types::{ChartGeometry, PayoutPayload};
use wasm_bindgen::prelude::*;

/// Holds the last payout payload and the geometry derived from it.
///
/// The geometry is recomputed wholesale whenever the payload is replaced
/// and discarded with it; nothing here is persisted.
#[wasm_bindgen]
pub struct PayoutChart {
    payload: Option<PayoutPayload>,
    geometry: Option<ChartGeometry>,
}

#[allow(clippy::derivable_impls)]
impl Default for PayoutChart {
    fn default() -> Self {
        Self {
            payload: None,
            geometry: None,
        }
    }
}

impl PayoutChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payload(&mut self, payload: PayoutPayload) {
        self.geometry = Some(chart_geometry(&payload));
        self.payload = Some(payload);
    }

    pub fn clear(&mut self) {
        self.payload = None;
        self.geometry = None;
    }

    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    pub fn payload(&self) -> Option<&PayoutPayload> {
        self.payload.as_ref()
    }
}

// WASM bindings
#[wasm_bindgen]
impl PayoutChart {
    #[wasm_bindgen(constructor)]
    pub fn new_wasm() -> Self {
        console_error_panic_hook::set_once();
        Self::new()
    }

    #[wasm_bindgen(js_name = setPayload)]
    pub fn set_payload_wasm(&mut self, payload_json: &str) -> Result<(), JsValue> {
        let payload = PayoutPayload::from_json(payload_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse payload: {}", e)))?;
        self.set_payload(payload);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearPayload)]
    pub fn clear_wasm(&mut self) {
        self.clear();
    }

    #[wasm_bindgen(js_name = hasData)]
    pub fn has_data(&self) -> bool {
        self.geometry.is_some()
    }

    #[wasm_bindgen(js_name = getGeometryJson)]
    pub fn get_geometry_json(&self) -> Option<String> {
        self.geometry
            .as_ref()
            .and_then(|geometry| serde_json::to_string(geometry).ok())
    }
}
