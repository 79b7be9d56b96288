use std::collections::HashMap;

use crate::error::PayloadError;

/// One labeled span of extracted document text.
///
/// Sections arrive from the analysis service in display order; the order is
/// not semantically significant to section lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub id: String,
    pub text: String,
}

/// A decomposed report or policy as delivered by the analysis service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StructuredDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "structuredContent")]
    pub sections: Vec<Section>,
}

impl StructuredDocument {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(PayloadError::decode("structured document"))
    }

    /// Text of the section with the given id, if present.
    pub fn section_text(&self, section_id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.id == section_id)
            .map(|section| section.text.as_str())
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// Cross-reference from report-section ids to policy-section ids.
///
/// Keys are unique; at most one policy section per report section. Supplied
/// wholesale at document-load time and immutable for the lifetime of the
/// loaded document pair.
pub type SectionMappings = HashMap<String, String>;

/// Decode a mapping table from the service's flat JSON object.
pub fn mappings_from_json(raw: &str) -> Result<SectionMappings, PayloadError> {
    serde_json::from_str(raw).map_err(PayloadError::decode("section mappings"))
}
