use thiserror::Error;

/// Decode failure for a payload received from the analysis service.
///
/// Payloads arrive as best-effort AI output; a failed decode reports what
/// could not be read and leaves the caller's existing state untouched.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("failed to decode {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub(crate) fn decode(kind: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Decode { kind, source }
    }
}
