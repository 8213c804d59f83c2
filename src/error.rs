/// Error types shared by the content script and the popup
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyzerError {
    /// The page or tab is not on linkedin.com
    #[error("not a LinkedIn page: {host}")]
    WrongSite { host: String },

    /// Tab query or message round-trip failed
    #[error("message channel failed: {0}")]
    Channel(String),

    /// No window or document in this context
    #[error("page document unavailable")]
    NoDocument,

    #[error("storage access failed: {0}")]
    Storage(String),

    /// A JS value did not have the expected shape
    #[error("failed to decode value: {0}")]
    Decode(String),

    /// The page replied with a failure envelope
    #[error("page reported failure: {0}")]
    Remote(String),
}

impl AnalyzerError {
    pub fn wrong_site(host: impl Into<String>) -> Self {
        AnalyzerError::WrongSite { host: host.into() }
    }
}

impl From<serde_wasm_bindgen::Error> for AnalyzerError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        AnalyzerError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::Decode(e.to_string())
    }
}
