/// Typed access to chrome.storage.local
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::error::AnalyzerError;
use crate::selectors::SelectorConfig;

/// Key holding the most recent [`crate::analysis_data::AnalysisResult`]
pub const ANALYSIS_STORAGE_KEY: &str = "linkedinAnalysis";

// Import JS bridge functions
#[wasm_bindgen(module = "/storage.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// Read and decode one key. A missing key is `Ok(None)`.
pub async fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>, AnalyzerError> {
    let value = getStorage(key)
        .await
        .map_err(|e| AnalyzerError::Storage(format!("get {}: {:?}", key, e)))?;

    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    Ok(Some(serde_wasm_bindgen::from_value(value)?))
}

/// Encode and write one key, replacing whatever was there
pub async fn save<T: Serialize>(key: &str, value: &T) -> Result<(), AnalyzerError> {
    let value_js = value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

    setStorage(key, value_js)
        .await
        .map_err(|e| AnalyzerError::Storage(format!("set {}: {:?}", key, e)))
}

/// Pick the selector override if one was stored and readable
pub fn selectors_or_default(stored: Result<Option<SelectorConfig>, AnalyzerError>) -> SelectorConfig {
    match stored {
        Ok(Some(config)) => {
            log::info!("Using selector override from storage");
            config
        }
        Ok(None) => SelectorConfig::default(),
        Err(e) => {
            log::warn!("Ignoring selector override: {}", e);
            SelectorConfig::default()
        }
    }
}
