use crate::error::{LightboxError, Result};
use crate::state::{DEFAULT_ALT, TRIGGER_SELECTOR};
use serde::{Deserialize, Serialize};

/// Runtime options. Every field has a default, so partial objects are fine.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    pub default_alt: String,
    pub trigger_selector: String,
    pub lock_scroll: bool,
    pub close_on_backdrop: bool,
    pub close_on_escape: bool,
    pub debug: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            default_alt: DEFAULT_ALT.to_string(),
            trigger_selector: TRIGGER_SELECTOR.to_string(),
            lock_scroll: true,
            close_on_backdrop: true,
            close_on_escape: true,
            debug: false,
        }
    }
}

impl LightboxConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| LightboxError::Config(e.to_string()))
    }

    /// Reads options passed from JS. `undefined` and `null` mean defaults.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| LightboxError::Config(e.to_string()))
    }
}
