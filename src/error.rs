use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LightboxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid lightbox options: {0}")]
    Config(String),
}

impl From<JsValue> for LightboxError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        LightboxError::Dom(message)
    }
}

impl From<LightboxError> for JsValue {
    fn from(err: LightboxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LightboxError>;
