use std::sync::Arc;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error("Could not access the browser window")]
    MissingWindow,
    #[error("Local storage is not available")]
    MissingStorage,
    #[error("Could not access local storage due to {0}")]
    Storage(String),
    #[error(transparent)]
    Codec(#[from] Arc<serde_json::Error>),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Arc::new(value).into()
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
