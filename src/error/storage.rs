#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preferences file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("browser storage error: {0}")]
    Js(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(pub String);

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for StoreError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StoreError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
