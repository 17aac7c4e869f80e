use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackdropError {
    #[error("no global `window` exists")]
    WindowUnavailable,
    #[error("canvas ref is not attached to a canvas element")]
    CanvasMissing,
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
    #[error("viewport dimensions unavailable")]
    ViewportUnavailable,
    #[error("hex field already started")]
    AlreadyStarted,
    #[error("host call failed: {0}")]
    Host(String),
}

impl From<JsValue> for BackdropError {
    fn from(value: JsValue) -> Self {
        BackdropError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
