//! Error type shared by the component initializers.
//!
//! A missing hook element is never an error; components simply stay inactive.
//! `FxError` covers the cases where the DOM was present but a call on it failed,
//! or where the page shipped a config block that does not parse.

/// Failure raised while wiring or running a component.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// A DOM / Canvas2D call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The `data-fx-config` attribute is not a valid config object.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(text) = value.as_string() {
            return Self::Dom(text);
        }
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => Self::Dom(String::from(err.message())),
            None => Self::Dom(format!("{value:?}")),
        }
    }
}
