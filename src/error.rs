//! Structured error types for sitekit.

/// All errors that can occur while configuring and wiring the site widgets.
#[derive(Debug, thiserror::Error)]
pub enum SiteKitError {
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON decoding error (config files, CLI fixtures).
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required DOM element was not found.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM call threw or returned an unexpected value.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The review source was unavailable or returned unusable data.
    #[error("Reviews unavailable: {0}")]
    Reviews(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiteKitError>;

#[cfg(target_arch = "wasm32")]
impl From<SiteKitError> for wasm_bindgen::JsValue {
    fn from(e: SiteKitError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Describe a thrown JS value for error messages.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(context: &str, value: &wasm_bindgen::JsValue) -> SiteKitError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    SiteKitError::Dom(format!("{context}: {detail}"))
}
