//! sitekit - interactivity for a small business website
//!
//! Compiled to WebAssembly and loaded by the site's pages:
//! - Collapsible mobile navigation menu
//! - Smooth scrolling for in-page anchors
//! - Active navigation link follows the section in view, with configurable
//!   section merging
//! - Google reviews widget with an offline fallback panel
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SiteKit } from 'sitekit';
//! await init();
//! document.addEventListener('DOMContentLoaded', () => {
//!     const kit = new SiteKit({ reviews: { reviewsToShow: 5, sortBy: 'recent' } });
//! });
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod nav;
pub mod reviews;
pub mod types;

// Browser glue
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod site;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use site::SiteKit;

pub use config::{ReviewsConfig, SiteConfig};
pub use layout::resolve_active_section;
pub use types::*;

/// Resolve a scroll position against a list of sections
///
/// # Arguments
/// * `scroll_position` - Scroll offset plus header offset, in pixels
/// * `sections` - Array of `{id, top, height}` in document order
/// * `merge_rules` - Array of `{first, second}` section id pairs
///
/// # Returns
/// `{kind: "top"}`, `{kind: "section", id}` or `{kind: "none"}`
///
/// # Errors
/// Returns an error if `sections` or `merge_rules` have the wrong shape.
#[wasm_bindgen(js_name = resolveActiveSection)]
pub fn resolve_active_section_js(
    scroll_position: f64,
    sections: JsValue,
    merge_rules: JsValue,
) -> Result<JsValue, JsValue> {
    let sections: Vec<Section> = serde_wasm_bindgen::from_value(sections)
        .map_err(|e| JsValue::from_str(&format!("Invalid sections: {e}")))?;
    let rules: Vec<MergeRule> = if merge_rules.is_undefined() || merge_rules.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(merge_rules)
            .map_err(|e| JsValue::from_str(&format!("Invalid merge rules: {e}")))?
    };

    let active = resolve_active_section(scroll_position, &sections, &rules);
    serde_wasm_bindgen::to_value(&active)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Render the reviews panel for a place details object as an HTML string
///
/// Dates are formatted as ISO `YYYY-MM-DD`.
///
/// # Errors
/// Returns an error if `place` or `config` cannot be decoded.
#[wasm_bindgen(js_name = renderReviews)]
pub fn render_reviews_js(place: JsValue, config: JsValue) -> Result<String, JsValue> {
    let place: PlaceDetails = serde_wasm_bindgen::from_value(place)
        .map_err(|e| JsValue::from_str(&format!("Invalid place details: {e}")))?;
    let config: ReviewsConfig = if config.is_undefined() || config.is_null() {
        ReviewsConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid reviews config: {e}")))?
    };
    Ok(reviews::render_place(
        &place,
        &config,
        &reviews::format_iso_date,
    ))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
