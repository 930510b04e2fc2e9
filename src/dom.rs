//! Small DOM helpers shared by the wasm32 glue.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{js_error, Result, SiteKitError};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteKitError::MissingElement("window".to_string()))
}

pub(crate) fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| SiteKitError::MissingElement("document".to_string()))
}

/// Collect every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| js_error(selector, &e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector`, if any.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| js_error(selector, &e))
}

/// Vertical geometry `(offsetTop, offsetHeight)` of an element.
pub(crate) fn vertical_extent(element: &Element) -> Option<(f64, f64)> {
    let html = element.dyn_ref::<HtmlElement>()?;
    Some((f64::from(html.offset_top()), f64::from(html.offset_height())))
}

/// Viewport width in CSS pixels.
pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}
