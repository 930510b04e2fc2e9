//! Google Places client (wasm32).

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use super::{render_error, render_place};
use crate::config::ReviewsConfig;
use crate::error::{js_error, Result, SiteKitError};
use crate::types::PlaceDetails;

const DETAIL_FIELDS: [&str; 5] = ["name", "rating", "user_ratings_total", "reviews", "url"];
const STATUS_OK: &str = "OK";

#[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
extern "C" {
    type PlacesService;

    #[wasm_bindgen(constructor)]
    fn new(attr_container: &HtmlElement) -> PlacesService;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(method, js_name = getDetails)]
    fn get_details(this: &PlacesService, request: &JsValue, callback: &Function);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailsRequest<'a> {
    place_id: &'a str,
    fields: &'a [&'a str],
}

/// `true` once the Maps JavaScript API with the places library is on the page.
fn places_api_loaded() -> bool {
    ["google", "maps", "places", "PlacesService"]
        .iter()
        .try_fold(JsValue::from(js_sys::global()), |obj, key| {
            Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

/// Request place details once. Resolves only for an `OK` status with a place.
async fn fetch_place_details(place_id: &str) -> Result<PlaceDetails> {
    if !places_api_loaded() {
        return Err(SiteKitError::Reviews(
            "Google Maps places library is not loaded".to_string(),
        ));
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteKitError::MissingElement("document".to_string()))?;
    let attribution: HtmlElement = document
        .create_element("div")
        .map_err(|e| js_error("create attribution div", &e))?
        .dyn_into()
        .map_err(|_| SiteKitError::Dom("attribution div is not an HtmlElement".to_string()))?;

    let service = PlacesService::new(&attribution);
    let request = serde_wasm_bindgen::to_value(&DetailsRequest {
        place_id,
        fields: &DETAIL_FIELDS,
    })
    .map_err(|e| SiteKitError::Reviews(e.to_string()))?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let callback = Closure::once_into_js(move |place: JsValue, status: JsValue| {
            let ok = status.as_string().as_deref() == Some(STATUS_OK);
            if ok && !place.is_null() && !place.is_undefined() {
                let _ = resolve.call1(&JsValue::NULL, &place);
            } else {
                let _ = reject.call1(&JsValue::NULL, &status);
            }
        });
        service.get_details(&request, callback.unchecked_ref());
    });

    let place = JsFuture::from(promise).await.map_err(|status| {
        SiteKitError::Reviews(format!(
            "Places status {}",
            status.as_string().unwrap_or_else(|| "unknown".to_string())
        ))
    })?;
    serde_wasm_bindgen::from_value(place).map_err(|e| SiteKitError::Reviews(e.to_string()))
}

fn locale_date(secs: i64) -> String {
    let millis = secs as f64 * 1000.0;
    js_sys::Date::new(&JsValue::from_f64(millis))
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Fetch reviews and render them into `container`, or the fallback panel on
/// any failure.
pub(crate) async fn load_reviews(config: ReviewsConfig, container: Element) {
    let html = match fetch_place_details(&config.place_id).await {
        Ok(place) => {
            log::debug!(
                "loaded {} reviews for {}",
                place.reviews.len(),
                place.name.as_deref().unwrap_or("place")
            );
            render_place(&place, &config, &locale_date)
        }
        Err(e) => {
            log::warn!("{e}");
            render_error(&config)
        }
    };
    container.set_inner_html(&html);
}
