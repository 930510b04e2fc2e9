//! Google reviews widget.
//!
//! The widget fetches place details once per page view, renders up to the
//! configured number of reviews in the configured order, and falls back to a
//! static panel with a phone call-to-action when anything goes wrong.

mod render;
#[cfg(target_arch = "wasm32")]
mod source;

pub use render::{escape_html, render_error, render_place, stars_for_rating};
#[cfg(target_arch = "wasm32")]
pub(crate) use source::load_reviews;

use chrono::DateTime;

use crate::types::{Review, SortOrder};

/// Order reviews and keep at most `max` of them.
///
/// Sorting is stable, so equal keys keep the order the service returned.
pub fn select_reviews(reviews: &[Review], order: SortOrder, max: usize) -> Vec<&Review> {
    let mut selected: Vec<&Review> = reviews.iter().collect();
    match order {
        SortOrder::Recent => selected.sort_by(|a, b| b.time.cmp(&a.time)),
        SortOrder::Rating => selected.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOrder::Relevant => {}
    }
    selected.truncate(max);
    selected
}

/// Format a unix timestamp (seconds) as an ISO `YYYY-MM-DD` date in UTC.
///
/// Timestamps outside chrono's range fall back to the raw seconds.
pub fn format_iso_date(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map_or_else(|| secs.to_string(), |d| d.format("%Y-%m-%d").to_string())
}
