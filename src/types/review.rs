use serde::{Deserialize, Serialize};

/// Place details as returned by the Google Places `getDetails` call.
///
/// Field names follow the Places payload so the object can be decoded
/// directly with `serde-wasm-bindgen` or `serde_json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceDetails {
    pub name: Option<String>,
    /// Average rating, 1.0 - 5.0
    pub rating: Option<f64>,
    /// Total number of ratings the place has received
    pub user_ratings_total: Option<u32>,
    pub reviews: Vec<Review>,
    /// Google Maps URL of the place
    pub url: Option<String>,
}

/// A single review from the Places service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub author_name: String,
    /// Star rating, 1 - 5
    pub rating: u8,
    /// Unix timestamp in seconds
    pub time: i64,
    pub text: String,
    pub profile_photo_url: Option<String>,
    pub relative_time_description: Option<String>,
}

/// Order in which reviews are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Recent,
    /// As returned by the service
    Relevant,
    /// Highest rating first
    Rating,
}
