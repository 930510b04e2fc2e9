//! Site configuration.
//!
//! Every field has a default matching the live site, so callers only pass
//! what they want to override:
//!
//! ```javascript
//! const kit = new SiteKit({ headerOffset: 80, reviews: { reviewsToShow: 3 } });
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteKitError};
use crate::types::{MergeRule, SortOrder};

/// Business Place ID used for the reviews widget.
pub const DEFAULT_PLACE_ID: &str = "ChIJjXXGUDsjPIcR_YLI2Pw8o9E";

/// Top-level configuration for all widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Added to `window.scrollY` before resolving the active section
    pub header_offset: f64,
    /// Viewport width (px) at or below which the mobile menu auto-closes
    pub mobile_breakpoint: f64,
    /// Section pairs treated as one contiguous region
    pub merge_rules: Vec<MergeRule>,
    /// Navigation links whose `active` class is managed
    pub nav_link_selector: String,
    /// `href` of the link marked while above the first section
    pub home_href: String,
    pub menu_toggle_selector: String,
    pub nav_container_id: String,
    /// Element whose height is subtracted from smooth-scroll targets
    pub header_selector: String,
    /// `log` level filter name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    pub reviews: ReviewsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            mobile_breakpoint: 1024.0,
            merge_rules: vec![MergeRule::new("about", "service-areas")],
            nav_link_selector: ".main-nav a".to_string(),
            home_href: "index.html".to_string(),
            menu_toggle_selector: ".mobile-menu-toggle".to_string(),
            nav_container_id: "main-nav-container".to_string(),
            header_selector: "header".to_string(),
            log_level: "warn".to_string(),
            reviews: ReviewsConfig::default(),
        }
    }
}

/// Reviews widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewsConfig {
    pub place_id: String,
    /// Maximum number of reviews rendered
    pub reviews_to_show: usize,
    pub sort_by: SortOrder,
    /// Id of the element the widget renders into
    pub container_id: String,
    /// Phone number for the `tel:` link in the fallback panel
    pub phone: String,
    /// Phone number as shown to visitors
    pub phone_display: String,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            place_id: DEFAULT_PLACE_ID.to_string(),
            reviews_to_show: 5,
            sort_by: SortOrder::Recent,
            container_id: "google-reviews".to_string(),
            phone: "+19707596008".to_string(),
            phone_display: "(970) 759-6008".to_string(),
        }
    }
}

impl ReviewsConfig {
    /// Google "write a review" link for the configured place.
    pub fn write_review_url(&self) -> String {
        format!(
            "https://search.google.com/local/writereview?placeid={}",
            self.place_id
        )
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or fails [`SiteConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a configuration object passed from JavaScript.
    /// `undefined` and `null` give the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| SiteKitError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the widgets rely on.
    ///
    /// # Errors
    /// Returns [`SiteKitError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(SiteKitError::Config(format!(
                "headerOffset must be a finite, non-negative number (got {})",
                self.header_offset
            )));
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(SiteKitError::Config(format!(
                "mobileBreakpoint must be positive (got {})",
                self.mobile_breakpoint
            )));
        }

        let selectors = [
            ("navLinkSelector", &self.nav_link_selector),
            ("homeHref", &self.home_href),
            ("menuToggleSelector", &self.menu_toggle_selector),
            ("navContainerId", &self.nav_container_id),
            ("headerSelector", &self.header_selector),
            ("reviews.containerId", &self.reviews.container_id),
            ("reviews.placeId", &self.reviews.place_id),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(SiteKitError::Config(format!("{name} must not be empty")));
        }

        for rule in &self.merge_rules {
            if rule.first.is_empty() || rule.second.is_empty() {
                return Err(SiteKitError::Config(
                    "merge rule section ids must not be empty".to_string(),
                ));
            }
            if rule.first == rule.second {
                return Err(SiteKitError::Config(format!(
                    "merge rule cannot merge '{}' with itself",
                    rule.first
                )));
            }
        }

        self.log_filter()?;
        Ok(())
    }

    /// Parsed `log_level`.
    ///
    /// # Errors
    /// Returns [`SiteKitError::Config`] for an unknown level name.
    pub fn log_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| SiteKitError::Config(format!("unknown logLevel '{}'", self.log_level)))
    }
}
