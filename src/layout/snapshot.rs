//! Live geometry read from the rendered document.

use web_sys::{Document, Window};

use super::{insert_merge_partner, resolve_active_section};
use crate::config::SiteConfig;
use crate::dom::{query_all, vertical_extent};
use crate::error::{js_error, Result};
use crate::types::{ActiveSection, Section};

const SECTION_SELECTOR: &str = "section[id]";

/// Scroll position and section geometry for one resolution call.
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    /// `window.scrollY` plus the configured header offset
    pub scroll_position: f64,
    pub sections: Vec<Section>,
}

impl LayoutSnapshot {
    /// Read the current layout. Never cached: the page may have reflowed
    /// since the last call.
    pub fn capture(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        let scroll_y = window
            .scroll_y()
            .map_err(|e| js_error("window.scrollY", &e))?;

        let mut sections: Vec<Section> = query_all(document, SECTION_SELECTOR)?
            .iter()
            .filter_map(|element| {
                let (top, height) = vertical_extent(element)?;
                Some(Section::new(element.id(), top, height))
            })
            .collect();

        // A merge partner without an id is looked up by class name instead.
        // Class names are matched literally, so ids that are not valid CSS
        // identifiers (`2024-projects`) cannot make the lookup throw.
        for rule in &config.merge_rules {
            if sections.iter().any(|s| s.id == rule.second) {
                continue;
            }
            let Some(element) = document.get_elements_by_class_name(&rule.second).item(0) else {
                continue;
            };
            let Some((top, height)) = vertical_extent(&element) else {
                continue;
            };
            insert_merge_partner(&mut sections, rule, Section::new(rule.second.clone(), top, height));
        }

        Ok(Self {
            scroll_position: scroll_y + config.header_offset,
            sections,
        })
    }

    pub fn resolve(&self, config: &SiteConfig) -> ActiveSection {
        resolve_active_section(self.scroll_position, &self.sections, &config.merge_rules)
    }
}
