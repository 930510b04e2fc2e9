//! Navigation UI state.
//!
//! The menu flag and the highlighted link live in an explicit [`NavState`]
//! that event handlers mutate through pure transitions; [`render`] applies the
//! state to the document afterwards.

mod menu;
#[cfg(target_arch = "wasm32")]
pub(crate) mod render;

pub use menu::{MenuState, ICON_CLOSED, ICON_OPEN};

use crate::types::ActiveSection;

/// Class toggled on the nav container and set on the highlighted link.
pub const SHOW_CLASS: &str = "show";
pub const ACTIVE_CLASS: &str = "active";

/// Everything the navigation render step needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub active: ActiveSection,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu: MenuState::default(),
            active: ActiveSection::None,
        }
    }
}

impl NavState {
    /// Record a new resolution result. Returns `true` if it differs from the
    /// current one.
    pub fn set_active(&mut self, active: ActiveSection) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }
}

/// `href` of the navigation link to highlight, if any.
pub fn highlight_target(active: &ActiveSection, home_href: &str) -> Option<String> {
    if active.is_top() {
        return Some(home_href.to_string());
    }
    active.section_id().map(|id| format!("#{id}"))
}

/// Section id targeted by an in-page anchor `href` (`#about` -> `about`).
///
/// Bare `#` and non-fragment links are not smooth-scroll targets.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
