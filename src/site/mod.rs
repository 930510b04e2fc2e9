//! Main SiteKit struct - the entry point wiring the widgets into the page.
//!
//! This module provides the WASM-exported `SiteKit` struct that handles:
//! - Collapsing and expanding the mobile navigation menu
//! - Smooth scrolling for in-page anchor links
//! - Highlighting the navigation link of the section in view
//! - Loading the Google reviews widget
//!
//! All listeners are registered when the struct is created and removed when
//! it is dropped (`kit.free()` from JavaScript).

mod events;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::{js_error, Result};
use crate::logging;
use crate::nav::NavState;

/// Mobile menu elements; both must exist for the menu to be wired.
pub(crate) struct MenuElements {
    pub(crate) toggle: Element,
    pub(crate) container: Element,
}

/// Shared state that can be accessed by event handlers
pub(crate) struct SharedState {
    pub(crate) config: SiteConfig,
    pub(crate) nav: NavState,
    pub(crate) menu: Option<MenuElements>,
}

/// An event listener that is removed again when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| js_error(event, &e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Site interactivity exported to JavaScript
#[wasm_bindgen]
pub struct SiteKit {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)]
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SiteKit {
    /// Wire every widget into the current document.
    ///
    /// `config` is an optional object overriding the defaults (see
    /// `SiteConfig`). Call after `DOMContentLoaded`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the document is
    /// not available.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<SiteKit, JsValue> {
        console_error_panic_hook::set_once();

        let config = SiteConfig::from_js(config)?;
        logging::init(config.log_filter()?);

        let window = dom::window()?;
        let document = dom::document(&window)?;

        let toggle = dom::query(&document, &config.menu_toggle_selector)?;
        let container = document.get_element_by_id(&config.nav_container_id);
        let menu = match (toggle, container) {
            (Some(toggle), Some(container)) => Some(MenuElements { toggle, container }),
            _ => {
                log::debug!("mobile menu elements not found; menu disabled");
                None
            }
        };

        let state = Rc::new(RefCell::new(SharedState {
            config,
            nav: NavState::default(),
            menu,
        }));

        let mut listeners = Vec::new();
        listeners.extend(Self::wire_menu(&state, &window, &document)?);
        listeners.extend(Self::wire_anchors(&state, &document)?);
        listeners.push(Self::wire_scroll(&state, &window)?);

        Self::load_reviews(&state, &document);
        Self::refresh_highlight(&state, true);

        Ok(SiteKit { state, listeners })
    }

    /// Re-resolve the active section and re-apply the highlight.
    pub fn refresh(&self) {
        Self::refresh_highlight(&self.state, true);
    }

    /// Currently highlighted section as `{kind: "top" | "section" | "none", id?}`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be converted to JavaScript.
    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> std::result::Result<JsValue, JsValue> {
        let s = self.state.borrow();
        serde_wasm_bindgen::to_value(&s.nav.active)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.state.borrow().nav.menu.open
    }

    /// Open or close the mobile menu as if the toggle was clicked.
    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&self) {
        Self::apply_menu(&self.state, |menu, _| menu.toggle());
    }

    fn load_reviews(state: &Rc<RefCell<SharedState>>, document: &web_sys::Document) {
        let reviews = state.borrow().config.reviews.clone();
        let Some(container) = document.get_element_by_id(&reviews.container_id) else {
            log::debug!("#{} not found; reviews widget disabled", reviews.container_id);
            return;
        };
        wasm_bindgen_futures::spawn_local(crate::reviews::load_reviews(reviews, container));
    }
}
