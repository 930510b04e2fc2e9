//! Menu and anchor click handlers for `SiteKit`.
//!
//! Handlers mutate `NavState` through its pure transitions while holding the
//! borrow, then release it before touching the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Node, ScrollBehavior, ScrollToOptions, Window};

use super::{Listener, SharedState, SiteKit};
use crate::dom;
use crate::error::{js_error, Result};
use crate::layout::scroll_target;
use crate::nav::render::render_menu;
use crate::nav::{anchor_target_id, MenuState};

impl SiteKit {
    /// Run a menu transition and re-render the menu if it changed.
    pub(crate) fn apply_menu(
        state: &Rc<RefCell<SharedState>>,
        transition: impl FnOnce(&mut MenuState, f64) -> bool,
    ) {
        let (changed, menu, elements) = {
            let mut s = state.borrow_mut();
            let breakpoint = s.config.mobile_breakpoint;
            let changed = transition(&mut s.nav.menu, breakpoint);
            let elements = s
                .menu
                .as_ref()
                .map(|m| (m.container.clone(), m.toggle.clone()));
            (changed, s.nav.menu, elements)
        };
        let (true, Some((container, toggle))) = (changed, elements) else {
            return;
        };
        if let Err(e) = render_menu(menu, &container, &toggle) {
            log::warn!("menu render failed: {e}");
        }
    }

    /// Toggle button, in-menu links, outside clicks and resize.
    pub(crate) fn wire_menu(
        state: &Rc<RefCell<SharedState>>,
        window: &Window,
        document: &Document,
    ) -> Result<Vec<Listener>> {
        let Some((toggle, container)) = state
            .borrow()
            .menu
            .as_ref()
            .map(|m| (m.toggle.clone(), m.container.clone()))
        else {
            return Ok(Vec::new());
        };
        let mut listeners = Vec::new();

        {
            let state = state.clone();
            listeners.push(Listener::new(&toggle, "click", move |event: Event| {
                event.prevent_default();
                Self::apply_menu(&state, |menu, _| menu.toggle());
            })?);
        }

        let links = container
            .query_selector_all("a")
            .map_err(|e| js_error("menu links", &e))?;
        for node in (0..links.length()).filter_map(|i| links.get(i)) {
            let state = state.clone();
            let window = window.clone();
            listeners.push(Listener::new(&node, "click", move |_event: Event| {
                let width = dom::viewport_width(&window);
                Self::apply_menu(&state, |menu, breakpoint| {
                    menu.link_clicked(width, breakpoint)
                });
            })?);
        }

        {
            let state = state.clone();
            let window = window.clone();
            listeners.push(Listener::new(document, "click", move |event: Event| {
                let target = event.target();
                let target = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
                let inside = container.contains(target) || toggle.contains(target);
                let width = dom::viewport_width(&window);
                Self::apply_menu(&state, |menu, breakpoint| {
                    menu.outside_click(width, breakpoint, inside)
                });
            })?);
        }

        {
            let state = state.clone();
            let handler_window = window.clone();
            listeners.push(Listener::new(window, "resize", move |_event: Event| {
                let width = dom::viewport_width(&handler_window);
                Self::apply_menu(&state, |menu, breakpoint| menu.resized(width, breakpoint));
            })?);
        }

        Ok(listeners)
    }

    /// Smooth scrolling for every `a[href^="#"]` on the page.
    pub(crate) fn wire_anchors(
        state: &Rc<RefCell<SharedState>>,
        document: &Document,
    ) -> Result<Vec<Listener>> {
        let anchors = dom::query_all(document, r##"a[href^="#"]"##)?;
        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let state = state.clone();
            let handler_anchor = anchor.clone();
            listeners.push(Listener::new(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let href = handler_anchor.get_attribute("href").unwrap_or_default();
                if let Err(e) = Self::smooth_scroll_to(&state, &href) {
                    log::warn!("smooth scroll to {href} failed: {e}");
                }
            })?);
        }
        Ok(listeners)
    }

    fn smooth_scroll_to(state: &Rc<RefCell<SharedState>>, href: &str) -> Result<()> {
        let Some(id) = anchor_target_id(href) else {
            return Ok(());
        };
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let Some(section) = document.get_element_by_id(id) else {
            log::debug!("anchor target #{id} not found");
            return Ok(());
        };

        let header_selector = state.borrow().config.header_selector.clone();
        let header_height = dom::query(&document, &header_selector)?
            .as_ref()
            .and_then(dom::vertical_extent)
            .map_or(0.0, |(_, height)| height);
        let section_top = dom::vertical_extent(&section).map_or(0.0, |(top, _)| top);

        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section_top, header_height));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}
