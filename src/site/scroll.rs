//! Scroll-driven active link highlighting for `SiteKit`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Event, Window};

use super::{Listener, SharedState, SiteKit};
use crate::dom;
use crate::error::Result;
use crate::layout::LayoutSnapshot;
use crate::nav::render::render_highlight;

impl SiteKit {
    pub(crate) fn wire_scroll(
        state: &Rc<RefCell<SharedState>>,
        window: &Window,
    ) -> Result<Listener> {
        let state = state.clone();
        Listener::new(window, "scroll", move |_event: Event| {
            Self::refresh_highlight(&state, false);
        })
    }

    /// Resolve the section under the current scroll position and update the
    /// navigation highlight.
    ///
    /// Geometry is re-read on every call. Without `force` the DOM is only
    /// touched when the active section changed.
    pub(crate) fn refresh_highlight(state: &Rc<RefCell<SharedState>>, force: bool) {
        if let Err(e) = Self::try_refresh_highlight(state, force) {
            log::warn!("highlight update failed: {e}");
        }
    }

    fn try_refresh_highlight(state: &Rc<RefCell<SharedState>>, force: bool) -> Result<()> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        let (changed, nav, config) = {
            let mut s = state.borrow_mut();
            let snapshot = LayoutSnapshot::capture(&window, &document, &s.config)?;
            let active = snapshot.resolve(&s.config);
            let changed = s.nav.set_active(active);
            if !changed && !force {
                return Ok(());
            }
            log::trace!(
                "scroll {} -> {:?}",
                snapshot.scroll_position,
                s.nav.active
            );
            (changed, s.nav.clone(), s.config.clone())
        };

        if changed {
            log::debug!("active section: {:?}", nav.active);
        }
        render_highlight(&nav, &document, &config)
    }
}
