//! Mobile menu open/closed state.

/// Icon class while the menu is open.
pub const ICON_OPEN: &str = "fas fa-times";
/// Icon class while the menu is closed.
pub const ICON_CLOSED: &str = "fas fa-bars";

/// Collapsible navigation menu.
///
/// Each transition returns `true` when the state changed and the menu needs
/// re-rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Toggle button clicked.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    /// A link inside the menu was clicked. Closes on mobile-width viewports.
    pub fn link_clicked(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        viewport_width <= breakpoint && self.close()
    }

    /// A click landed somewhere in the document. Closes on mobile-width
    /// viewports unless the click was inside the menu or on the toggle.
    pub fn outside_click(
        &mut self,
        viewport_width: f64,
        breakpoint: f64,
        inside_menu: bool,
    ) -> bool {
        viewport_width <= breakpoint && !inside_menu && self.close()
    }

    /// The window was resized. The desktop layout never shows the mobile menu.
    pub fn resized(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        viewport_width > breakpoint && self.close()
    }

    pub fn icon_class(self) -> &'static str {
        if self.open {
            ICON_OPEN
        } else {
            ICON_CLOSED
        }
    }

    fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}
