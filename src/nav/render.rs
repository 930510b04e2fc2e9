//! Apply [`NavState`] to the document.

use web_sys::{Document, Element};

use super::{highlight_target, MenuState, NavState, ACTIVE_CLASS, SHOW_CLASS};
use crate::config::SiteConfig;
use crate::dom::query_all;
use crate::error::{js_error, Result};

/// Show or hide the mobile menu and swap the toggle icon.
pub(crate) fn render_menu(menu: MenuState, container: &Element, toggle: &Element) -> Result<()> {
    container
        .class_list()
        .toggle_with_force(SHOW_CLASS, menu.open)
        .map_err(|e| js_error("menu container class", &e))?;
    let icon = toggle
        .query_selector("i")
        .map_err(|e| js_error("menu icon", &e))?;
    if let Some(icon) = icon {
        icon.set_class_name(menu.icon_class());
    }
    Ok(())
}

/// Clear the `active` class from every navigation link, then mark the link
/// for the current section (or the home link above the first section).
pub(crate) fn render_highlight(
    state: &NavState,
    document: &Document,
    config: &SiteConfig,
) -> Result<()> {
    let links = query_all(document, &config.nav_link_selector)?;
    let target = highlight_target(&state.active, &config.home_href);

    for link in &links {
        link.class_list()
            .remove_1(ACTIVE_CLASS)
            .map_err(|e| js_error("nav link class", &e))?;
    }

    let Some(target) = target else {
        return Ok(());
    };
    if let Some(link) = links
        .iter()
        .find(|link| link.get_attribute("href").as_deref() == Some(target.as_str()))
    {
        link.class_list()
            .add_1(ACTIVE_CLASS)
            .map_err(|e| js_error("nav link class", &e))?;
    }
    Ok(())
}
