//! Navigation handlers: mobile overlay, dropdowns, escape and breakpoint.
//!
//! Every handler reads the current class/attribute state from the DOM at the
//! moment of the event. Nothing is cached between events.

use tracing::{debug, trace};

use crate::dom::{names, Dom};
use crate::input_key::InputKey;
use crate::message::Message;

use super::UpdateResult;

/// Delegated click handler.
///
/// Dispatch is on the target's ancestry, first match wins:
/// 1. inside `.hamburger` → toggle the mobile overlay
/// 2. inside `.nav-dropdown-toggle` → toggle that dropdown only
/// 3. outside every `.nav-dropdown` → close all dropdowns
pub fn handle_click<D: Dom>(dom: &mut D, target: &D::Node) -> UpdateResult<D::Node> {
    if let Some(hamburger) = dom.closest(target, names::HAMBURGER) {
        toggle_mobile_nav(dom, &hamburger);
        return UpdateResult::none();
    }

    if let Some(toggle) = dom.closest(target, names::NAV_DROPDOWN_TOGGLE) {
        toggle_dropdown(dom, &toggle);
        return UpdateResult::none();
    }

    if dom.closest(target, names::NAV_DROPDOWN).is_none() {
        close_all_dropdowns(dom);
    }
    UpdateResult::none()
}

/// Map a key press to a message
pub fn handle_key<N>(key: InputKey) -> Option<Message<N>> {
    match key {
        InputKey::Esc => Some(Message::DismissMenus),
        _ => None,
    }
}

/// Close the mobile overlay and every dropdown
pub fn handle_dismiss<D: Dom>(dom: &mut D) -> UpdateResult<D::Node> {
    close_mobile_nav(dom);
    close_all_dropdowns(dom);
    UpdateResult::none()
}

/// Desktop media query changed. Entering the desktop range closes the mobile
/// overlay; open dropdowns are left as they are.
pub fn handle_breakpoint<D: Dom>(dom: &mut D, desktop: bool) -> UpdateResult<D::Node> {
    if desktop {
        close_mobile_nav(dom);
    }
    UpdateResult::none()
}

fn toggle_mobile_nav<D: Dom>(dom: &mut D, hamburger: &D::Node) {
    let Some(nav) = dom.elements_by_class(names::MAIN_NAV).into_iter().next() else {
        trace!("hamburger clicked with no .main-nav in the document");
        return;
    };

    let open = dom.toggle_class(&nav, names::IS_OPEN);
    dom.set_class(hamburger, names::IS_ACTIVE, open);
    dom.set_attribute(hamburger, names::ARIA_EXPANDED, bool_attr(open));
    dom.set_scroll_locked(open);
    debug!(open, "mobile nav toggled");
}

fn toggle_dropdown<D: Dom>(dom: &mut D, toggle: &D::Node) {
    let Some(dropdown) = dom.closest(toggle, names::NAV_DROPDOWN) else {
        trace!("dropdown toggle outside any .nav-dropdown");
        return;
    };

    let open = dom.toggle_class(&dropdown, names::IS_OPEN);
    dom.set_attribute(toggle, names::ARIA_EXPANDED, bool_attr(open));
    debug!(open, "dropdown toggled");
}

/// Close the mobile overlay if it is open. No-op otherwise.
pub(crate) fn close_mobile_nav<D: Dom>(dom: &mut D) {
    let Some(nav) = dom
        .elements_by_class(names::MAIN_NAV)
        .into_iter()
        .find(|nav| dom.has_class(nav, names::IS_OPEN))
    else {
        return;
    };

    dom.remove_class(&nav, names::IS_OPEN);
    if let Some(hamburger) = dom.elements_by_class(names::HAMBURGER).into_iter().next() {
        dom.remove_class(&hamburger, names::IS_ACTIVE);
        dom.set_attribute(&hamburger, names::ARIA_EXPANDED, "false");
    }
    dom.set_scroll_locked(false);
    debug!("mobile nav closed");
}

/// Close every open dropdown and reset its toggle's expanded state
pub(crate) fn close_all_dropdowns<D: Dom>(dom: &mut D) {
    let open: Vec<_> = dom
        .elements_by_class(names::NAV_DROPDOWN)
        .into_iter()
        .filter(|dd| dom.has_class(dd, names::IS_OPEN))
        .collect();

    for dropdown in &open {
        dom.remove_class(dropdown, names::IS_OPEN);
        if let Some(toggle) = dom
            .descendants_by_class(dropdown, names::NAV_DROPDOWN_TOGGLE)
            .into_iter()
            .next()
        {
            dom.set_attribute(&toggle, names::ARIA_EXPANDED, "false");
        }
    }

    if !open.is_empty() {
        debug!(count = open.len(), "dropdowns closed");
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
