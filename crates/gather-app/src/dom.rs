//! Abstract document interface, independent of the browser binding.
//!
//! Handlers operate on a [`Dom`] rather than on `web-sys` types so the state
//! machine can be driven from native tests with an in-memory document. The
//! DOM is the single source of truth for navigation state: handlers read
//! class and attribute state at each event instead of mirroring it.

use std::fmt::Debug;

/// Class names and attributes shared between the rendered markup and handlers
pub mod names {
    pub const HAMBURGER: &str = "hamburger";
    pub const MAIN_NAV: &str = "main-nav";
    pub const NAV_LIST: &str = "nav-list";
    pub const NAV_DROPDOWN: &str = "nav-dropdown";
    pub const NAV_DROPDOWN_TOGGLE: &str = "nav-dropdown-toggle";
    pub const NAV_DROPDOWN_MENU: &str = "nav-dropdown-menu";

    pub const IS_OPEN: &str = "is-open";
    pub const IS_ACTIVE: &str = "is-active";
    pub const ACTIVE: &str = "active";
    pub const IS_VISIBLE: &str = "is-visible";
    pub const REVEAL: &str = "reveal";

    pub const FORM_GROUP: &str = "form-group";
    pub const FORM_INPUT: &str = "form-input";
    pub const HAS_ERROR: &str = "has-error";

    pub const SITE_HEADER: &str = "site-header";
    pub const SITE_FOOTER: &str = "site-footer";

    pub const ARIA_EXPANDED: &str = "aria-expanded";
    pub const HREF: &str = "href";

    /// Element ids
    pub const SITE_HEADER_ID: &str = "site-header";
    pub const SITE_FOOTER_ID: &str = "site-footer";
    pub const INQUIRY_FORM_ID: &str = "inquiry-form";
    pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
    pub const FORM_MESSAGE_ID: &str = "form-message";
}

/// Operations the controllers need from a live document.
///
/// All queries return nodes in document order. Mutating operations take
/// `&mut self` so an in-memory implementation needs no interior mutability.
pub trait Dom {
    /// Handle to an element. Equality is node identity.
    type Node: Clone + PartialEq + Debug;

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements in the document carrying `class`
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// Descendants of `root` (excluding `root`) carrying `class`
    fn descendants_by_class(&self, root: &Self::Node, class: &str) -> Vec<Self::Node>;

    /// Descendants of `root` with the given tag name (lowercase)
    fn descendants_by_tag(&self, root: &Self::Node, tag: &str) -> Vec<Self::Node>;

    /// Descendants of `root` whose `name` attribute equals `name`
    fn descendants_by_name(&self, root: &Self::Node, name: &str) -> Vec<Self::Node>;

    /// Nearest inclusive ancestor of `node` carrying `class`
    fn closest(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    fn location_path(&self) -> String;

    // ─────────────────────────────────────────────────────────
    // Classes and attributes
    // ─────────────────────────────────────────────────────────

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip `class` on `node`; returns whether it is present afterwards.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Add or remove `class` to match `present`
    fn set_class(&mut self, node: &Self::Node, class: &str, present: bool) {
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Replace the whole class list (`className`)
    fn set_class_name(&mut self, node: &Self::Node, class_name: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    // ─────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────

    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    // ─────────────────────────────────────────────────────────
    // Form controls
    // ─────────────────────────────────────────────────────────

    /// Current value of an input, select or textarea; empty for other nodes
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&mut self, node: &Self::Node, value: &str);

    fn is_checked(&self, node: &Self::Node) -> bool;

    fn set_checked(&mut self, node: &Self::Node, checked: bool);

    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);

    /// Restore every control in `form` to its default (empty / unchecked)
    fn reset_form(&mut self, form: &Self::Node);

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────

    fn focus(&mut self, node: &Self::Node);

    /// Smooth-scroll `node` to the vertical center of the viewport
    fn scroll_into_view_centered(&mut self, node: &Self::Node);

    /// Lock or release page scrolling (body `overflow`)
    fn set_scroll_locked(&mut self, locked: bool);
}
