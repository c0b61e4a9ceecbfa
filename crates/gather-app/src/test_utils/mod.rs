//! Test utilities for driving the controller natively
//!
//! Provides an in-memory [`MemoryDom`], page fixtures matching the site's
//! markup, and a [`RecordingTransport`].

mod memory_dom;
mod transport;

pub use memory_dom::{MemoryDom, NodeId};
pub use transport::{RecordedRequest, RecordingTransport};

use crate::config::SiteConfig;
use crate::controller::Controller;

/// Inquiry form as served by `inquiry.html`
pub const INQUIRY_FORM_HTML: &str = r#"<form id="inquiry-form" novalidate><div class="form-group"><label for="firstName">First Name</label><input class="form-input" id="firstName" name="firstName" type="text"></div><div class="form-group"><label for="lastName">Last Name</label><input class="form-input" id="lastName" name="lastName" type="text"></div><div class="form-group"><label for="email">Email</label><input class="form-input" id="email" name="email" type="email"></div><div class="form-group"><label for="phone">Phone</label><input class="form-input" id="phone" name="phone" type="tel"></div><fieldset class="form-group"><legend>Services</legend><input type="checkbox" name="services" value="Full Planning"><input type="checkbox" name="services" value="Day-Of Coordinating"><input type="checkbox" name="services" value="Mobile Bartending"><input type="checkbox" name="services" value="Catering"><input type="checkbox" name="services" value="Catering Staffing"></fieldset><div class="form-group"><label for="budget">Budget</label><select class="form-input" id="budget" name="budget"><option value="">Select</option><option value="under-5k">Under $5k</option></select></div><div class="form-group"><label for="details">Details</label><textarea class="form-input" id="details" name="details"></textarea></div><button type="submit" id="submit-btn" class="btn btn--primary">Send Inquiry</button><div id="form-message"></div></form>"#;

/// Page skeleton with header/footer placeholders around `main_html`
pub fn page_html(main_html: &str) -> String {
    format!(
        r#"<header id="site-header"></header><main>{main_html}</main><footer id="site-footer"></footer>"#
    )
}

/// A page at `path` with empty placeholders and the given main content
pub fn page(path: &str, main_html: &str) -> MemoryDom {
    MemoryDom::from_html(path, &page_html(main_html))
}

/// The inquiry page, before `DomReady`
pub fn inquiry_page() -> MemoryDom {
    page("/inquiry.html", INQUIRY_FORM_HTML)
}

/// Attached controller for `dom` with `config`, markup already injected
pub fn ready_controller(dom: MemoryDom, config: SiteConfig) -> Controller<MemoryDom> {
    let mut controller = match Controller::attach(dom, config) {
        Ok(controller) => controller,
        Err(e) => panic!("test config must be valid: {e}"),
    };
    controller.dispatch(crate::message::Message::DomReady {
        reduced_motion: false,
    });
    controller
}

/// Fill the required fields with valid values
pub fn fill_valid(dom: &mut MemoryDom) {
    fill(dom, "firstName", "Jane");
    fill(dom, "lastName", "Doe");
    fill(dom, "email", "jane@example.com");
}

/// Set the value of the first input named `name`
pub fn fill(dom: &mut MemoryDom, name: &str, value: &str) {
    use crate::dom::Dom;
    if let Some(input) = dom.first_by_name(name) {
        dom.set_value(&input, value);
    }
}

/// Check the service checkbox with `value`
pub fn check_service(dom: &mut MemoryDom, value: &str) {
    use crate::dom::Dom;
    let body = dom.body();
    let boxes = dom.descendants_by_name(&body, "services");
    if let Some(cb) = boxes.into_iter().find(|cb| dom.value(cb) == value) {
        dom.set_checked(&cb, true);
    }
}
