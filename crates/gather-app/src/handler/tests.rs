//! Tests for handler module

use super::*;
use crate::config::SiteConfig;
use crate::dom::{names, Dom};
use crate::input_key::InputKey;
use crate::state::{AppState, SubmissionState};
use crate::test_utils::{
    check_service, fill, fill_valid, inquiry_page, page, ready_controller, MemoryDom, NodeId,
};
use crate::transport::TransportOutcome;
use chrono::DateTime;

fn nav_controller(path: &str) -> crate::Controller<MemoryDom> {
    ready_controller(page(path, ""), SiteConfig::default())
}

fn first(dom: &MemoryDom, class: &str) -> NodeId {
    dom.first_by_class(class)
        .unwrap_or_else(|| panic!("no .{class} in document"))
}

fn is_open(dom: &MemoryDom, class: &str) -> bool {
    dom.has_class(&first(dom, class), names::IS_OPEN)
}

fn aria_expanded(dom: &MemoryDom, class: &str) -> Option<String> {
    dom.attribute(&first(dom, class), names::ARIA_EXPANDED)
}

fn click(controller: &mut crate::Controller<MemoryDom>, target: NodeId) {
    let actions = controller.dispatch(Message::Click { target });
    assert!(actions.is_empty());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_hamburger_opens_mobile_nav() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);

    click(&mut c, hamburger);

    let dom = c.dom();
    assert!(is_open(dom, names::MAIN_NAV));
    assert!(dom.has_class(&hamburger, names::IS_ACTIVE));
    assert_eq!(aria_expanded(dom, names::HAMBURGER).as_deref(), Some("true"));
    assert!(dom.is_scroll_locked());
}

#[test]
fn test_hamburger_click_on_inner_span_dispatches_by_ancestry() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    let bar = c.dom().descendants_by_tag(&hamburger, "span")[0];

    click(&mut c, bar);

    assert!(is_open(c.dom(), names::MAIN_NAV));
}

#[test]
fn test_hamburger_double_toggle_round_trips() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);

    click(&mut c, hamburger);
    click(&mut c, hamburger);

    let dom = c.dom();
    assert!(!is_open(dom, names::MAIN_NAV));
    assert!(!dom.has_class(&hamburger, names::IS_ACTIVE));
    assert_eq!(aria_expanded(dom, names::HAMBURGER).as_deref(), Some("false"));
    assert!(!dom.is_scroll_locked());
}

#[test]
fn test_hamburger_without_nav_is_noop() {
    let mut c = ready_controller(
        page(
            "/index.html",
            r#"<button class="hamburger" aria-expanded="false"></button>"#,
        ),
        SiteConfig::default(),
    );
    // Drop the injected header so only the stray button remains
    let header = c.dom().element_by_id(names::SITE_HEADER_ID).unwrap();
    c.dom_mut().set_inner_html(&header, "");
    let hamburger = first(c.dom(), names::HAMBURGER);

    click(&mut c, hamburger);

    assert!(!c.dom().has_class(&hamburger, names::IS_ACTIVE));
    assert!(!c.dom().is_scroll_locked());
}

#[test]
fn test_dropdown_toggle_round_trips() {
    let mut c = nav_controller("/index.html");
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);

    click(&mut c, toggle);
    assert!(is_open(c.dom(), names::NAV_DROPDOWN));
    assert_eq!(
        aria_expanded(c.dom(), names::NAV_DROPDOWN_TOGGLE).as_deref(),
        Some("true")
    );

    click(&mut c, toggle);
    assert!(!is_open(c.dom(), names::NAV_DROPDOWN));
    assert_eq!(
        aria_expanded(c.dom(), names::NAV_DROPDOWN_TOGGLE).as_deref(),
        Some("false")
    );
}

#[test]
fn test_dropdown_is_independent_of_mobile_nav() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);

    click(&mut c, hamburger);
    click(&mut c, toggle);
    assert!(is_open(c.dom(), names::MAIN_NAV));
    assert!(is_open(c.dom(), names::NAV_DROPDOWN));

    click(&mut c, hamburger);
    assert!(!is_open(c.dom(), names::MAIN_NAV));
    assert!(is_open(c.dom(), names::NAV_DROPDOWN));
}

#[test]
fn test_click_outside_closes_dropdowns_only() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);
    click(&mut c, hamburger);
    click(&mut c, toggle);

    let outside = c.dom().link_with_href("about.html").unwrap();
    click(&mut c, outside);

    assert!(!is_open(c.dom(), names::NAV_DROPDOWN));
    assert_eq!(
        aria_expanded(c.dom(), names::NAV_DROPDOWN_TOGGLE).as_deref(),
        Some("false")
    );
    assert!(is_open(c.dom(), names::MAIN_NAV));
    assert!(c.dom().is_scroll_locked());
}

#[test]
fn test_click_inside_dropdown_menu_keeps_it_open() {
    let mut c = nav_controller("/index.html");
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);
    click(&mut c, toggle);

    let service_link = c.dom().link_with_href("services/catering.html").unwrap();
    click(&mut c, service_link);

    assert!(is_open(c.dom(), names::NAV_DROPDOWN));
}

#[test]
fn test_escape_closes_everything() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);
    click(&mut c, hamburger);
    click(&mut c, toggle);

    let actions = c.dispatch(Message::Key(InputKey::Esc));

    assert!(actions.is_empty());
    let dom = c.dom();
    assert!(!is_open(dom, names::MAIN_NAV));
    assert!(!is_open(dom, names::NAV_DROPDOWN));
    assert!(!dom.has_class(&hamburger, names::IS_ACTIVE));
    assert_eq!(aria_expanded(dom, names::HAMBURGER).as_deref(), Some("false"));
    assert_eq!(
        aria_expanded(dom, names::NAV_DROPDOWN_TOGGLE).as_deref(),
        Some("false")
    );
    assert!(!dom.is_scroll_locked());
}

#[test]
fn test_escape_when_already_closed_is_noop() {
    let mut c = nav_controller("/index.html");

    c.dispatch(Message::Key(InputKey::Esc));
    c.dispatch(Message::Key(InputKey::Esc));

    assert!(!is_open(c.dom(), names::MAIN_NAV));
    assert!(!is_open(c.dom(), names::NAV_DROPDOWN));
    assert!(!c.dom().is_scroll_locked());
}

#[test]
fn test_other_keys_are_ignored() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    click(&mut c, hamburger);

    c.dispatch(Message::Key(InputKey::Enter));
    c.dispatch(Message::Key(InputKey::Char('q')));

    assert!(is_open(c.dom(), names::MAIN_NAV));
}

#[test]
fn test_escape_key_maps_to_dismiss() {
    assert_eq!(
        nav::handle_key::<NodeId>(InputKey::Esc),
        Some(Message::DismissMenus)
    );
    assert_eq!(nav::handle_key::<NodeId>(InputKey::Tab), None);
}

#[test]
fn test_breakpoint_closes_mobile_nav_but_not_dropdowns() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    let toggle = first(c.dom(), names::NAV_DROPDOWN_TOGGLE);
    click(&mut c, hamburger);
    click(&mut c, toggle);

    c.dispatch(Message::BreakpointChanged { desktop: true });

    assert!(!is_open(c.dom(), names::MAIN_NAV));
    assert!(!c.dom().is_scroll_locked());
    assert!(is_open(c.dom(), names::NAV_DROPDOWN));
}

#[test]
fn test_breakpoint_when_closed_is_noop() {
    let mut c = nav_controller("/index.html");

    c.dispatch(Message::BreakpointChanged { desktop: true });

    assert!(!is_open(c.dom(), names::MAIN_NAV));
    assert_eq!(aria_expanded(c.dom(), names::HAMBURGER).as_deref(), Some("false"));
}

#[test]
fn test_leaving_desktop_range_keeps_state() {
    let mut c = nav_controller("/index.html");
    let hamburger = first(c.dom(), names::HAMBURGER);
    click(&mut c, hamburger);

    c.dispatch(Message::BreakpointChanged { desktop: false });

    assert!(is_open(c.dom(), names::MAIN_NAV));
}

#[test]
fn test_multiple_dropdowns_do_not_interfere() {
    let mut dom = MemoryDom::from_html(
        "/index.html",
        r#"<nav class="main-nav"><ul class="nav-list">
<li class="nav-dropdown" id="dd1"><button class="nav-dropdown-toggle" id="t1" aria-expanded="false">One</button><ul class="nav-dropdown-menu"><li><a href="one.html">1</a></li></ul></li>
<li class="nav-dropdown" id="dd2"><button class="nav-dropdown-toggle" id="t2" aria-expanded="false">Two</button><ul class="nav-dropdown-menu"><li><a href="two.html">2</a></li></ul></li>
</ul></nav>"#,
    );
    let mut state = AppState::new();
    let config = SiteConfig::default();
    let t1 = dom.element_by_id("t1").unwrap();
    let t2 = dom.element_by_id("t2").unwrap();
    let dd1 = dom.element_by_id("dd1").unwrap();
    let dd2 = dom.element_by_id("dd2").unwrap();

    update(&mut state, &mut dom, &config, Message::Click { target: t1 });
    update(&mut state, &mut dom, &config, Message::Click { target: t2 });
    assert!(dom.has_class(&dd1, names::IS_OPEN));
    assert!(dom.has_class(&dd2, names::IS_OPEN));

    update(&mut state, &mut dom, &config, Message::Click { target: t1 });
    assert!(!dom.has_class(&dd1, names::IS_OPEN));
    assert!(dom.has_class(&dd2, names::IS_OPEN));
    assert_eq!(dom.attribute(&t2, names::ARIA_EXPANDED).as_deref(), Some("true"));

    update(&mut state, &mut dom, &config, Message::DismissMenus);
    assert!(!dom.has_class(&dd2, names::IS_OPEN));
    assert_eq!(dom.attribute(&t2, names::ARIA_EXPANDED).as_deref(), Some("false"));
}

// ─────────────────────────────────────────────────────────
// Markup injection
// ─────────────────────────────────────────────────────────

#[test]
fn test_dom_ready_injects_header_and_footer() {
    let c = nav_controller("/about.html");
    let dom = c.dom();

    let header = dom.element_by_id(names::SITE_HEADER_ID).unwrap();
    let footer = dom.element_by_id(names::SITE_FOOTER_ID).unwrap();
    assert!(dom.has_class(&header, names::SITE_HEADER));
    assert!(dom.has_class(&footer, names::SITE_FOOTER));
    assert!(dom.inner_html(header).unwrap().contains("nav-dropdown-toggle"));
    assert!(dom
        .inner_html(footer)
        .unwrap()
        .contains("info@gathercateringandevents.com"));
    assert!(dom.first_by_class(names::HAMBURGER).is_some());
}

#[test]
fn test_service_page_links_are_prefixed_and_marked() {
    let c = nav_controller("/services/catering.html");
    let dom = c.dom();

    let catering = dom.link_with_href("../services/catering.html").unwrap();
    let about = dom.link_with_href("../about.html").unwrap();
    assert!(dom.has_class(&catering, names::ACTIVE));
    assert!(!dom.has_class(&about, names::ACTIVE));
    assert!(dom.link_with_href("services/catering.html").is_none());
}

#[test]
fn test_footer_links_are_not_marked_active() {
    let c = nav_controller("/about.html");
    let dom = c.dom();

    let about_links: Vec<_> = dom
        .elements_by_tag("a")
        .into_iter()
        .filter(|a| dom.attribute(a, names::HREF).as_deref() == Some("about.html"))
        .collect();
    // header + footer
    assert_eq!(about_links.len(), 2);
    let active: Vec<_> = about_links
        .iter()
        .filter(|a| dom.has_class(a, names::ACTIVE))
        .collect();
    assert_eq!(active.len(), 1);
}

#[test]
fn test_page_without_placeholders_is_left_alone() {
    let mut c = ready_controller(
        MemoryDom::from_html("/about.html", "<main><p>Hello</p></main>"),
        SiteConfig::default(),
    );
    assert!(c.dom().first_by_class(names::MAIN_NAV).is_none());
    assert!(c.dispatch(Message::Key(InputKey::Esc)).is_empty());
}

#[test]
fn test_mark_active_links_counts_every_match() {
    let mut dom = MemoryDom::from_html(
        "/services/catering-staffing.html",
        r##"<ul class="nav-list"><li><a href="../services/catering-staffing.html">Staffing</a></li><li><a href="../services/">All</a></li><li><a href="#top">Top</a></li></ul>"##,
    );
    assert_eq!(markup::mark_active_links(&mut dom), 2);
}

// ─────────────────────────────────────────────────────────
// Reveal
// ─────────────────────────────────────────────────────────

const REVEALS: &str = r#"<section class="reveal" id="r1"></section><section class="reveal reveal--slide-up" id="r2"></section>"#;

#[test]
fn test_reduced_motion_shows_reveals_immediately() {
    let mut c = crate::Controller::attach(page("/index.html", REVEALS), SiteConfig::default())
        .unwrap();

    let actions = c.dispatch(Message::DomReady {
        reduced_motion: true,
    });

    assert!(actions.is_empty());
    for id in ["r1", "r2"] {
        let el = c.dom().element_by_id(id).unwrap();
        assert!(c.dom().has_class(&el, names::IS_VISIBLE));
    }
}

#[test]
fn test_reveals_are_observed_then_shown_once() {
    let mut c = crate::Controller::attach(page("/index.html", REVEALS), SiteConfig::default())
        .unwrap();

    let actions = c.dispatch(Message::DomReady {
        reduced_motion: false,
    });

    let r1 = c.dom().element_by_id("r1").unwrap();
    let r2 = c.dom().element_by_id("r2").unwrap();
    assert_eq!(
        actions,
        vec![UpdateAction::ObserveReveals {
            targets: vec![r1, r2]
        }]
    );
    assert!(!c.dom().has_class(&r1, names::IS_VISIBLE));

    c.dispatch(Message::RevealIntersected { target: r1 });
    c.dispatch(Message::RevealIntersected { target: r1 });

    assert!(c.dom().has_class(&r1, names::IS_VISIBLE));
    assert_eq!(
        c.dom()
            .classes(r1)
            .iter()
            .filter(|cl| *cl == names::IS_VISIBLE)
            .count(),
        1
    );
    assert!(!c.dom().has_class(&r2, names::IS_VISIBLE));
}

// ─────────────────────────────────────────────────────────
// Inquiry form
// ─────────────────────────────────────────────────────────

fn form_controller() -> crate::Controller<MemoryDom> {
    ready_controller(inquiry_page(), SiteConfig::default())
}

fn group_of(dom: &MemoryDom, name: &str) -> NodeId {
    let input = dom.first_by_name(name).unwrap();
    dom.closest(&input, names::FORM_GROUP).unwrap()
}

fn has_error(dom: &MemoryDom, name: &str) -> bool {
    dom.has_class(&group_of(dom, name), names::HAS_ERROR)
}

fn message_el(dom: &MemoryDom) -> NodeId {
    dom.element_by_id(names::FORM_MESSAGE_ID).unwrap()
}

fn submit_btn(dom: &MemoryDom) -> NodeId {
    dom.element_by_id(names::SUBMIT_BUTTON_ID).unwrap()
}

fn submit_payload(actions: Vec<UpdateAction<NodeId>>) -> gather_core::InquiryPayload {
    match actions.as_slice() {
        [UpdateAction::SubmitInquiry { payload, .. }] => payload.clone(),
        other => panic!("expected one SubmitInquiry, got {other:?}"),
    }
}

#[test]
fn test_empty_form_marks_all_required_fields() {
    let mut c = form_controller();

    let actions = c.dispatch(Message::SubmitRequested);

    assert!(actions.is_empty());
    let dom = c.dom();
    assert!(has_error(dom, "firstName"));
    assert!(has_error(dom, "lastName"));
    assert!(has_error(dom, "email"));
    assert!(!has_error(dom, "phone"));
    assert_eq!(dom.focused(), dom.first_by_name("firstName"));
    assert_eq!(c.submission(), &SubmissionState::Idle);
}

#[test]
fn test_missing_last_name_focuses_it() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());
    fill(c.dom_mut(), "lastName", "  ");

    let actions = c.dispatch(Message::SubmitRequested);

    assert!(actions.is_empty());
    assert!(!has_error(c.dom(), "firstName"));
    assert!(has_error(c.dom(), "lastName"));
    assert_eq!(c.dom().focused(), c.dom().first_by_name("lastName"));
}

#[test]
fn test_malformed_email_blocks_submission() {
    for email in ["foo@bar", "not-an-email"] {
        let mut c = form_controller();
        fill_valid(c.dom_mut());
        fill(c.dom_mut(), "email", email);

        let actions = c.dispatch(Message::SubmitRequested);

        assert!(actions.is_empty(), "{email} should not submit");
        assert!(has_error(c.dom(), "email"));
        assert_eq!(c.state().requests_sent, 0);
    }
}

#[test]
fn test_valid_submit_issues_one_request() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());
    fill(c.dom_mut(), "phone", "555-0100");
    fill(c.dom_mut(), "details", "Barn wedding, 120 guests");
    check_service(c.dom_mut(), "Catering");
    check_service(c.dom_mut(), "Mobile Bartending");

    let payload = submit_payload(c.dispatch(Message::SubmitRequested));

    assert_eq!(payload.first_name, "Jane");
    assert_eq!(payload.last_name, "Doe");
    assert_eq!(payload.email, "jane@example.com");
    assert_eq!(payload.phone, "555-0100");
    assert_eq!(payload.details, "Barn wedding, 120 guests");
    let mut services = payload.services.clone();
    services.sort();
    assert_eq!(services, vec!["Catering", "Mobile Bartending"]);
    assert!(DateTime::parse_from_rfc3339(&payload.timestamp).is_ok());

    let dom = c.dom();
    let btn = submit_btn(dom);
    assert!(dom.is_disabled(btn));
    assert_eq!(dom.text(&btn), "Sending...");
    assert!(c.submission().is_submitting());
    assert_eq!(c.state().requests_sent, 1);
}

#[test]
fn test_submit_action_targets_configured_endpoint() {
    let config = SiteConfig {
        endpoint_url: "https://forms.example.com/inquiry".to_string(),
        ..Default::default()
    };
    let mut c = ready_controller(inquiry_page(), config);
    fill_valid(c.dom_mut());

    let actions = c.dispatch(Message::SubmitRequested);

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SubmitInquiry { endpoint, .. }] if endpoint == "https://forms.example.com/inquiry"
    ));
}

#[test]
fn test_resubmit_while_in_flight_is_ignored() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());

    assert_eq!(c.dispatch(Message::SubmitRequested).len(), 1);
    assert!(c.dispatch(Message::SubmitRequested).is_empty());
    assert!(c.dispatch(Message::SubmitRequested).is_empty());

    assert_eq!(c.state().requests_sent, 1);
    assert!(c.submission().is_submitting());
}

#[test]
fn test_delivered_resets_form_and_shows_success() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());
    check_service(c.dom_mut(), "Catering");
    c.dispatch(Message::SubmitRequested);

    let actions = c.dispatch(Message::SubmissionSettled(TransportOutcome::Delivered));

    assert!(actions.is_empty());
    assert_eq!(c.submission(), &SubmissionState::Succeeded);
    let dom = c.dom();
    let msg = message_el(dom);
    assert!(dom.text(&msg).starts_with("Thank you!"));
    assert!(dom.has_class(&msg, "form-message--success"));
    assert_eq!(dom.scrolled_into_view(), &[msg]);
    for name in ["firstName", "lastName", "email"] {
        assert_eq!(dom.value(&dom.first_by_name(name).unwrap()), "");
    }
    let body = dom.body();
    assert!(dom
        .descendants_by_name(&body, "services")
        .iter()
        .all(|cb| !dom.is_checked(cb)));

    let btn = submit_btn(dom);
    assert!(!dom.is_disabled(btn));
    assert_eq!(dom.text(&btn), "Send Inquiry");
}

#[test]
fn test_transport_failure_keeps_fields() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());
    fill(c.dom_mut(), "details", "Keep me");
    check_service(c.dom_mut(), "Catering");
    c.dispatch(Message::SubmitRequested);

    c.dispatch(Message::SubmissionSettled(TransportOutcome::failed(
        "network unreachable",
    )));

    assert_eq!(c.submission(), &SubmissionState::Failed);
    let dom = c.dom();
    let msg = message_el(dom);
    assert!(dom.text(&msg).starts_with("Something went wrong."));
    assert!(dom.text(&msg).ends_with("info@gathercateringandevents.com"));
    assert!(dom.has_class(&msg, "form-message--error"));
    assert_eq!(dom.value(&dom.first_by_name("firstName").unwrap()), "Jane");
    assert_eq!(dom.value(&dom.first_by_name("details").unwrap()), "Keep me");
    let body = dom.body();
    assert!(dom
        .descendants_by_name(&body, "services")
        .iter()
        .any(|cb| dom.is_checked(cb)));

    let btn = submit_btn(dom);
    assert!(!dom.is_disabled(btn));
    assert_eq!(dom.text(&btn), "Send Inquiry");
}

#[test]
fn test_unconfigured_endpoint_shows_fallback() {
    let config = SiteConfig {
        endpoint_url: String::new(),
        fallback_email: "events@example.com".to_string(),
        ..Default::default()
    };
    let mut c = ready_controller(inquiry_page(), config);
    fill_valid(c.dom_mut());

    let actions = c.dispatch(Message::SubmitRequested);

    assert!(actions.is_empty());
    assert_eq!(c.submission(), &SubmissionState::Idle);
    let dom = c.dom();
    let msg = message_el(dom);
    assert!(dom.text(&msg).contains("not yet configured"));
    assert!(dom.text(&msg).contains("events@example.com"));
    assert!(dom.has_class(&msg, "form-message--error"));
    assert!(!dom.is_disabled(submit_btn(dom)));
}

#[test]
fn test_next_attempt_clears_previous_errors_and_message() {
    let config = SiteConfig {
        endpoint_url: String::new(),
        ..Default::default()
    };
    let mut c = ready_controller(inquiry_page(), config);
    fill_valid(c.dom_mut());
    c.dispatch(Message::SubmitRequested);
    assert!(!c.dom().text(&message_el(c.dom())).is_empty());

    fill(c.dom_mut(), "email", "bad");
    c.dispatch(Message::SubmitRequested);

    let dom = c.dom();
    let msg = message_el(dom);
    assert_eq!(dom.text(&msg), "");
    assert!(dom.classes(msg).is_empty());
    assert!(has_error(dom, "email"));

    fill(c.dom_mut(), "email", "jane@example.com");
    c.dispatch(Message::SubmitRequested);
    assert!(!has_error(c.dom(), "email"));
}

#[test]
fn test_settled_without_request_is_ignored() {
    let mut c = form_controller();

    c.dispatch(Message::SubmissionSettled(TransportOutcome::Delivered));

    assert_eq!(c.submission(), &SubmissionState::Idle);
    assert_eq!(c.dom().text(&message_el(c.dom())), "");
}

#[test]
fn test_settled_states_accept_new_submission() {
    let mut c = form_controller();
    fill_valid(c.dom_mut());
    c.dispatch(Message::SubmitRequested);
    c.dispatch(Message::SubmissionSettled(TransportOutcome::failed("offline")));
    assert_eq!(c.submission(), &SubmissionState::Failed);

    assert_eq!(c.dispatch(Message::SubmitRequested).len(), 1);
    assert!(c.submission().is_submitting());
    c.dispatch(Message::SubmissionSettled(TransportOutcome::Delivered));
    assert_eq!(c.submission(), &SubmissionState::Succeeded);

    fill_valid(c.dom_mut());
    assert_eq!(c.dispatch(Message::SubmitRequested).len(), 1);
    assert_eq!(c.state().requests_sent, 3);
}

#[test]
fn test_custom_button_label_is_restored() {
    let mut c = form_controller();
    let btn = submit_btn(c.dom());
    c.dom_mut().set_text(&btn, "Request a Quote");
    fill_valid(c.dom_mut());

    c.dispatch(Message::SubmitRequested);
    assert_eq!(c.dom().text(&btn), "Sending...");
    c.dispatch(Message::SubmissionSettled(TransportOutcome::Delivered));

    assert_eq!(c.dom().text(&btn), "Request a Quote");
}

#[test]
fn test_submit_without_form_is_ignored() {
    let mut c = nav_controller("/about.html");

    assert!(c.dispatch(Message::SubmitRequested).is_empty());
    assert_eq!(c.submission(), &SubmissionState::Idle);
}

#[test]
fn test_form_without_message_element_still_settles() {
    let html = crate::test_utils::INQUIRY_FORM_HTML.replace(r#"<div id="form-message"></div>"#, "");
    let mut c = ready_controller(page("/inquiry.html", &html), SiteConfig::default());
    fill_valid(c.dom_mut());

    c.dispatch(Message::SubmitRequested);
    c.dispatch(Message::SubmissionSettled(TransportOutcome::Delivered));

    assert_eq!(c.submission(), &SubmissionState::Succeeded);
    assert!(c.dom().scrolled_into_view().is_empty());
    assert!(!c.dom().is_disabled(submit_btn(c.dom())));
}

#[test]
fn test_update_returns_submit_action_directly() {
    let mut dom = inquiry_page();
    fill_valid(&mut dom);
    let mut state = AppState::new();

    let result = update(
        &mut state,
        &mut dom,
        &SiteConfig::default(),
        Message::SubmitRequested,
    );

    assert!(result.message.is_none());
    assert!(matches!(
        result.action,
        Some(UpdateAction::SubmitInquiry { .. })
    ));
}
