//! Inquiry form handlers: validation and the submission lifecycle.
//!
//! Idle → Submitting on a valid attempt with a configured endpoint;
//! Submitting → Succeeded/Failed when the request settles. A submit while
//! Submitting is dropped, not queued.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::dom::{names, Dom};
use crate::state::{AppState, SubmissionState, SubmitFeedback};
use crate::transport::TransportOutcome;
use gather_core::{InquiryField, InquiryValues};

use super::{UpdateAction, UpdateResult};

/// Handle a submit attempt stamped with `now`
pub fn handle_submit<D: Dom>(
    state: &mut AppState,
    dom: &mut D,
    config: &SiteConfig,
    now: DateTime<Utc>,
) -> UpdateResult<D::Node> {
    let Some(form) = dom.element_by_id(names::INQUIRY_FORM_ID) else {
        warn!("submit requested but #{} is missing", names::INQUIRY_FORM_ID);
        return UpdateResult::none();
    };

    if state.submission.is_submitting() {
        debug!("submit ignored: request already in flight");
        return UpdateResult::none();
    }

    clear_errors(dom, &form);

    let values = read_values(dom, &form);
    if !validate(dom, &form, &values) {
        return UpdateResult::none();
    }

    state.submission = SubmissionState::Idle;

    if !config.is_configured() {
        warn!(endpoint = %config.endpoint_url, "inquiry endpoint is not configured");
        show_message(dom, SubmitFeedback::Error, &config.not_configured_message());
        return UpdateResult::none();
    }

    let submit_btn = dom.element_by_id(names::SUBMIT_BUTTON_ID);
    let restore_label = submit_btn
        .as_ref()
        .map(|btn| dom.text(btn))
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| config.submit_label.clone());
    if let Some(btn) = &submit_btn {
        dom.set_disabled(btn, true);
        dom.set_text(btn, &config.sending_label);
    }

    state.submission = SubmissionState::Submitting { restore_label };
    state.requests_sent += 1;

    let payload = values.into_payload(now);
    info!(
        services = payload.services.len(),
        timestamp = %payload.timestamp,
        "submitting inquiry"
    );

    UpdateResult::action(UpdateAction::SubmitInquiry {
        endpoint: config.endpoint_url.clone(),
        payload,
    })
}

/// Handle the settled outbound request
pub fn handle_settled<D: Dom>(
    state: &mut AppState,
    dom: &mut D,
    config: &SiteConfig,
    outcome: TransportOutcome,
) -> UpdateResult<D::Node> {
    let restore_label = match std::mem::take(&mut state.submission) {
        SubmissionState::Submitting { restore_label } => restore_label,
        other => {
            warn!(state = ?other, "submission settled with no request in flight");
            state.submission = other;
            return UpdateResult::none();
        }
    };

    match outcome {
        // Delivered only means the exchange completed; a server-side failure
        // behind an opaque response lands here too and reads as success.
        TransportOutcome::Delivered => {
            info!("inquiry delivered");
            state.submission = SubmissionState::Succeeded;
            show_message(dom, SubmitFeedback::Success, &config.success_message());
            if let Some(form) = dom.element_by_id(names::INQUIRY_FORM_ID) {
                dom.reset_form(&form);
            }
        }
        TransportOutcome::Failed { reason } => {
            warn!(%reason, "inquiry transport failed");
            state.submission = SubmissionState::Failed;
            show_message(dom, SubmitFeedback::Error, &config.transport_error_message());
        }
    }

    if let Some(btn) = dom.element_by_id(names::SUBMIT_BUTTON_ID) {
        dom.set_disabled(&btn, false);
        dom.set_text(&btn, &restore_label);
    }

    UpdateResult::none()
}

/// Read every field's raw value from `form`
pub(crate) fn read_values<D: Dom>(dom: &D, form: &D::Node) -> InquiryValues {
    let single = |field: InquiryField| -> String {
        dom.descendants_by_name(form, field.name())
            .first()
            .map(|input| dom.value(input))
            .unwrap_or_default()
    };

    let services = dom
        .descendants_by_name(form, InquiryField::Services.name())
        .iter()
        .filter(|cb| dom.is_checked(cb))
        .map(|cb| dom.value(cb))
        .collect();

    InquiryValues {
        first_name: single(InquiryField::FirstName),
        last_name: single(InquiryField::LastName),
        email: single(InquiryField::Email),
        phone: single(InquiryField::Phone),
        services,
        budget: single(InquiryField::Budget),
        details: single(InquiryField::Details),
    }
}

/// Mark every failing required field, then focus the first one.
///
/// A required field whose input is absent from the form is not checked.
fn validate<D: Dom>(dom: &mut D, form: &D::Node, values: &InquiryValues) -> bool {
    let mut valid = true;

    for field in values.invalid_fields() {
        let Some(input) = dom.descendants_by_name(form, field.name()).into_iter().next() else {
            continue;
        };
        if let Some(group) = dom.closest(&input, names::FORM_GROUP) {
            dom.add_class(&group, names::HAS_ERROR);
        }
        debug!(%field, "field invalid");
        valid = false;
    }

    if !valid {
        let first_error_input = dom
            .descendants_by_class(form, names::HAS_ERROR)
            .iter()
            .find_map(|group| {
                dom.descendants_by_class(group, names::FORM_INPUT)
                    .into_iter()
                    .next()
            });
        if let Some(input) = first_error_input {
            dom.focus(&input);
        }
    }

    valid
}

/// Remove field error markers and any previous status message
fn clear_errors<D: Dom>(dom: &mut D, form: &D::Node) {
    for group in dom.descendants_by_class(form, names::HAS_ERROR) {
        dom.remove_class(&group, names::HAS_ERROR);
    }
    if let Some(message) = dom.element_by_id(names::FORM_MESSAGE_ID) {
        dom.set_text(&message, "");
        dom.set_class_name(&message, "");
    }
}

/// Set the status text and its type class together, then bring it into view
fn show_message<D: Dom>(dom: &mut D, feedback: SubmitFeedback, text: &str) {
    let Some(message) = dom.element_by_id(names::FORM_MESSAGE_ID) else {
        return;
    };
    dom.set_text(&message, text);
    dom.set_class_name(&message, feedback.class_name());
    dom.scroll_into_view_centered(&message);
}
