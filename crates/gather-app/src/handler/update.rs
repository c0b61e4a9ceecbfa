//! Main update function - handles state transitions (TEA pattern)

use chrono::Utc;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::message::Message;
use crate::state::AppState;
use gather_core::current_year;

use super::{form, markup, nav, reveal, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update<D: Dom>(
    state: &mut AppState,
    dom: &mut D,
    config: &SiteConfig,
    message: Message<D::Node>,
) -> UpdateResult<D::Node> {
    match message {
        Message::DomReady { reduced_motion } => {
            markup::inject(dom, config, current_year());
            reveal::start(dom, reduced_motion)
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Click { target } => nav::handle_click(dom, &target),

        Message::Key(key) => match nav::handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::DismissMenus => nav::handle_dismiss(dom),

        Message::BreakpointChanged { desktop } => nav::handle_breakpoint(dom, desktop),

        // ─────────────────────────────────────────────────────────
        // Inquiry Form Messages
        // ─────────────────────────────────────────────────────────
        Message::SubmitRequested => form::handle_submit(state, dom, config, Utc::now()),

        Message::SubmissionSettled(outcome) => form::handle_settled(state, dom, config, outcome),

        // ─────────────────────────────────────────────────────────
        // Reveal Messages
        // ─────────────────────────────────────────────────────────
        Message::RevealIntersected { target } => reveal::handle_intersected(dom, &target),
    }
}
