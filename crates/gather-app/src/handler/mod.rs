//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `nav`: Hamburger, dropdown, escape and breakpoint handling
//! - `form`: Inquiry form validation and submission lifecycle
//! - `markup`: Header/footer injection and active-link marking
//! - `reveal`: Scroll-reveal trigger

pub(crate) mod form;
pub(crate) mod markup;
pub(crate) mod nav;
pub(crate) mod reveal;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use gather_core::InquiryPayload;

// Re-export main entry point
pub use update::update;

/// Actions the host should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction<N> {
    /// Issue the single outbound request for a validated submit attempt.
    /// Its outcome must come back as `Message::SubmissionSettled`.
    SubmitInquiry {
        endpoint: String,
        payload: InquiryPayload,
    },

    /// Start observing these `.reveal` elements for viewport entry
    ObserveReveals { targets: Vec<N> },
}

/// Result of processing a message
#[derive(Debug)]
pub struct UpdateResult<N> {
    /// Optional follow-up message to process
    pub message: Option<Message<N>>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction<N>>,
}

impl<N> Default for UpdateResult<N> {
    fn default() -> Self {
        Self {
            message: None,
            action: None,
        }
    }
}

impl<N> UpdateResult<N> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message<N>) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction<N>) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
