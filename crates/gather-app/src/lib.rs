//! gather-app - Page behavior state machine for the Gather website
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! site's interactive behavior: the navigation controller (mobile overlay,
//! dropdowns, escape, breakpoint), shared markup injection with active-link
//! marking, the scroll-reveal trigger, and the inquiry form submission
//! lifecycle. It talks to the page only through the [`Dom`] trait and to the
//! network only through [`LocalInquiryTransport`], so hosts supply both.

pub mod actions;
pub mod config;
pub mod controller;
pub mod dom;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod transport;

// Re-export primary types
pub use actions::run_submission;
pub use config::{load_site_config, parse_site_config, SiteConfig};
pub use controller::Controller;
pub use dom::Dom;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, SubmissionState, SubmitFeedback};
pub use transport::{InquiryTransport, LocalInquiryTransport, TransportOutcome};
