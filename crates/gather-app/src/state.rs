//! Controller state (Model in TEA pattern)
//!
//! Only the inquiry submission lifecycle lives here. Navigation state is read
//! from and written to the DOM directly.

/// Lifecycle of the inquiry form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No attempt yet, or the last attempt stopped before the network
    #[default]
    Idle,

    /// A request is in flight; further submits are ignored
    Submitting {
        /// Submit control label to put back once the request settles
        restore_label: String,
    },

    /// Last request completed at the transport level
    Succeeded,

    /// Last request failed at the transport level; fields were kept
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }
}

/// Feedback shown in the status message element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFeedback {
    Success,
    Error,
}

impl SubmitFeedback {
    /// Full `className` for the status element
    pub fn class_name(&self) -> &'static str {
        match self {
            SubmitFeedback::Success => "form-message form-message--success",
            SubmitFeedback::Error => "form-message form-message--error",
        }
    }
}

/// Complete controller state
#[derive(Debug, Default)]
pub struct AppState {
    pub submission: SubmissionState,

    /// Requests issued since the page loaded
    pub requests_sent: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
