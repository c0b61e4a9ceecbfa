//! Outbound inquiry transport
//!
//! The remote endpoint is called in a response-opaque mode: the caller learns
//! only whether the network exchange completed. [`TransportOutcome`] is
//! therefore two-valued. A server-side failure that still completes the
//! exchange (quota errors, HTTP 500) is reported as [`TransportOutcome::Delivered`]
//! and surfaces to the visitor as success; that false success is an accepted
//! property of the endpoint contract, not something this layer can detect.

use gather_core::InquiryPayload;

/// Result of one outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// The network exchange completed. Status and body are unknown.
    Delivered,
    /// The network operation itself failed (offline, DNS, blocked).
    Failed { reason: String },
}

impl TransportOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, TransportOutcome::Delivered)
    }
}

/// Sends an inquiry to the configured endpoint.
///
/// No timeout or cancellation: a request that never settles keeps the form
/// in its submitting state until the network layer resolves it.
#[trait_variant::make(InquiryTransport: Send)]
pub trait LocalInquiryTransport {
    /// POST `payload` as JSON to `endpoint`
    async fn send(&self, endpoint: &str, payload: &InquiryPayload) -> TransportOutcome;
}
