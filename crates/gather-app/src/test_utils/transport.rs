//! Scripted transport that records every request

use std::collections::VecDeque;
use std::sync::Mutex;

use gather_core::InquiryPayload;

use crate::transport::{InquiryTransport, TransportOutcome};

/// A request captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub payload: InquiryPayload,
}

/// Returns scripted outcomes in order, then `fallback` once the script runs out.
#[derive(Debug)]
pub struct RecordingTransport {
    script: Mutex<VecDeque<TransportOutcome>>,
    fallback: TransportOutcome,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    /// Every request completes at the transport level
    pub fn delivering() -> Self {
        Self::with_fallback(TransportOutcome::Delivered)
    }

    /// Every request fails at the transport level
    pub fn failing(reason: &str) -> Self {
        Self::with_fallback(TransportOutcome::failed(reason))
    }

    pub fn with_fallback(fallback: TransportOutcome) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue outcomes for the next requests
    pub fn then(self, outcome: TransportOutcome) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl InquiryTransport for RecordingTransport {
    async fn send(&self, endpoint: &str, payload: &InquiryPayload) -> TransportOutcome {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                endpoint: endpoint.to_string(),
                payload: payload.clone(),
            });
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
