//! Action execution: outbound requests issued on behalf of the update loop

use tracing::debug;

use crate::message::Message;
use crate::transport::LocalInquiryTransport;
use gather_core::InquiryPayload;

/// Send one inquiry and turn the result into the settle message.
///
/// Exactly one request per call; there is no retry, timeout or cancellation.
pub async fn run_submission<N, T>(
    transport: &T,
    endpoint: &str,
    payload: &InquiryPayload,
) -> Message<N>
where
    T: LocalInquiryTransport,
{
    debug!(%endpoint, "sending inquiry");
    let outcome = transport.send(endpoint, payload).await;
    debug!(delivered = outcome.is_delivered(), "inquiry request settled");
    Message::SubmissionSettled(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingTransport;
    use crate::transport::TransportOutcome;
    use gather_core::InquiryValues;

    fn payload() -> InquiryPayload {
        InquiryValues {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        }
        .into_payload(chrono::Utc::now())
    }

    #[test]
    fn test_run_submission_settles_with_transport_outcome() {
        let transport = RecordingTransport::failing("dns");

        let msg: Message<()> = tokio_test::block_on(run_submission(
            &transport,
            "https://example.com/hook",
            &payload(),
        ));

        assert_eq!(
            msg,
            Message::SubmissionSettled(TransportOutcome::failed("dns"))
        );
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "https://example.com/hook");
        assert_eq!(requests[0].payload.first_name, "Ada");
    }
}
