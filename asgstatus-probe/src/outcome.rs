//! Classification of a single probe attempt.

use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::Instant;

use crate::error::TransportFailure;

/// What one probe attempt produced.
///
/// Only [`ProbeOutcome::Success`] and [`ProbeOutcome::OverallTimeout`] end
/// the wait; everything else is logged and retried.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The endpoint answered `200 OK`.
    Success,
    /// The endpoint answered with any other status.
    NonSuccessStatus {
        /// Status code and reason.
        status: StatusCode,
        /// Response body, possibly cut short.
        body: Vec<u8>,
    },
    /// The per-attempt deadline elapsed while the overall one is still open.
    RequestTimeout {
        /// Time spent on the attempt.
        elapsed: Duration,
        /// Underlying failure.
        cause: TransportFailure,
    },
    /// Transport failure with no deadline involved.
    TransportError {
        /// Underlying failure.
        cause: TransportFailure,
    },
    /// Transport failure after the overall deadline elapsed.
    OverallTimeout {
        /// Underlying failure.
        cause: TransportFailure,
    },
}

impl ProbeOutcome {
    /// Returns true if this outcome ends the wait.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::OverallTimeout { .. })
    }
}

/// Deadline for an attempt starting at `now`.
///
/// Never later than `overall`.
pub fn attempt_deadline(overall: Instant, now: Instant, request_timeout: Duration) -> Instant {
    now.checked_add(request_timeout)
        .map_or(overall, |deadline| deadline.min(overall))
}

/// Classifies a transport failure observed at `now`.
///
/// The overall deadline is checked first, so a failure on an attempt whose
/// deadline was clipped to the overall one is an [`ProbeOutcome::OverallTimeout`].
pub fn classify_failure(
    cause: TransportFailure,
    started: Instant,
    now: Instant,
    attempt_deadline: Instant,
    overall_deadline: Instant,
) -> ProbeOutcome {
    if now >= overall_deadline {
        ProbeOutcome::OverallTimeout { cause }
    } else if now >= attempt_deadline {
        ProbeOutcome::RequestTimeout {
            elapsed: now.saturating_duration_since(started),
            cause,
        }
    } else {
        ProbeOutcome::TransportError { cause }
    }
}

/// Renders a captured body for diagnostics.
///
/// JSON is re-indented with two spaces and keeps its key order; anything
/// else, including JSON cut off mid-stream, is returned as lossy UTF-8.
pub fn render_body(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn test_attempt_deadline_clipped_to_short_overall_timeout() {
        let now = Instant::now();
        let overall = now + Duration::from_secs(1);

        assert_eq!(attempt_deadline(overall, now, REQUEST_TIMEOUT), overall);
    }

    #[test]
    fn test_attempt_deadline_uses_request_timeout_when_room_left() {
        let now = Instant::now();
        let overall = now + Duration::from_secs(300);

        assert_eq!(
            attempt_deadline(overall, now, REQUEST_TIMEOUT),
            now + REQUEST_TIMEOUT
        );
    }

    #[test]
    fn test_attempt_deadline_near_end_of_wait() {
        let start = Instant::now();
        let overall = start + Duration::from_secs(300);
        let late = start + Duration::from_secs(290);

        assert_eq!(attempt_deadline(overall, late, REQUEST_TIMEOUT), overall);
    }

    #[test]
    fn test_attempt_deadline_with_unbounded_request_timeout() {
        let now = Instant::now();
        let overall = now + Duration::from_secs(300);

        assert_eq!(attempt_deadline(overall, now, Duration::MAX), overall);
    }

    #[test]
    fn test_classify_overall_timeout_wins() {
        let started = Instant::now();
        let overall = started + Duration::from_secs(1);
        let now = started + Duration::from_secs(2);

        let outcome = classify_failure(
            TransportFailure::DeadlineElapsed,
            started,
            now,
            overall,
            overall,
        );
        assert!(matches!(outcome, ProbeOutcome::OverallTimeout { .. }));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_classify_request_timeout() {
        let started = Instant::now();
        let attempt = started + REQUEST_TIMEOUT;
        let overall = started + Duration::from_secs(300);

        let outcome = classify_failure(
            TransportFailure::DeadlineElapsed,
            started,
            attempt,
            attempt,
            overall,
        );
        match outcome {
            ProbeOutcome::RequestTimeout { elapsed, .. } => assert_eq!(elapsed, REQUEST_TIMEOUT),
            other => panic!("expected request timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_plain_transport_error() {
        let started = Instant::now();
        let now = started + Duration::from_millis(5);

        let outcome = classify_failure(
            TransportFailure::DeadlineElapsed,
            started,
            now,
            started + REQUEST_TIMEOUT,
            started + Duration::from_secs(300),
        );
        assert!(matches!(outcome, ProbeOutcome::TransportError { .. }));
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn test_render_body_pretty_json_keeps_key_order() {
        let rendered = render_body(br#"{"status":"starting","checks":{"db":"pending"}}"#);
        assert_eq!(
            rendered,
            "{\n  \"status\": \"starting\",\n  \"checks\": {\n    \"db\": \"pending\"\n  }\n}"
        );
    }

    #[test]
    fn test_render_body_partial_json_falls_back_to_raw() {
        let rendered = render_body(br#"{"status":"star"#);
        assert_eq!(rendered, r#"{"status":"star"#);
    }

    #[test]
    fn test_render_body_plain_text() {
        assert_eq!(render_body(b"warming up"), "warming up");
    }
}
