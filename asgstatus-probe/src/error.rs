//! Probe error types.

use std::error::Error as StdError;
use std::time::Duration;

use humantime::format_duration;
use thiserror::Error;

// ============================================================================
// Probe Error
// ============================================================================

/// Error raised while setting up probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The HTTP client could not be built (TLS backend failed to initialise).
    #[error("Failed to create healthcheck HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

// ============================================================================
// Transport Failure
// ============================================================================

/// Why a probe produced no HTTP response.
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// DNS, connect, TLS or protocol failure.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The deadline bound to the attempt elapsed first.
    #[error("deadline elapsed before a response arrived")]
    DeadlineElapsed,
}

impl TransportFailure {
    /// Renders the failure with its whole source chain, e.g.
    /// `error sending request for url (..): client error (Connect): tcp
    /// connect error: Connection refused (os error 111)`.
    pub fn describe(&self) -> String {
        error_chain(self)
    }
}

/// Joins an error and its sources with `": "`, skipping a source whose text
/// the message already contains.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut next = err.source();

    while let Some(cause) = next {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        next = cause.source();
    }

    rendered
}

// ============================================================================
// Healthcheck Error
// ============================================================================

/// The only failure the health-wait loop hands back to its caller.
#[derive(Debug, Error)]
pub enum HealthcheckError {
    /// The overall deadline passed without a `200 OK`.
    #[error(
        "healthcheck exceeded timeout({timeout}): {cause}",
        timeout = human(.timeout),
        cause = describe(.source)
    )]
    TimedOut {
        /// Configured overall timeout.
        timeout: Duration,
        /// Last non-200 body, pretty-printed if it was JSON.
        last_body: Option<String>,
        /// Failure of the attempt that hit the deadline.
        #[source]
        source: TransportFailure,
    },
}

fn human(duration: &Duration) -> humantime::FormattedDuration {
    format_duration(*duration)
}

fn describe(failure: &TransportFailure) -> String {
    failure.describe()
}

impl HealthcheckError {
    /// Returns the last response body captured before giving up.
    pub fn last_body(&self) -> Option<&str> {
        match self {
            Self::TimedOut { last_body, .. } => last_body.as_deref(),
        }
    }
}
