//! The health-wait loop.
//!
//! Polls the configured endpoint until it answers `200 OK` or the overall
//! timeout passes. Each attempt runs under its own deadline, never later
//! than the overall one, and attempts never overlap.
//!
//! ```text
//!            200                 transport failure past overall deadline
//! Succeeded <---- Probing ---------------------------------------> TimedOut
//!                  |   ^
//!   anything else  |   | retry delay
//!                  v   |
//!                 Retrying
//! ```

use std::time::Duration;

use humantime::format_duration;
use reqwest::{Response, StatusCode};
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, error, info, instrument, warn};

use crate::client::ProbeClient;
use crate::config::ProbeConfig;
use crate::error::{HealthcheckError, ProbeError, TransportFailure};
use crate::outcome::{attempt_deadline, classify_failure, render_body, ProbeOutcome};

/// Stand-in deadline for timeouts too large to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

// ============================================================================
// State
// ============================================================================

/// Where the loop is.
#[derive(Debug)]
enum WaitState {
    Probing,
    Retrying,
    Succeeded,
    TimedOut(HealthcheckError),
}

/// Per-wait bookkeeping.
#[derive(Debug)]
struct LoopState {
    deadline: Instant,
    last_body: Option<Vec<u8>>,
    attempts: u32,
}

impl LoopState {
    fn new(started: Instant, overall_timeout: Duration) -> Self {
        Self {
            deadline: started
                .checked_add(overall_timeout)
                .unwrap_or(started + FAR_FUTURE),
            last_body: None,
            attempts: 0,
        }
    }
}

/// Summary of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    /// Requests issued, including the successful one.
    pub attempts: u32,
    /// Time from start to the `200 OK`.
    pub elapsed: Duration,
}

// ============================================================================
// Health Wait
// ============================================================================

/// Waits for an HTTP endpoint to become healthy.
#[derive(Debug, Clone)]
pub struct HealthWait {
    client: ProbeClient,
    config: ProbeConfig,
}

impl HealthWait {
    /// Creates a wait over an existing client.
    pub fn new(client: ProbeClient, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    /// Builds the probe client for `config` and wraps it.
    pub fn from_config(config: ProbeConfig) -> Result<Self, ProbeError> {
        let client = ProbeClient::build(&config)?;
        Ok(Self::new(client, config))
    }

    /// Blocks until the endpoint answers `200 OK` or the overall timeout
    /// passes.
    ///
    /// Non-200 responses, connection failures and per-request timeouts are
    /// logged and retried after the retry delay. The only error is
    /// [`HealthcheckError::TimedOut`], raised when an attempt fails at the
    /// transport level once the overall deadline has passed. An attempt due
    /// after the deadline fails that way without touching the network, and
    /// the retry delay is cut short at the deadline.
    #[instrument(
        skip(self),
        fields(
            url = %self.config.url,
            timeout = %format_duration(self.config.overall_timeout)
        )
    )]
    pub async fn wait_until_healthy(&self) -> Result<HealthReport, HealthcheckError> {
        let started = Instant::now();
        let mut state = LoopState::new(started, self.config.overall_timeout);
        let mut phase = WaitState::Probing;

        info!("Waiting for healthcheck to pass");

        loop {
            phase = match phase {
                WaitState::Probing => {
                    let outcome = self.probe_once(&mut state).await;
                    self.transition(outcome, &mut state)
                }
                WaitState::Retrying => {
                    self.pause(&state).await;
                    WaitState::Probing
                }
                WaitState::Succeeded => {
                    let report = HealthReport {
                        attempts: state.attempts,
                        elapsed: started.elapsed(),
                    };
                    info!(
                        attempts = report.attempts,
                        elapsed_ms = report.elapsed.as_millis() as u64,
                        "Healthcheck passed"
                    );
                    return Ok(report);
                }
                WaitState::TimedOut(err) => return Err(err),
            };
        }
    }

    /// Runs one attempt.
    async fn probe_once(&self, state: &mut LoopState) -> ProbeOutcome {
        let started = Instant::now();
        let deadline = attempt_deadline(state.deadline, started, self.config.request_timeout);

        if started >= state.deadline {
            return classify_failure(
                TransportFailure::DeadlineElapsed,
                started,
                started,
                deadline,
                state.deadline,
            );
        }

        state.attempts += 1;
        debug!(attempt = state.attempts, "Probing");

        let response = match timeout_at(deadline, self.client.get(&self.config.url)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                return classify_failure(
                    TransportFailure::Request(err),
                    started,
                    Instant::now(),
                    deadline,
                    state.deadline,
                );
            }
            Err(_) => {
                return classify_failure(
                    TransportFailure::DeadlineElapsed,
                    started,
                    Instant::now(),
                    deadline,
                    state.deadline,
                );
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            return ProbeOutcome::Success;
        }

        let body = drain_body(response, deadline).await;
        ProbeOutcome::NonSuccessStatus { status, body }
    }

    /// Logs an outcome and picks the next state.
    fn transition(&self, outcome: ProbeOutcome, state: &mut LoopState) -> WaitState {
        match outcome {
            ProbeOutcome::Success => WaitState::Succeeded,
            ProbeOutcome::NonSuccessStatus { status, body } => {
                warn!("{} :: ({}) {}", self.config.url, status.as_u16(), status);
                state.last_body = Some(body);
                WaitState::Retrying
            }
            ProbeOutcome::RequestTimeout { elapsed, cause } => {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "healthcheck request timeout({}): {}",
                    format_duration(self.config.request_timeout),
                    cause.describe()
                );
                WaitState::Retrying
            }
            ProbeOutcome::TransportError { cause } => {
                error!("{}", cause.describe());
                WaitState::Retrying
            }
            ProbeOutcome::OverallTimeout { cause } => {
                let last_body = state
                    .last_body
                    .as_deref()
                    .filter(|body| !body.is_empty())
                    .map(render_body);

                if let Some(body) = &last_body {
                    error!("{}", body);
                }

                WaitState::TimedOut(HealthcheckError::TimedOut {
                    timeout: self.config.overall_timeout,
                    last_body,
                    source: cause,
                })
            }
        }
    }

    /// Sleeps for the retry delay, waking early at the overall deadline.
    async fn pause(&self, state: &LoopState) {
        let wake = Instant::now()
            .checked_add(self.config.retry_delay)
            .map_or(state.deadline, |wake| wake.min(state.deadline));
        sleep_until(wake).await;
    }
}

// ============================================================================
// Body Handling
// ============================================================================

/// Reads the whole body, keeping whatever arrived if the read fails or the
/// deadline hits.
async fn drain_body(mut response: Response, deadline: Instant) -> Vec<u8> {
    let mut body = Vec::new();

    match timeout_at(deadline, read_chunks(&mut response, &mut body)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => debug!(error = %err, bytes = body.len(), "Response body cut short"),
        Err(_) => debug!(bytes = body.len(), "Request deadline hit while reading body"),
    }

    body
}

async fn read_chunks(response: &mut Response, body: &mut Vec<u8>) -> reqwest::Result<()> {
    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
    }
    Ok(())
}
