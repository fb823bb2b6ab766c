//! The HTTP client used for health probes.
//!
//! One client is built per wait and reused for every attempt so pooled
//! connections survive between probes. The client carries connection-level
//! limits only; request deadlines belong to the loop.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use tracing::{debug, instrument, warn};

use crate::config::ProbeConfig;
use crate::error::ProbeError;

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP keep-alive interval.
const KEEP_ALIVE: Duration = Duration::from_secs(30);

/// Idle connections kept in the pool.
const MAX_IDLE_CONNECTIONS: usize = 100;

/// How long an idle pooled connection is kept.
const IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// User agent string for probes.
const USER_AGENT: &str = concat!("asg-status/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Probe Client
// ============================================================================

/// HTTP client for health probes.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    inner: Client,
}

impl ProbeClient {
    /// Builds the probe client for `config`.
    ///
    /// HTTP/2 is negotiated through ALPN when the server offers it, and the
    /// connector dials IPv4 and IPv6 addresses alike. Proxy settings come
    /// from the environment.
    pub fn build(config: &ProbeConfig) -> Result<Self, ProbeError> {
        if config.skip_tls_verify {
            warn!("TLS certificate verification is disabled for healthcheck probes");
        }

        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(config.skip_tls_verify)
            .connect_timeout(CONNECT_TIMEOUT)
            .tcp_keepalive(KEEP_ALIVE)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS)
            .pool_idle_timeout(IDLE_TIMEOUT)
            .build()
            .map_err(ProbeError::ClientBuild)?;

        Ok(Self { inner })
    }

    /// Performs a GET request.
    #[instrument(level = "debug", skip(self), fields(url = %url))]
    pub async fn get(&self, url: &Url) -> Result<Response, reqwest::Error> {
        debug!("GET request");

        let response = self.inner.get(url.clone()).send().await?;
        debug!(status = %response.status(), version = ?response.version(), "Response received");
        Ok(response)
    }
}
