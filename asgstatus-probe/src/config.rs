//! Probe configuration.
//!
//! A [`ProbeConfig`] is built once from the command line and the
//! environment, then handed to the loop; nothing in it changes while the
//! loop runs.

use std::time::Duration;

use reqwest::Url;

/// Environment variable that, when present, disables TLS verification for
/// probes.
pub const TLS_SKIP_VERIFY_ENV: &str = "CFN_SIGNAL_SSL_VERIFY";

/// Default overall healthcheck timeout.
pub const DEFAULT_OVERALL_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Timeout for a single probe request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between probe attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

// ============================================================================
// Probe Config
// ============================================================================

/// Settings for the health-wait loop.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Endpoint to probe with `GET`.
    pub url: Url,
    /// Bound on the whole wait.
    pub overall_timeout: Duration,
    /// Bound on one attempt, clipped to what is left of `overall_timeout`.
    pub request_timeout: Duration,
    /// Constant delay between attempts.
    pub retry_delay: Duration,
    /// Accept any server certificate.
    pub skip_tls_verify: bool,
}

impl ProbeConfig {
    /// Creates a config with TLS verification enabled.
    pub fn new(url: Url, overall_timeout: Duration) -> Self {
        Self {
            url,
            overall_timeout,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_delay: DEFAULT_RETRY_DELAY,
            skip_tls_verify: false,
        }
    }

    /// Creates a config, resolving the TLS toggle from the environment.
    pub fn from_env(url: Url, overall_timeout: Duration) -> Self {
        Self::new(url, overall_timeout).with_skip_tls_verify(skip_tls_verify_from_env())
    }

    /// Sets the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the delay between attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Enables or disables TLS certificate verification bypass.
    pub fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }
}

/// Returns true if [`TLS_SKIP_VERIFY_ENV`] is set, whatever its value.
pub fn skip_tls_verify_from_env() -> bool {
    std::env::var_os(TLS_SKIP_VERIFY_ENV).is_some()
}
