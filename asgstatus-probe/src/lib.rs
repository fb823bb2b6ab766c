// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # asg-status Probe
//!
//! HTTP health probing for asg-status.
//!
//! Before an instance reports itself healthy it can wait for a local
//! endpoint to answer `200 OK`. This crate provides:
//!
//! - [`config::ProbeConfig`] - Target URL, overall timeout, per-request timeout
//! - [`client::ProbeClient`] - The single HTTP client used for every probe
//! - [`outcome::ProbeOutcome`] - Classification of one probe attempt
//! - [`wait::HealthWait`] - The polling loop with its nested deadlines
//!
//! ## Example
//!
//! ```ignore
//! use asgstatus_probe::{HealthWait, ProbeConfig};
//!
//! let config = ProbeConfig::from_env(url, Duration::from_secs(300));
//! let report = HealthWait::from_config(config)?.wait_until_healthy().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod wait;

pub use client::ProbeClient;
pub use config::{ProbeConfig, TLS_SKIP_VERIFY_ENV};
pub use error::{HealthcheckError, ProbeError, TransportFailure};
pub use outcome::ProbeOutcome;
pub use wait::{HealthReport, HealthWait};

pub use reqwest::Url;
