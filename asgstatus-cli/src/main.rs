// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! aws-asg-status - let an EC2 instance manage its own Auto Scaling Group
//! lifecycle.
//!
//! # Examples
//!
//! ```bash
//! # Report healthy once the local endpoint answers 200
//! aws-asg-status --healthcheck-url http://localhost:8080/health healthy
//!
//! # Same, with the command implied and a shorter timeout
//! aws-asg-status --healthcheck-url http://localhost:8080/health --healthcheck-timeout 90s
//!
//! # Take the instance out of service for maintenance
//! aws-asg-status enter-standby
//!
//! # Show the group
//! aws-asg-status status
//! ```

mod commands;
mod output;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use asgstatus_aws::{load_sdk_config, AwsAutoScaling, Ec2Tags, ImdsMetadata};
use asgstatus_core::{discover_group_name, InstanceMetadata};
use asgstatus_probe::{HealthWait, ProbeConfig, Url};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{Command, CommandOutput, InstanceContext};

/// Environment variable enabling debug logging.
const DEBUG_ENV: &str = "AWS_ASG_STATUS_DEBUG";

// ============================================================================
// CLI Definition
// ============================================================================

/// Report this instance's health and standby state to its Auto Scaling Group.
#[derive(Debug, Parser)]
#[command(name = "aws-asg-status")]
#[command(about = "Report this EC2 instance's state to its Auto Scaling Group")]
#[command(long_about = r#"
Report this EC2 instance's state to its Auto Scaling Group.

The instance ID and region come from the instance metadata service; the group
is found through the aws:autoscaling:groupName tag.

Environment:
  AWS_ASG_STATUS_DEBUG    Enable debug logging
  CFN_SIGNAL_SSL_VERIFY   Skip TLS verification for healthcheck requests
"#)]
#[command(version)]
pub struct Cli {
    /// Command to run. Defaults to 'healthy' when --healthcheck-url is given.
    #[arg(value_enum)]
    pub command: Option<Command>,

    /// Healthcheck endpoint URL. Empty skips the healthcheck.
    #[arg(long, default_value = "")]
    pub healthcheck_url: String,

    /// Healthcheck timeout, e.g. "90s" or "5m".
    #[arg(long, default_value = "5m", value_parser = humantime::parse_duration)]
    pub healthcheck_timeout: Duration,

    /// Verbose output (same as setting AWS_ASG_STATUS_DEBUG).
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the command to run.
    pub fn resolve_command(&self) -> Result<Command> {
        match self.command {
            Some(command) => Ok(command),
            None if !self.healthcheck_url.is_empty() => Ok(Command::Healthy),
            None => bail!(
                "Must supply an argument: enter-standby|exit-standby|healthy|unhealthy|status"
            ),
        }
    }

    /// Returns the probe settings, or `None` if no healthcheck is configured.
    pub fn probe_config(&self) -> Result<Option<ProbeConfig>> {
        if self.healthcheck_url.is_empty() {
            return Ok(None);
        }

        let url = Url::parse(&self.healthcheck_url)
            .with_context(|| format!("Invalid healthcheck URL: {}", self.healthcheck_url))?;
        Ok(Some(ProbeConfig::from_env(url, self.healthcheck_timeout)))
    }
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool) {
    let debug = verbose || std::env::var_os(DEBUG_ENV).is_some();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("asgstatus=debug,aws_asg_status=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    // PowerShell treats any stderr output from a redirected native command
    // as an error record.
    let writer = if cfg!(windows) && !std::io::stdout().is_terminal() {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_file(debug)
                .with_line_number(debug)
                .without_time()
                .with_writer(writer),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        error!("{:#}", e);
        std::process::exit(ExitCode::Error as i32);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let command = cli.resolve_command()?;
    let probe_config = cli.probe_config()?;

    let identity = ImdsMetadata::new().identity().await?;
    let sdk_config = load_sdk_config(&identity.region).await;

    let group_name = discover_group_name(&Ec2Tags::new(&sdk_config), &identity.instance_id).await?;
    let ctx = InstanceContext {
        instance_id: identity.instance_id,
        group_name,
    };
    debug!(instance_id = %ctx.instance_id, group = %ctx.group_name, ?command, "Resolved instance");

    let healthcheck = match probe_config {
        Some(config) if command == Command::Healthy => Some(HealthWait::from_config(config)?),
        _ => None,
    };

    let api = AwsAutoScaling::new(&sdk_config);
    match commands::dispatch(command, &ctx, &api, healthcheck.as_ref()).await? {
        CommandOutput::Health(_) => {}
        CommandOutput::Standby(response) => output::print_pretty(&response)?,
        CommandOutput::Groups(response) => output::print_pretty(&response)?,
    }

    Ok(())
}
