// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # asg-status AWS
//!
//! AWS SDK implementations of the collaborator traits in `asgstatus-core`:
//!
//! - [`imds::ImdsMetadata`] - Instance identity from the metadata service
//! - [`ec2::Ec2Tags`] - Instance tags via `DescribeTags`
//! - [`autoscaling::AwsAutoScaling`] - Health and standby calls
//!
//! Each adapter makes exactly one API call per trait method and maps SDK
//! types into the serialisable views of `asgstatus-core`.

pub mod autoscaling;
mod convert;
pub mod ec2;
pub mod imds;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

pub use autoscaling::AwsAutoScaling;
pub use ec2::Ec2Tags;
pub use imds::ImdsMetadata;

/// Loads shared AWS configuration pinned to `region`.
///
/// Credentials come from the default provider chain.
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    debug!(region, "Loading AWS configuration");
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_owned()))
        .load()
        .await
}
