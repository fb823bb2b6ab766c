// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # asg-status Core
//!
//! Core types, models, and traits shared by the asg-status crates.
//!
//! This crate holds everything that does not depend on a particular AWS SDK
//! or HTTP stack:
//!
//! - Domain models (instance identity, tags, health status, group views)
//! - Error types
//! - Collaborator traits implemented by the AWS adapters
//! - Auto Scaling Group discovery from instance tags
//!
//! ## Key Types
//!
//! ### Instance
//! - [`InstanceIdentity`] - Identity document of the running instance
//! - [`Tag`] / [`TagPage`] - Instance tags, one page at a time
//!
//! ### Auto Scaling
//! - [`HealthStatus`] - Health reported back to the group
//! - [`ScalingActivity`] - Result of a standby transition
//! - [`GroupStatus`] / [`GroupInstance`] - Described group state
//! - [`StandbyOutput`] / [`GroupsOutput`] - Printed API responses

pub mod discovery;
pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Instance types
    InstanceIdentity,
    Tag,
    TagPage,
    // Auto Scaling types
    GroupInstance,
    GroupStatus,
    GroupsOutput,
    HealthStatus,
    ScalingActivity,
    StandbyOutput,
};

pub use discovery::{discover_group_name, GROUP_NAME_TAG};

// Re-export traits
pub use traits::{AutoScalingApi, InstanceMetadata, TagSource};
