//! Domain models for asg-status.
//!
//! ## Submodules
//!
//! - [`instance`] - Instance identity and tags
//! - [`group`] - Health status and Auto Scaling Group views

mod group;
mod instance;

// Re-export everything at the models level
pub use group::{
    GroupInstance, GroupStatus, GroupsOutput, HealthStatus, ScalingActivity, StandbyOutput,
};
pub use instance::{InstanceIdentity, Tag, TagPage};

#[cfg(test)]
mod serde_tests;
