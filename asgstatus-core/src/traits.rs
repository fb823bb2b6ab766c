//! Collaborator traits for asg-status.
//!
//! The AWS adapters implement these; commands and discovery only see the
//! traits, so they can run against in-memory fakes.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::{GroupStatus, HealthStatus, InstanceIdentity, ScalingActivity, TagPage};

/// Source of the running instance's identity.
#[async_trait]
pub trait InstanceMetadata: Send + Sync {
    /// Fetches the identity document of the current instance.
    async fn identity(&self) -> Result<InstanceIdentity, CoreError>;
}

/// Paged access to an instance's tags.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Fetches one page of tags for `instance_id`.
    ///
    /// Pass the previous page's `next_token` to continue a listing.
    async fn tag_page(
        &self,
        instance_id: &str,
        next_token: Option<String>,
    ) -> Result<TagPage, CoreError>;
}

/// The Auto Scaling control-plane calls the commands need.
///
/// Every method is a single API call with no retry of its own.
#[async_trait]
pub trait AutoScalingApi: Send + Sync {
    /// Reports the instance's health, ignoring the grace period.
    async fn set_instance_health(
        &self,
        instance_id: &str,
        status: HealthStatus,
    ) -> Result<(), CoreError>;

    /// Moves the instance to standby and decrements desired capacity.
    async fn enter_standby(
        &self,
        group_name: &str,
        instance_id: &str,
    ) -> Result<Vec<ScalingActivity>, CoreError>;

    /// Returns the instance from standby to service.
    async fn exit_standby(
        &self,
        group_name: &str,
        instance_id: &str,
    ) -> Result<Vec<ScalingActivity>, CoreError>;

    /// Describes the group.
    async fn describe_group(&self, group_name: &str) -> Result<Vec<GroupStatus>, CoreError>;
}
