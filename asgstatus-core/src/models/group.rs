//! Auto Scaling Group types.
//!
//! - [`HealthStatus`] - Health reported for an instance
//! - [`ScalingActivity`] - Activity started by a standby transition
//! - [`GroupStatus`] - Described group with its instances
//! - [`StandbyOutput`] / [`GroupsOutput`] - Response objects printed by the CLI
//!
//! Unset fields serialize as `null` so printed responses keep every key.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Health Status
// ============================================================================

/// Health status reported to the Auto Scaling Group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Instance is serving.
    Healthy,
    /// Instance should be replaced.
    Unhealthy,
}

impl HealthStatus {
    /// Returns the value the Auto Scaling API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Scaling Activity
// ============================================================================

/// A scaling activity returned by `EnterStandby` / `ExitStandby`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingActivity {
    /// Activity ID.
    pub activity_id: Option<String>,
    /// Group the activity belongs to.
    pub auto_scaling_group_name: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Why the activity started.
    pub cause: Option<String>,
    /// When the activity started.
    pub start_time: Option<DateTime<Utc>>,
    /// When the activity ended.
    pub end_time: Option<DateTime<Utc>>,
    /// Current status code, e.g. `InProgress`.
    pub status_code: Option<String>,
    /// Status message.
    pub status_message: Option<String>,
    /// Progress percentage.
    pub progress: Option<i32>,
    /// Free-form details.
    pub details: Option<String>,
}

/// Response of `EnterStandby` / `ExitStandby`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandbyOutput {
    /// Activities started by the transition.
    #[serde(default)]
    pub activities: Vec<ScalingActivity>,
}

// ============================================================================
// Group Status
// ============================================================================

/// Snapshot of an Auto Scaling Group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupStatus {
    /// Group name.
    pub auto_scaling_group_name: String,
    /// Minimum size.
    pub min_size: Option<i32>,
    /// Maximum size.
    pub max_size: Option<i32>,
    /// Desired capacity.
    pub desired_capacity: Option<i32>,
    /// Health check type (`EC2` or `ELB`).
    pub health_check_type: Option<String>,
    /// Health check grace period in seconds.
    pub health_check_grace_period: Option<i32>,
    /// Group status, set while the group is being deleted.
    pub status: Option<String>,
    /// Instances in the group.
    #[serde(default)]
    pub instances: Vec<GroupInstance>,
}

impl GroupStatus {
    /// Finds an instance by ID.
    pub fn instance(&self, instance_id: &str) -> Option<&GroupInstance> {
        self.instances
            .iter()
            .find(|instance| instance.instance_id == instance_id)
    }

    /// Counts instances in the given lifecycle state.
    pub fn count_in_state(&self, lifecycle_state: &str) -> usize {
        self.instances
            .iter()
            .filter(|instance| instance.lifecycle_state.as_deref() == Some(lifecycle_state))
            .count()
    }
}

/// Response of `DescribeAutoScalingGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupsOutput {
    /// Described groups.
    #[serde(default)]
    pub auto_scaling_groups: Vec<GroupStatus>,
}

/// An instance as seen by its Auto Scaling Group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupInstance {
    /// Instance ID.
    pub instance_id: String,
    /// Lifecycle state, e.g. `InService` or `Standby`.
    pub lifecycle_state: Option<String>,
    /// Health status as the group sees it.
    pub health_status: Option<String>,
    /// Availability zone.
    pub availability_zone: Option<String>,
    /// Instance type.
    pub instance_type: Option<String>,
    /// Scale-in protection flag.
    pub protected_from_scale_in: Option<bool>,
}
