//! CLI command implementations.

pub mod health;
pub mod standby;
pub mod status;

use anyhow::Result;
use asgstatus_core::{AutoScalingApi, GroupsOutput, HealthStatus, StandbyOutput};
use asgstatus_probe::HealthWait;
use clap::ValueEnum;

/// Lifecycle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Move this instance to standby, decrementing desired capacity.
    EnterStandby,
    /// Return this instance from standby to service.
    ExitStandby,
    /// Report healthy, after the healthcheck passes if one is configured.
    Healthy,
    /// Report unhealthy.
    Unhealthy,
    /// Describe the instance's Auto Scaling Group.
    Status,
}

/// Who we are and which group we belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceContext {
    /// EC2 instance ID.
    pub instance_id: String,
    /// Owning Auto Scaling Group.
    pub group_name: String,
}

/// What a command produced.
#[derive(Debug)]
pub enum CommandOutput {
    /// Health was reported.
    Health(HealthStatus),
    /// Response of a standby transition.
    Standby(StandbyOutput),
    /// Described groups.
    Groups(GroupsOutput),
}

/// Runs `command` for the instance in `ctx`.
pub async fn dispatch(
    command: Command,
    ctx: &InstanceContext,
    api: &dyn AutoScalingApi,
    healthcheck: Option<&HealthWait>,
) -> Result<CommandOutput> {
    let output = match command {
        Command::Healthy => CommandOutput::Health(health::healthy(api, ctx, healthcheck).await?),
        Command::Unhealthy => CommandOutput::Health(health::unhealthy(api, ctx).await?),
        Command::EnterStandby => CommandOutput::Standby(standby::enter(api, ctx).await?),
        Command::ExitStandby => CommandOutput::Standby(standby::exit(api, ctx).await?),
        Command::Status => CommandOutput::Groups(status::run(api, ctx).await?),
    };
    Ok(output)
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory Auto Scaling API recording every call.

    use std::sync::Mutex;

    use asgstatus_core::{
        AutoScalingApi, CoreError, GroupInstance, GroupStatus, HealthStatus, ScalingActivity,
    };
    use async_trait::async_trait;

    use super::InstanceContext;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        SetHealth(String, HealthStatus),
        EnterStandby(String, String),
        ExitStandby(String, String),
        Describe(String),
    }

    #[derive(Default)]
    pub struct FakeAutoScaling {
        pub calls: Mutex<Vec<Call>>,
        pub fail: bool,
    }

    impl FakeAutoScaling {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> Result<(), CoreError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(CoreError::api("Fake", "throttled"))
            } else {
                Ok(())
            }
        }
    }

    pub fn ctx() -> InstanceContext {
        InstanceContext {
            instance_id: "i-0123456789abcdef0".to_string(),
            group_name: "web-asg".to_string(),
        }
    }

    fn activity(description: &str) -> ScalingActivity {
        ScalingActivity {
            activity_id: Some("act-1".to_string()),
            description: Some(description.to_string()),
            status_code: Some("InProgress".to_string()),
            ..Default::default()
        }
    }

    #[async_trait]
    impl AutoScalingApi for FakeAutoScaling {
        async fn set_instance_health(
            &self,
            instance_id: &str,
            status: HealthStatus,
        ) -> Result<(), CoreError> {
            self.record(Call::SetHealth(instance_id.to_string(), status))
        }

        async fn enter_standby(
            &self,
            group_name: &str,
            instance_id: &str,
        ) -> Result<Vec<ScalingActivity>, CoreError> {
            self.record(Call::EnterStandby(group_name.to_string(), instance_id.to_string()))?;
            Ok(vec![activity("Moving EC2 instance to Standby")])
        }

        async fn exit_standby(
            &self,
            group_name: &str,
            instance_id: &str,
        ) -> Result<Vec<ScalingActivity>, CoreError> {
            self.record(Call::ExitStandby(group_name.to_string(), instance_id.to_string()))?;
            Ok(vec![activity("Moving EC2 instance out of Standby")])
        }

        async fn describe_group(&self, group_name: &str) -> Result<Vec<GroupStatus>, CoreError> {
            self.record(Call::Describe(group_name.to_string()))?;
            Ok(vec![GroupStatus {
                auto_scaling_group_name: group_name.to_string(),
                desired_capacity: Some(2),
                instances: vec![GroupInstance {
                    instance_id: "i-0123456789abcdef0".to_string(),
                    lifecycle_state: Some("InService".to_string()),
                    health_status: Some("Healthy".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }])
        }
    }
}
