//! Auto Scaling control-plane calls.

use asgstatus_core::{AutoScalingApi, CoreError, GroupStatus, HealthStatus, ScalingActivity};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_autoscaling::error::DisplayErrorContext;
use aws_sdk_autoscaling::Client;
use tracing::{debug, instrument};

use crate::convert;

/// Auto Scaling-backed [`AutoScalingApi`].
#[derive(Debug, Clone)]
pub struct AwsAutoScaling {
    client: Client,
}

impl AwsAutoScaling {
    /// Creates the adapter from shared AWS configuration.
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

fn api_error<E: std::error::Error>(operation: &'static str, err: &E) -> CoreError {
    CoreError::api(operation, DisplayErrorContext(err).to_string())
}

#[async_trait]
impl AutoScalingApi for AwsAutoScaling {
    #[instrument(skip(self), fields(status = %status))]
    async fn set_instance_health(
        &self,
        instance_id: &str,
        status: HealthStatus,
    ) -> Result<(), CoreError> {
        self.client
            .set_instance_health()
            .instance_id(instance_id)
            .health_status(status.as_str())
            .should_respect_grace_period(false)
            .send()
            .await
            .map_err(|e| api_error("SetInstanceHealth", &e))?;

        debug!("Instance health set");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn enter_standby(
        &self,
        group_name: &str,
        instance_id: &str,
    ) -> Result<Vec<ScalingActivity>, CoreError> {
        let output = self
            .client
            .enter_standby()
            .auto_scaling_group_name(group_name)
            .instance_ids(instance_id)
            .should_decrement_desired_capacity(true)
            .send()
            .await
            .map_err(|e| api_error("EnterStandby", &e))?;

        Ok(output.activities().iter().map(convert::activity).collect())
    }

    #[instrument(skip(self))]
    async fn exit_standby(
        &self,
        group_name: &str,
        instance_id: &str,
    ) -> Result<Vec<ScalingActivity>, CoreError> {
        let output = self
            .client
            .exit_standby()
            .auto_scaling_group_name(group_name)
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| api_error("ExitStandby", &e))?;

        Ok(output.activities().iter().map(convert::activity).collect())
    }

    #[instrument(skip(self))]
    async fn describe_group(&self, group_name: &str) -> Result<Vec<GroupStatus>, CoreError> {
        let output = self
            .client
            .describe_auto_scaling_groups()
            .auto_scaling_group_names(group_name)
            .send()
            .await
            .map_err(|e| api_error("DescribeAutoScalingGroups", &e))?;

        Ok(output
            .auto_scaling_groups()
            .iter()
            .map(convert::group)
            .collect())
    }
}
