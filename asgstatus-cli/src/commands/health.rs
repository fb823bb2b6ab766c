//! `healthy` / `unhealthy` commands.

use anyhow::Result;
use asgstatus_core::{AutoScalingApi, HealthStatus};
use asgstatus_probe::HealthWait;
use tracing::{error, info};

use super::InstanceContext;

/// Reports the instance healthy.
///
/// With a healthcheck configured, waits for it first; a healthcheck that
/// times out is logged and the instance is reported unhealthy instead.
pub async fn healthy(
    api: &dyn AutoScalingApi,
    ctx: &InstanceContext,
    healthcheck: Option<&HealthWait>,
) -> Result<HealthStatus> {
    let status = match healthcheck {
        Some(wait) => match wait.wait_until_healthy().await {
            Ok(_) => HealthStatus::Healthy,
            Err(err) => {
                error!("{}", err);
                HealthStatus::Unhealthy
            }
        },
        None => HealthStatus::Healthy,
    };

    report(api, ctx, status).await?;
    Ok(status)
}

/// Reports the instance unhealthy.
pub async fn unhealthy(api: &dyn AutoScalingApi, ctx: &InstanceContext) -> Result<HealthStatus> {
    report(api, ctx, HealthStatus::Unhealthy).await?;
    Ok(HealthStatus::Unhealthy)
}

async fn report(api: &dyn AutoScalingApi, ctx: &InstanceContext, status: HealthStatus) -> Result<()> {
    api.set_instance_health(&ctx.instance_id, status).await?;
    info!(instance_id = %ctx.instance_id, %status, "Reported instance health");
    Ok(())
}
