//! `enter-standby` / `exit-standby` commands.

use anyhow::Result;
use asgstatus_core::{AutoScalingApi, StandbyOutput};
use tracing::info;

use super::InstanceContext;

/// Moves the instance into standby.
pub async fn enter(api: &dyn AutoScalingApi, ctx: &InstanceContext) -> Result<StandbyOutput> {
    let activities = api.enter_standby(&ctx.group_name, &ctx.instance_id).await?;
    info!(group = %ctx.group_name, activities = activities.len(), "Entered standby");
    Ok(StandbyOutput { activities })
}

/// Returns the instance from standby.
pub async fn exit(api: &dyn AutoScalingApi, ctx: &InstanceContext) -> Result<StandbyOutput> {
    let activities = api.exit_standby(&ctx.group_name, &ctx.instance_id).await?;
    info!(group = %ctx.group_name, activities = activities.len(), "Exited standby");
    Ok(StandbyOutput { activities })
}
