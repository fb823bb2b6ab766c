//! `status` command.

use anyhow::Result;
use asgstatus_core::{AutoScalingApi, GroupsOutput};
use tracing::debug;

use super::InstanceContext;

/// Describes the instance's group.
pub async fn run(api: &dyn AutoScalingApi, ctx: &InstanceContext) -> Result<GroupsOutput> {
    let groups = api.describe_group(&ctx.group_name).await?;

    if let Some(instance) = groups.iter().find_map(|g| g.instance(&ctx.instance_id)) {
        debug!(
            lifecycle_state = ?instance.lifecycle_state,
            health_status = ?instance.health_status,
            "Instance state in group"
        );
    }

    Ok(GroupsOutput {
        auto_scaling_groups: groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::{ctx, FakeAutoScaling};

    #[tokio::test]
    async fn test_status_describes_own_group() {
        let api = FakeAutoScaling::default();

        let groups = run(&api, &ctx()).await.unwrap().auto_scaling_groups;

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].auto_scaling_group_name, "web-asg");
        assert_eq!(
            groups[0]
                .instance("i-0123456789abcdef0")
                .and_then(|i| i.lifecycle_state.as_deref()),
            Some("InService")
        );
    }
}
