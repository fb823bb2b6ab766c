//! Mapping from Auto Scaling SDK types to core views.

use asgstatus_core::{GroupInstance, GroupStatus, ScalingActivity};
use aws_sdk_autoscaling::primitives::DateTime;
use aws_sdk_autoscaling::types::{
    Activity, AutoScalingGroup, Instance, LifecycleState, ScalingActivityStatusCode,
};
use chrono::Utc;

// ============================================================================
// Field Conversion
// ============================================================================

// Getters for members the service model marks required return plain values,
// the rest return `Option`. `Into<Option<_>>` takes either.

fn text<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    value.into().map(str::to_owned)
}

fn time<'a>(value: impl Into<Option<&'a DateTime>>) -> Option<chrono::DateTime<Utc>> {
    value
        .into()
        .and_then(|time| chrono::DateTime::from_timestamp(time.secs(), time.subsec_nanos()))
}

// ============================================================================
// Views
// ============================================================================

pub(crate) fn activity(activity: &Activity) -> ScalingActivity {
    ScalingActivity {
        activity_id: text(activity.activity_id()),
        auto_scaling_group_name: text(activity.auto_scaling_group_name()),
        description: text(activity.description()),
        cause: text(activity.cause()),
        start_time: time(activity.start_time()),
        end_time: time(activity.end_time()),
        status_code: Option::<&ScalingActivityStatusCode>::from(activity.status_code())
            .map(|code| code.as_str().to_owned()),
        status_message: text(activity.status_message()),
        progress: activity.progress().into(),
        details: text(activity.details()),
    }
}

pub(crate) fn group(group: &AutoScalingGroup) -> GroupStatus {
    GroupStatus {
        auto_scaling_group_name: text(group.auto_scaling_group_name()).unwrap_or_default(),
        min_size: group.min_size().into(),
        max_size: group.max_size().into(),
        desired_capacity: group.desired_capacity().into(),
        health_check_type: text(group.health_check_type()),
        health_check_grace_period: group.health_check_grace_period().into(),
        status: text(group.status()),
        instances: group.instances().iter().map(instance).collect(),
    }
}

fn instance(instance: &Instance) -> GroupInstance {
    GroupInstance {
        instance_id: text(instance.instance_id()).unwrap_or_default(),
        lifecycle_state: Option::<&LifecycleState>::from(instance.lifecycle_state())
            .map(|state| state.as_str().to_owned()),
        health_status: text(instance.health_status()),
        availability_zone: text(instance.availability_zone()),
        instance_type: text(instance.instance_type()),
        protected_from_scale_in: instance.protected_from_scale_in().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_both_getter_shapes() {
        assert_eq!(text("web"), Some("web".to_string()));
        assert_eq!(text(Some("web")), Some("web".to_string()));
        assert_eq!(text(None::<&str>), None);
    }

    #[test]
    fn test_time_converts_to_utc() {
        let start = DateTime::from_secs(1_714_564_800);
        assert_eq!(
            time(&start).map(|t| t.to_rfc3339()),
            Some("2024-05-01T12:00:00+00:00".to_string())
        );
        assert_eq!(time(Some(&start)), time(&start));
        assert_eq!(time(None::<&DateTime>), None);
    }

    #[test]
    fn test_enum_values_keep_wire_names() {
        let state = LifecycleState::from("Standby");
        assert_eq!(state.as_str(), "Standby");

        let code = ScalingActivityStatusCode::from("InProgress");
        assert_eq!(
            Option::<&ScalingActivityStatusCode>::from(&code).map(|c| c.as_str().to_owned()),
            Some("InProgress".to_string())
        );
    }
}
