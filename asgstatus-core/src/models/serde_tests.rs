//! Serde tests for core types.
//!
//! Field names here must match what AWS serves (identity documents) and what
//! operators read in command output.

use chrono::{TimeZone, Utc};

use crate::{
    GroupInstance, GroupStatus, GroupsOutput, HealthStatus, InstanceIdentity, ScalingActivity,
    StandbyOutput,
};

// ============================================================================
// InstanceIdentity
// ============================================================================

#[test]
fn test_identity_parses_imds_document() {
    let document = r#"{
        "accountId" : "123456789012",
        "architecture" : "x86_64",
        "availabilityZone" : "eu-west-1a",
        "billingProducts" : null,
        "imageId" : "ami-0abcdef1234567890",
        "instanceId" : "i-0123456789abcdef0",
        "instanceType" : "t3.micro",
        "pendingTime" : "2024-01-01T00:00:00Z",
        "privateIp" : "10.0.0.12",
        "region" : "eu-west-1",
        "version" : "2017-09-30"
    }"#;

    let identity = InstanceIdentity::from_document(document).unwrap();
    assert_eq!(identity.instance_id, "i-0123456789abcdef0");
    assert_eq!(identity.region, "eu-west-1");
    assert_eq!(identity.availability_zone.as_deref(), Some("eu-west-1a"));
    assert_eq!(identity.private_ip.as_deref(), Some("10.0.0.12"));
}

#[test]
fn test_identity_requires_instance_id() {
    let document = r#"{"region": "us-east-1"}"#;
    assert!(InstanceIdentity::from_document(document).is_err());
}

#[test]
fn test_identity_minimal_document() {
    let document = r#"{"instanceId": "i-1", "region": "us-east-1"}"#;
    let identity = InstanceIdentity::from_document(document).unwrap();
    assert_eq!(identity, InstanceIdentity::new("i-1", "us-east-1"));
}

// ============================================================================
// Auto Scaling views
// ============================================================================

#[test]
fn test_health_status_wire_values() {
    assert_eq!(HealthStatus::Healthy.as_str(), "Healthy");
    assert_eq!(HealthStatus::Unhealthy.to_string(), "Unhealthy");
}

#[test]
fn test_activity_serializes_pascal_case_with_null_for_unset() {
    let activity = ScalingActivity {
        activity_id: Some("a-1".to_string()),
        status_code: Some("InProgress".to_string()),
        progress: Some(50),
        start_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        ..Default::default()
    };

    let json = serde_json::to_value(&activity).unwrap();
    assert_eq!(json["ActivityId"], "a-1");
    assert_eq!(json["StatusCode"], "InProgress");
    assert_eq!(json["Progress"], 50);
    assert_eq!(json["StartTime"], "2024-05-01T12:00:00Z");
    assert!(json["Cause"].is_null());
    assert!(json["EndTime"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 10);
}

#[test]
fn test_standby_output_wraps_activities() {
    let output = StandbyOutput {
        activities: vec![ScalingActivity {
            status_code: Some("InProgress".to_string()),
            ..Default::default()
        }],
    };

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["Activities"][0]["StatusCode"], "InProgress");
    assert!(json["Activities"][0]["ActivityId"].is_null());
}

#[test]
fn test_groups_output_wraps_groups() {
    let output = GroupsOutput {
        auto_scaling_groups: vec![GroupStatus {
            auto_scaling_group_name: "web".to_string(),
            ..Default::default()
        }],
    };

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["AutoScalingGroups"][0]["AutoScalingGroupName"], "web");
    assert!(json["AutoScalingGroups"][0]["MinSize"].is_null());
}

#[test]
fn test_group_status_instance_lookup() {
    let group = GroupStatus {
        auto_scaling_group_name: "web".to_string(),
        instances: vec![
            GroupInstance {
                instance_id: "i-1".to_string(),
                lifecycle_state: Some("InService".to_string()),
                ..Default::default()
            },
            GroupInstance {
                instance_id: "i-2".to_string(),
                lifecycle_state: Some("Standby".to_string()),
                ..Default::default()
            },
            GroupInstance {
                instance_id: "i-3".to_string(),
                lifecycle_state: Some("InService".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    assert_eq!(
        group.instance("i-2").and_then(|i| i.lifecycle_state.as_deref()),
        Some("Standby")
    );
    assert!(group.instance("i-9").is_none());
    assert_eq!(group.count_in_state("InService"), 2);

    let json = serde_json::to_value(&group).unwrap();
    assert_eq!(json["AutoScalingGroupName"], "web");
    assert_eq!(json["Instances"].as_array().unwrap().len(), 3);
}
