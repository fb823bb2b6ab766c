//! Instance identity from the EC2 instance metadata service.

use std::time::Duration;

use asgstatus_core::{CoreError, InstanceIdentity, InstanceMetadata};
use async_trait::async_trait;
use aws_config::imds::client::error::ImdsError;
use aws_config::imds::Client;
use aws_sdk_ec2::error::DisplayErrorContext;
use tracing::{debug, instrument};

/// Path of the identity document.
const IDENTITY_DOCUMENT_PATH: &str = "/latest/dynamic/instance-identity/document";

/// How long to wait for the metadata service before assuming we are not on EC2.
const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// IMDSv2-backed [`InstanceMetadata`].
#[derive(Debug, Clone)]
pub struct ImdsMetadata {
    client: Client,
}

impl ImdsMetadata {
    /// Creates a metadata source with the default IMDS endpoint.
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(1))
            .read_timeout(Duration::from_secs(1))
            .build();
        Self { client }
    }
}

impl Default for ImdsMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstanceMetadata for ImdsMetadata {
    #[instrument(skip(self))]
    async fn identity(&self) -> Result<InstanceIdentity, CoreError> {
        let document = tokio::time::timeout(
            AVAILABILITY_TIMEOUT,
            self.client.get(IDENTITY_DOCUMENT_PATH),
        )
        .await
        .map_err(|_| CoreError::MetadataUnavailable)?
        .map_err(|err| match err {
            ImdsError::FailedToLoadToken(_) => CoreError::MetadataUnavailable,
            other => CoreError::InvalidMetadata(DisplayErrorContext(&other).to_string()),
        })?;

        let identity = InstanceIdentity::from_document(document.as_ref())?;
        debug!(
            instance_id = %identity.instance_id,
            region = %identity.region,
            "Instance identity loaded"
        );
        Ok(identity)
    }
}
