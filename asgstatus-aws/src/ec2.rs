//! Instance tags through EC2 `DescribeTags`.

use asgstatus_core::{CoreError, Tag, TagPage, TagSource};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::Filter;
use aws_sdk_ec2::Client;
use tracing::{debug, instrument};

/// EC2-backed [`TagSource`].
#[derive(Debug, Clone)]
pub struct Ec2Tags {
    client: Client,
}

impl Ec2Tags {
    /// Creates a tag source from shared AWS configuration.
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TagSource for Ec2Tags {
    #[instrument(skip(self))]
    async fn tag_page(
        &self,
        instance_id: &str,
        next_token: Option<String>,
    ) -> Result<TagPage, CoreError> {
        let output = self
            .client
            .describe_tags()
            .filters(Filter::builder().name("resource-id").values(instance_id).build())
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| CoreError::api("DescribeTags", DisplayErrorContext(&e).to_string()))?;

        let tags: Vec<Tag> = output
            .tags()
            .iter()
            .filter_map(|t| Some(Tag::new(t.key()?, t.value().unwrap_or_default())))
            .collect();

        debug!(count = tags.len(), more = output.next_token().is_some(), "Tag page received");

        Ok(TagPage {
            tags,
            next_token: output.next_token().map(str::to_owned),
        })
    }
}
