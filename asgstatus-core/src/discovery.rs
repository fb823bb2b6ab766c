//! Auto Scaling Group discovery from instance tags.

use tracing::{debug, instrument};

use crate::error::CoreError;
use crate::traits::TagSource;

/// Tag AWS puts on every instance launched by an Auto Scaling Group.
pub const GROUP_NAME_TAG: &str = "aws:autoscaling:groupName";

/// Finds the name of the Auto Scaling Group owning `instance_id`.
///
/// Walks every tag page; if the tag shows up more than once the last value
/// wins.
#[instrument(skip(tags))]
pub async fn discover_group_name(
    tags: &dyn TagSource,
    instance_id: &str,
) -> Result<String, CoreError> {
    let mut group_name = None;
    let mut next_token = None;
    let mut pages = 0u32;

    loop {
        let page = tags.tag_page(instance_id, next_token.take()).await?;
        pages += 1;

        if let Some(tag) = page.tags.iter().rev().find(|t| t.key == GROUP_NAME_TAG) {
            group_name = Some(tag.value.clone());
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    debug!(pages, group = ?group_name, "Tag discovery finished");
    group_name.ok_or(CoreError::MissingGroupTag(GROUP_NAME_TAG))
}
