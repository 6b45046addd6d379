use crate::common::*;

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    #[doc = "
        Fetch the raw text content of a resource exactly once.
        # Arguments
        * `resource` - File path (relative to the resource base dir) or http(s) URL
    "]
    async fn fetch_text(&self, resource: &str) -> anyhow::Result<String>;
}
