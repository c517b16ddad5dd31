use crate::utils::error::Result;
use async_trait::async_trait;

/// The two FreshRSS (Google Reader compatible) API calls the cleaner needs.
#[async_trait]
pub trait FreshRssApi: Send + Sync {
    async fn get_auth_token(&self) -> Result<String>;

    async fn mark_as_read(&self, auth_token: &str, feed_id: &str, older_than_days: u32)
        -> Result<()>;
}
