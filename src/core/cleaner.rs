use crate::config::{FeedConfig, RootConfig};
use crate::domain::ports::FreshRssApi;
use crate::utils::error::{CleanerError, Result};

/// Outcome of one cleaning pass, in the order the feeds are configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub processed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl CleanSummary {
    pub fn attempted(&self) -> usize {
        self.processed.len() + self.failed.len()
    }
}

pub struct CleanerBuilder<A: FreshRssApi> {
    client: Option<A>,
    config: Option<RootConfig>,
}

impl<A: FreshRssApi> Default for CleanerBuilder<A> {
    fn default() -> Self {
        Self {
            client: None,
            config: None,
        }
    }
}

impl<A: FreshRssApi> CleanerBuilder<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, client: A) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_config(mut self, config: RootConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Cleaner<A>> {
        let client = self.client.ok_or_else(|| {
            CleanerError::config("invalid cleaner configuration: client is required")
        })?;
        let config = self.config.ok_or_else(|| {
            CleanerError::config("invalid cleaner configuration: config is required")
        })?;

        Ok(Cleaner { client, config })
    }
}

/// Applies each feed's retention rule against a FreshRSS instance.
pub struct Cleaner<A: FreshRssApi> {
    client: A,
    config: RootConfig,
}

impl<A: FreshRssApi> Cleaner<A> {
    pub fn builder() -> CleanerBuilder<A> {
        CleanerBuilder::new()
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    /// Fetches one auth token, then marks old entries as read feed by feed.
    ///
    /// Only a failure to obtain the token fails the pass. Per-feed errors are
    /// logged, recorded in the summary and the remaining feeds still run.
    pub async fn clean_old_entries(&self) -> Result<CleanSummary> {
        tracing::info!("Fetching auth token");
        let auth_token = self
            .client
            .get_auth_token()
            .await
            .map_err(|e| CleanerError::AuthTokenError {
                source: Box::new(e),
            })?;

        let mut summary = CleanSummary::default();

        for feed in &self.config.feeds {
            tracing::info!(feed_id = %feed.id, days = feed.days, "Processing feed");

            match self.process_feed(feed, &auth_token).await {
                Ok(()) => summary.processed.push(feed.id.clone()),
                Err(e) => {
                    tracing::error!(feed_id = %feed.id, error = %e, "Failed to process feed");
                    summary.failed.push((feed.id.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            "Processed {} feed(s), {} failed",
            summary.processed.len(),
            summary.failed.len()
        );

        Ok(summary)
    }

    async fn process_feed(&self, feed: &FeedConfig, auth_token: &str) -> Result<()> {
        self.client
            .mark_as_read(auth_token, &feed.id, feed.days)
            .await
    }
}
