use crate::domain::ports::FreshRssApi;
use crate::utils::error::{CleanerError, Result};
use crate::utils::validation::{validate_required, validate_url};
use async_trait::async_trait;
use chrono::{DateTime, Days, Local};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CLIENT_LOGIN_PATH: &str = "/accounts/ClientLogin";
const MARK_ALL_AS_READ_PATH: &str = "/reader/api/0/mark-all-as-read";
const AUTH_LINE_PREFIX: &str = "Auth=";

/// Builder for [`FreshRssClient`]. Required fields are checked by [`ClientOptions::build`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    base_url: String,
    username: String,
    password: String,
    http_client: Option<Client>,
    timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Uses `http_client` as-is. A timeout set with [`ClientOptions::with_timeout`]
    /// does not apply to a supplied client.
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<FreshRssClient> {
        let wrap = |e: CleanerError| match e {
            CleanerError::ConfigError { message } => CleanerError::config(format!(
                "invalid FreshRSS client configuration: {}",
                message
            )),
            other => other,
        };

        validate_url("base URL", &self.base_url).map_err(wrap)?;
        validate_required("username", &self.username).map_err(wrap)?;
        validate_required("password", &self.password).map_err(wrap)?;

        let http_client = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() {
                    tracing::debug!("Custom HTTP client supplied, ignoring timeout option");
                }
                client
            }
            None => Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| {
                    CleanerError::config(format!("failed to build HTTP client: {}", e))
                })?,
        };

        Ok(FreshRssClient {
            base_url: self.base_url,
            username: self.username,
            password: self.password,
            http_client,
        })
    }
}

/// Client for the Google Reader compatible API exposed by FreshRSS.
#[derive(Clone)]
pub struct FreshRssClient {
    base_url: String,
    username: String,
    password: String,
    http_client: Client,
}

impl std::fmt::Debug for FreshRssClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreshRssClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl FreshRssClient {
    pub fn builder() -> ClientOptions {
        ClientOptions::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FreshRssApi for FreshRssClient {
    async fn get_auth_token(&self) -> Result<String> {
        let endpoint = format!("{}{}", self.base_url, CLIENT_LOGIN_PATH);
        tracing::debug!("Requesting auth token from: {}", endpoint);

        let response = self
            .http_client
            .get(&endpoint)
            .query(&[("Email", &self.username), ("Passwd", &self.password)])
            .send()
            .await
            .map_err(|e| CleanerError::network("error executing auth request", e))?;

        let status = response.status();
        let body = read_body(response, "auth").await?;

        if status != StatusCode::OK {
            return Err(CleanerError::AuthError {
                status: status.as_u16(),
                body,
            });
        }

        parse_auth_token(&body)
    }

    async fn mark_as_read(
        &self,
        auth_token: &str,
        feed_id: &str,
        older_than_days: u32,
    ) -> Result<()> {
        if auth_token.is_empty() {
            return Err(CleanerError::invalid_argument("auth token is required"));
        }
        if feed_id.is_empty() {
            return Err(CleanerError::invalid_argument("feed ID is required"));
        }

        let cutoff = cutoff_micros(Local::now(), older_than_days)?;
        let endpoint = format!("{}{}", self.base_url, MARK_ALL_AS_READ_PATH);
        tracing::debug!(
            feed_id,
            cutoff,
            "Marking entries older than {} day(s) as read",
            older_than_days
        );

        let mut request = self
            .http_client
            .post(&endpoint)
            .form(&[("s", feed_id.to_string()), ("ts", cutoff.to_string())]);
        if !auth_token.is_empty() {
            request = request.header(AUTHORIZATION, format!("GoogleLogin auth={}", auth_token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| CleanerError::network("error executing mark-as-read request", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(CleanerError::protocol(format!(
                "mark-as-read request failed with unexpected status code {}: {}",
                status.as_u16(),
                body
            )));
        }

        Ok(())
    }
}

async fn read_body(response: Response, request_name: &str) -> Result<String> {
    response.text().await.map_err(|e| {
        CleanerError::network(format!("error reading {} response body", request_name), e)
    })
}

/// Extracts the token from a ClientLogin response body.
///
/// The body must have at least three lines (`SID=`, `LSID=`, `Auth=` in a
/// well-formed response); the token is taken from the first line starting
/// with `Auth=`, wherever it appears.
pub fn parse_auth_token(body: &str) -> Result<String> {
    let lines: Vec<&str> = body.split('\n').collect();
    if lines.len() < 3 {
        return Err(CleanerError::protocol("unexpected auth response format"));
    }

    lines
        .iter()
        .find_map(|line| line.strip_prefix(AUTH_LINE_PREFIX))
        .map(str::to_string)
        .ok_or_else(|| CleanerError::protocol("auth token not found in response"))
}

/// `now` minus `days` calendar days, in microseconds since the Unix epoch
/// (nanoseconds truncated, not rounded).
pub fn cutoff_micros(now: DateTime<Local>, days: u32) -> Result<i64> {
    now.checked_sub_days(Days::new(u64::from(days)))
        .and_then(|cutoff| cutoff.timestamp_nanos_opt())
        .map(|nanos| nanos / 1_000)
        .ok_or_else(|| {
            CleanerError::invalid_argument(format!("{} days is out of range", days))
        })
}
