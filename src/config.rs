//! Crawler configuration

use crate::error::{LivescoreError, Result};

pub const DEFAULT_TARGET_URL: &str = "http://www.varzesh3.com/livescore";
pub const DEFAULT_USER_AGENT: &str = concat!("livescore_parser/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    /// Page holding the livescore tables
    pub target_url: String,
    pub user_agent: String,
    /// Global timeout for one GET, including reading the body
    pub timeout_secs: u64,
}

impl CrawlerConfig {
    /// Surrounding whitespace is stripped from `target_url`
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Reject blank or unparseable target URLs before anything touches the network
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.target_url)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub(crate) fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(LivescoreError::EmptyUrl);
    }

    if url != url.trim() {
        return Err(LivescoreError::InvalidUrl {
            url: url.to_string(),
            reason: "surrounding whitespace".to_string(),
        });
    }

    url::Url::parse(url).map_err(|e| LivescoreError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}
