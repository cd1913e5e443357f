//! Page fetching over blocking HTTP

use std::time::Duration;

use tracing::debug;

use crate::config::CrawlerConfig;
use crate::error::{LivescoreError, Result};

/// Anything that can turn a URL into an HTML body.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// ureq-backed source. One agent is reused for every request.
#[derive(Clone)]
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(config: &CrawlerConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                .user_agent(config.user_agent.as_str())
                .build(),
        );

        Self { agent }
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        // Non-2xx responses come back as `ureq::Error::StatusCode`
        let resp = self
            .agent
            .get(url)
            .call()
            .map_err(|e| call_error(url, e))?;

        let body = resp
            .into_body()
            .read_to_string()
            .map_err(|e| LivescoreError::Body {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

fn call_error(url: &str, error: ureq::Error) -> LivescoreError {
    match error {
        ureq::Error::StatusCode(status) => LivescoreError::Status {
            url: url.to_string(),
            status,
        },
        e => LivescoreError::Http {
            url: url.to_string(),
            source: Box::new(e),
        },
    }
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}
