//! Error types
//!
//! Only configuration and fetch problems are errors. Missing markup is not.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LivescoreError {
    #[error("target url for crawler should not be empty")]
    EmptyUrl,

    #[error("invalid target url \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("invalid selector \"{css}\": {reason}")]
    Selector { css: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LivescoreError>;
