//! Livescore parser
//!
//! Extracts football and volleyball livescores from the varzesh3 livescore page:
//! - Stages (league/tournament sections) in page order
//! - Match times, status, team names and scores
//! - Football in-match events (goals, cards, substitutions)
//! - Volleyball per-set scores
//!
//! Pages are fetched with a blocking HTTP client and parsed with CSS selectors.

pub mod config;
pub mod crawler;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod ffi;

pub use config::CrawlerConfig;
pub use crawler::LivescoreCrawler;
pub use document::Document;
pub use error::{LivescoreError, Result};
pub use extractors::*;
pub use fetch::{HttpSource, PageSource};
