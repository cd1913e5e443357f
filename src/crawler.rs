//! Livescore crawler
//!
//! Fetches the target page lazily and keeps one parsed [`Document`] per
//! distinct URL for the lifetime of the crawler. Entries never expire.
//!
//! The cache is plain owned state: use one crawler per thread, or wrap it in
//! a lock if it has to be shared.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::{validate_url, CrawlerConfig};
use crate::document::Document;
use crate::error::Result;
use crate::extractors::{
    extract_football, extract_livescore, extract_volleyball, FootballMatch, Livescore, StageMap,
    VolleyballMatch,
};
use crate::fetch::{HttpSource, PageSource};

pub struct LivescoreCrawler<S: PageSource = HttpSource> {
    target_url: String,
    source: S,
    documents: HashMap<String, Document>,
}

impl LivescoreCrawler<HttpSource> {
    /// Build a crawler that fetches over HTTP. No request is made until an
    /// extraction method is called.
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        config.validate()?;
        let source = HttpSource::new(&config);
        Ok(Self::from_parts(config.target_url, source))
    }
}

impl<S: PageSource> LivescoreCrawler<S> {
    /// Build a crawler on top of any page source
    pub fn with_source(config: CrawlerConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config.target_url, source))
    }

    fn from_parts(target_url: String, source: S) -> Self {
        Self {
            target_url,
            source,
            documents: HashMap::new(),
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Point the crawler at another page. Documents already fetched stay cached.
    /// Surrounding whitespace is stripped before the URL is validated.
    pub fn set_target_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into().trim().to_string();
        validate_url(&url)?;
        self.target_url = url;
        Ok(())
    }

    /// URLs with a parsed document in the cache
    pub fn cached_urls(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The parsed target page, fetched on first use
    pub fn document(&mut self) -> Result<&Document> {
        if self.documents.contains_key(&self.target_url) {
            debug!(url = %self.target_url, "using cached document");
        } else {
            let body = self.source.fetch(&self.target_url)?;
            info!(url = %self.target_url, bytes = body.len(), "fetched livescore page");
            let document = Document::parse(self.target_url.clone(), &body);
            self.documents.insert(self.target_url.clone(), document);
        }

        Ok(&self.documents[&self.target_url])
    }

    pub fn football(&mut self) -> Result<StageMap<FootballMatch>> {
        extract_football(self.document()?.html())
    }

    pub fn volleyball(&mut self) -> Result<StageMap<VolleyballMatch>> {
        extract_volleyball(self.document()?.html())
    }

    /// Both sports, keyed `football` and `volleyball` when serialized
    pub fn livescore(&mut self) -> Result<Livescore> {
        extract_livescore(self.document()?.html())
    }
}
