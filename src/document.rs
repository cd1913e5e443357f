//! Parsed pages and small selection helpers
//!
//! Uses the scraper crate to select elements by CSS selectors.

use scraper::{ElementRef, Html, Selector};

use crate::error::{LivescoreError, Result};

/// A fetched page. Immutable once parsed.
#[derive(Debug)]
pub struct Document {
    url: String,
    html: Html,
}

impl Document {
    pub fn parse(url: impl Into<String>, body: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(body),
        }
    }

    /// URL the page was fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

/// Compile a built-in selector
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LivescoreError::Selector {
        css: css.to_string(),
        reason: e.to_string(),
    })
}

/// Full text content of an element, untouched
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Trimmed text of the first match under `scope`, or empty when nothing matches
pub(crate) fn first_text(scope: &ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(&el).trim().to_string())
        .unwrap_or_default()
}
