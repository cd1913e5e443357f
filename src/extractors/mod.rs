//! Livescore extractors
//!
//! Each sport section of the page lives in a `.stage-wrapper.sport{N}` block.
//! The walk over stages and match rows is shared; the per-sport modules only
//! know how to read one match row.

mod events;
mod football;
mod volleyball;

pub use events::*;
pub use football::*;
pub use volleyball::*;

use scraper::{ElementRef, Html, Selector};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::{element_text, first_text, selector};
use crate::error::Result;

/// Sport codes used in the stage wrapper class names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sport {
    Football,
    Volleyball,
}

impl Sport {
    pub fn code(self) -> u8 {
        match self {
            Sport::Football => 0,
            Sport::Volleyball => 2,
        }
    }
}

/// Stage name to matches, in the order stages appear on the page.
///
/// Stages sharing a name are merged: later matches are appended to the
/// existing list.
#[derive(Debug, Clone, PartialEq)]
pub struct StageMap<M> {
    stages: Vec<(String, Vec<M>)>,
}

impl<M> StageMap<M> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn push(&mut self, stage: &str, record: M) {
        match self.stages.iter().position(|(name, _)| name == stage) {
            Some(i) => self.stages[i].1.push(record),
            None => self.stages.push((stage.to_string(), vec![record])),
        }
    }

    pub fn get(&self, stage: &str) -> Option<&[M]> {
        self.stages
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, matches)| matches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[M])> {
        self.stages
            .iter()
            .map(|(name, matches)| (name.as_str(), matches.as_slice()))
    }

    /// Number of distinct stage names
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.stages.iter().map(|(_, matches)| matches.len()).sum()
    }
}

impl<M> Default for StageMap<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Serialize> Serialize for StageMap<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stages.len()))?;
        for (name, matches) in &self.stages {
            map.serialize_entry(name, matches)?;
        }
        map.end()
    }
}

/// Both sports from one page
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Livescore {
    pub football: StageMap<FootballMatch>,
    pub volleyball: StageMap<VolleyballMatch>,
}

/// Extract every sport from an already parsed page
pub fn extract_livescore(html: &Html) -> Result<Livescore> {
    Ok(Livescore {
        football: extract_football(html)?,
        volleyball: extract_volleyball(html)?,
    })
}

/// Parse HTML and extract every sport
pub fn parse_livescore(html: &str) -> Result<Livescore> {
    extract_livescore(&Html::parse_document(html))
}

/// Timing fields every match row carries regardless of sport
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RowHeader {
    pub start_time: String,
    pub start_date: String,
    pub match_status: String,
}

pub(crate) struct StageSelectors {
    stage: Selector,
    stage_name: Selector,
    match_row: Selector,
    start_time: Selector,
    start_date: Selector,
    match_status: Selector,
}

impl StageSelectors {
    pub fn new(sport: Sport) -> Result<Self> {
        Ok(Self {
            stage: selector(&format!(".stage-wrapper.sport{}", sport.code()))?,
            stage_name: selector(".stage-name")?,
            match_row: selector(".match-row")?,
            start_time: selector(".start-time")?,
            start_date: selector(".start-date")?,
            match_status: selector(".match-status")?,
        })
    }

    /// Walk stages and their rows in document order, building one record per row
    pub fn collect<M>(
        &self,
        html: &Html,
        mut read_row: impl FnMut(&ElementRef, RowHeader) -> M,
    ) -> StageMap<M> {
        let mut stages = StageMap::new();

        for stage in html.select(&self.stage) {
            // Stage names are used as keys verbatim, whitespace included
            let stage_name = stage
                .select(&self.stage_name)
                .next()
                .map(|el| element_text(&el))
                .unwrap_or_default();

            for row in stage.select(&self.match_row) {
                let header = RowHeader {
                    start_time: first_text(&row, &self.start_time),
                    start_date: first_text(&row, &self.start_date),
                    match_status: first_text(&row, &self.match_status),
                };
                stages.push(&stage_name, read_row(&row, header));
            }
        }

        stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_map_appends_on_collision() {
        let mut stages = StageMap::new();
        stages.push("League A", 1);
        stages.push("Cup", 2);
        stages.push("League A", 3);

        assert_eq!(stages.len(), 2);
        assert_eq!(stages.match_count(), 3);
        assert_eq!(stages.get("League A"), Some(&[1, 3][..]));
        assert_eq!(stages.get("Cup"), Some(&[2][..]));
        assert_eq!(stages.get("Friendly"), None);

        let names: Vec<&str> = stages.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["League A", "Cup"]);
    }

    #[test]
    fn test_stage_map_serializes_in_page_order() {
        let mut stages = StageMap::new();
        stages.push("Zeta", "a");
        stages.push("Alpha", "b");

        let json = serde_json::to_string(&stages).unwrap();
        assert_eq!(json, r#"{"Zeta":["a"],"Alpha":["b"]}"#);
    }

    #[test]
    fn test_sport_codes() {
        assert_eq!(Sport::Football.code(), 0);
        assert_eq!(Sport::Volleyball.code(), 2);
    }

    #[test]
    fn test_collect_without_rows() {
        let html = Html::parse_document(
            r#"<div class="stage-wrapper sport0"><div class="stage-name">Empty</div></div>"#,
        );
        let selectors = StageSelectors::new(Sport::Football).unwrap();
        let stages = selectors.collect(&html, |_, header| header);
        assert!(stages.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let livescore = parse_livescore("<html><body></body></html>").unwrap();
        assert!(livescore.football.is_empty());
        assert!(livescore.volleyball.is_empty());
        assert_eq!(
            serde_json::to_value(&livescore).unwrap(),
            serde_json::json!({ "football": {}, "volleyball": {} })
        );
    }
}
