//! Volleyball match rows

use scraper::{ElementRef, Html, Selector};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use super::{RowHeader, Sport, StageMap, StageSelectors};
use crate::document::{element_text, selector};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VolleyballMatch {
    pub start_time: String,
    pub start_date: String,
    pub match_status: String,
    pub team_right: VolleyballTeam,
    pub team_left: VolleyballTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct VolleyballTeam {
    pub name: String,
    pub score: ScoreSheet,
}

/// One team's score column: the match total followed by per-set points.
///
/// Serializes as `{"total": .., "1": .., "2": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreSheet {
    pub total: Option<String>,
    pub sets: Vec<String>,
}

impl ScoreSheet {
    /// First cell is the total, the rest are sets in order
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::into);
        Self {
            total: cells.next(),
            sets: cells.collect(),
        }
    }

    /// Points in a set, 1-based
    pub fn set(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.sets.get(i))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_none() && self.sets.is_empty()
    }
}

impl Serialize for ScoreSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = self.sets.len() + usize::from(self.total.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(total) = &self.total {
            map.serialize_entry("total", total)?;
        }
        for (i, points) in self.sets.iter().enumerate() {
            map.serialize_entry(&(i + 1), points)?;
        }
        map.end()
    }
}

struct VolleyballSelectors {
    team_name: Selector,
    top_scores: Selector,
    bottom_scores: Selector,
}

impl VolleyballSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            team_name: selector(".team-names .left-align-name")?,
            top_scores: selector(".team-names .scores-container .vertical-half.top div")?,
            bottom_scores: selector(".team-names .scores-container .vertical-half.bottom div")?,
        })
    }

    fn read_match(&self, row: &ElementRef, header: RowHeader) -> VolleyballMatch {
        let RowHeader {
            start_time,
            start_date,
            match_status,
        } = header;

        // Names carry no side class: the first one is the left team, the last one
        // the right team, anything in between is ignored
        let names: Vec<String> = row
            .select(&self.team_name)
            .map(|el| element_text(&el).trim().to_string())
            .collect();

        VolleyballMatch {
            start_time,
            start_date,
            match_status,
            team_right: VolleyballTeam {
                name: names.last().cloned().unwrap_or_default(),
                score: self.read_scores(row, &self.bottom_scores),
            },
            team_left: VolleyballTeam {
                name: names.first().cloned().unwrap_or_default(),
                score: self.read_scores(row, &self.top_scores),
            },
        }
    }

    fn read_scores(&self, row: &ElementRef, column: &Selector) -> ScoreSheet {
        ScoreSheet::from_cells(
            row.select(column)
                .map(|cell| element_text(&cell).trim().to_string()),
        )
    }
}

/// Extract volleyball stages from a parsed page
pub fn extract_volleyball(html: &Html) -> Result<StageMap<VolleyballMatch>> {
    let stages = StageSelectors::new(Sport::Volleyball)?;
    let fields = VolleyballSelectors::new()?;

    let result = stages.collect(html, |row, header| fields.read_match(row, header));

    debug!(
        stages = result.len(),
        matches = result.match_count(),
        "extracted volleyball livescore"
    );
    Ok(result)
}

/// Parse HTML and extract volleyball stages
pub fn parse_volleyball(html: &str) -> Result<StageMap<VolleyballMatch>> {
    extract_volleyball(&Html::parse_document(html))
}
