//! Football match rows

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

use super::events::{EventKind, Side};
use super::{RowHeader, Sport, StageMap, StageSelectors};
use crate::document::{first_text, selector};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootballMatch {
    pub start_time: String,
    pub start_date: String,
    pub match_status: String,
    pub team_right: FootballTeam,
    pub team_left: FootballTeam,
    pub events: MatchEvents,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FootballTeam {
    pub name: String,
    pub score: String,
}

/// Events per side; a side with no events is left out of the output entirely
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchEvents {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_right: Vec<MatchEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_left: Vec<MatchEvent>,
}

impl MatchEvents {
    pub fn push(&mut self, side: Side, event: MatchEvent) {
        match side {
            Side::Right => self.team_right.push(event),
            Side::Left => self.team_left.push(event),
        }
    }

    pub fn side(&self, side: Side) -> &[MatchEvent] {
        match side {
            Side::Right => &self.team_right,
            Side::Left => &self.team_left,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.team_right.is_empty() && self.team_left.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    /// `None` when the node carries no known `event-N` class
    pub name: Option<EventKind>,
    pub time: String,
    pub player: String,
}

struct FootballSelectors {
    team_right_name: Selector,
    team_right_score: Selector,
    team_left_name: Selector,
    team_left_score: Selector,
    event_node: Selector,
    occure_time: Selector,
    player: Selector,
}

impl FootballSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            team_right_name: selector(".team-names .teamname.right")?,
            team_right_score: selector(".team-names .scores-container .score.right")?,
            team_left_name: selector(".team-names .teamname.left")?,
            team_left_score: selector(".team-names .scores-container .score.left")?,
            event_node: selector(".match-events-wrapper > div")?,
            occure_time: selector(".occure-time")?,
            player: selector("span")?,
        })
    }

    fn read_match(&self, row: &ElementRef, header: RowHeader) -> FootballMatch {
        let RowHeader {
            start_time,
            start_date,
            match_status,
        } = header;

        FootballMatch {
            start_time,
            start_date,
            match_status,
            team_right: FootballTeam {
                name: first_text(row, &self.team_right_name),
                score: first_text(row, &self.team_right_score),
            },
            team_left: FootballTeam {
                name: first_text(row, &self.team_left_name),
                score: first_text(row, &self.team_left_score),
            },
            events: self.read_events(row),
        }
    }

    fn read_events(&self, row: &ElementRef) -> MatchEvents {
        let mut events = MatchEvents::default();

        for node in row.select(&self.event_node) {
            let classes: Vec<&str> = node.value().classes().collect();
            events.push(
                Side::from_classes(&classes),
                MatchEvent {
                    name: EventKind::classify(&classes),
                    time: first_text(&node, &self.occure_time),
                    player: first_text(&node, &self.player),
                },
            );
        }

        events
    }
}

/// Extract football stages from a parsed page
pub fn extract_football(html: &Html) -> Result<StageMap<FootballMatch>> {
    let stages = StageSelectors::new(Sport::Football)?;
    let fields = FootballSelectors::new()?;

    let result = stages.collect(html, |row, header| fields.read_match(row, header));

    debug!(
        stages = result.len(),
        matches = result.match_count(),
        "extracted football livescore"
    );
    Ok(result)
}

/// Parse HTML and extract football stages
pub fn parse_football(html: &str) -> Result<StageMap<FootballMatch>> {
    extract_football(&Html::parse_document(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = r#"
    <html><body>
    <div class="stage-wrapper sport0">
        <div class="stage-name">Premier League </div>
        <div class="match-row">
            <span class="start-time"> 18:30 </span>
            <span class="start-date">1395/08/12</span>
            <span class="match-status"> End </span>
            <div class="team-names">
                <span class="teamname right">Esteghlal</span>
                <div class="scores-container">
                    <span class="score right"> 2 </span>
                    <span class="score left">1</span>
                </div>
                <span class="teamname left">Persepolis</span>
            </div>
            <div class="match-events-wrapper">
                <div class="match-events-wrapper-child right event-1">
                    <div class="occure-time">12'</div>
                    <span> Player A </span>
                </div>
                <div class="event-3">
                    <div class="occure-time">40'</div>
                    <span>Player B</span>
                </div>
                <div class="match-events-wrapper-child right event-99">
                    <div class="occure-time">77'</div>
                    <span>Player C</span>
                </div>
            </div>
        </div>
        <div class="match-row">
            <span class="start-time">20:00</span>
            <span class="start-date">1395/08/12</span>
            <span class="match-status">Not started</span>
            <div class="team-names">
                <span class="teamname right">Sepahan</span>
                <span class="teamname left">Tractor</span>
            </div>
            <div class="match-events-wrapper"></div>
        </div>
    </div>
    <div class="stage-wrapper sport2">
        <div class="stage-name">Volleyball League</div>
        <div class="match-row"><span class="start-time">10:00</span></div>
    </div>
    </body></html>
    "#;

    #[test]
    fn test_football_match_fields() {
        let stages = parse_football(PAGE).unwrap();
        assert_eq!(stages.len(), 1);

        // Stage names keep their whitespace
        let matches = stages.get("Premier League ").unwrap();
        assert_eq!(matches.len(), 2);

        let first = &matches[0];
        assert_eq!(first.start_time, "18:30");
        assert_eq!(first.start_date, "1395/08/12");
        assert_eq!(first.match_status, "End");
        assert_eq!(first.team_right.name, "Esteghlal");
        assert_eq!(first.team_right.score, "2");
        assert_eq!(first.team_left.name, "Persepolis");
        assert_eq!(first.team_left.score, "1");
    }

    #[test]
    fn test_football_events() {
        let stages = parse_football(PAGE).unwrap();
        let events = &stages.get("Premier League ").unwrap()[0].events;

        let right = events.side(Side::Right);
        assert_eq!(right.len(), 2);
        assert_eq!(right[0].name, Some(EventKind::Goal));
        assert_eq!(right[0].time, "12'");
        assert_eq!(right[0].player, "Player A");
        assert_eq!(right[1].name, None);
        assert_eq!(right[1].player, "Player C");

        let left = events.side(Side::Left);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].name, Some(EventKind::RedCard));
        assert_eq!(left[0].time, "40'");
    }

    #[test]
    fn test_match_without_events_serializes_empty_mapping() {
        let stages = parse_football(PAGE).unwrap();
        let second = &stages.get("Premier League ").unwrap()[1];

        assert!(second.events.is_empty());
        assert_eq!(second.team_right.score, "");

        let value = serde_json::to_value(second).unwrap();
        assert_eq!(value["events"], json!({}));
        assert_eq!(
            value["team_left"],
            json!({ "name": "Tractor", "score": "" })
        );
    }

    #[test]
    fn test_unknown_event_serializes_null_name() {
        let stages = parse_football(PAGE).unwrap();
        let value = serde_json::to_value(&stages).unwrap();
        let right = &value["Premier League "][0]["events"]["team_right"];
        assert_eq!(right[0]["name"], json!("goal"));
        assert_eq!(right[1]["name"], json!(null));
    }

    #[test]
    fn test_duplicate_stage_names_are_merged() {
        let html = r#"
        <div class="stage-wrapper sport0">
            <div class="stage-name">Cup</div>
            <div class="match-row"><span class="start-time">10:00</span></div>
        </div>
        <div class="stage-wrapper sport0">
            <div class="stage-name">Cup</div>
            <div class="match-row"><span class="start-time">12:00</span></div>
        </div>
        "#;

        let stages = parse_football(html).unwrap();
        assert_eq!(stages.len(), 1);
        let times: Vec<&str> = stages
            .get("Cup")
            .unwrap()
            .iter()
            .map(|m| m.start_time.as_str())
            .collect();
        assert_eq!(times, vec!["10:00", "12:00"]);
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let html = r#"
        <div class="stage-wrapper sport0">
            <div class="match-row"></div>
        </div>
        "#;

        let stages = parse_football(html).unwrap();
        let m = &stages.get("").unwrap()[0];
        assert_eq!(m.start_time, "");
        assert_eq!(m.match_status, "");
        assert_eq!(m.team_right, FootballTeam::default());
        assert!(m.events.is_empty());
    }
}
