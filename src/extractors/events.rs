//! Football event classification
//!
//! Event nodes carry their kind and side only as class names, e.g.
//! `<div class="match-events-wrapper-child right event-1">`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    #[serde(rename = "goal")]
    Goal,
    #[serde(rename = "yellow_card")]
    YellowCard,
    #[serde(rename = "red_card")]
    RedCard,
    #[serde(rename = "2_yellow_card")]
    SecondYellowCard,
    #[serde(rename = "no_goal")]
    NoGoal,
    #[serde(rename = "penalty")]
    Penalty,
    #[serde(rename = "goal_own")]
    OwnGoal,
    /// Site-specific marker with no known meaning; label kept as the site names it
    #[serde(rename = "nemidonam")]
    Nemidonam,
    #[serde(rename = "in_change")]
    InChange,
    #[serde(rename = "out_change")]
    OutChange,
}

/// Lookup order matters: the first class found in this table wins.
const EVENT_TABLE: [(&str, EventKind); 10] = [
    ("event-1", EventKind::Goal),
    ("event-2", EventKind::YellowCard),
    ("event-3", EventKind::RedCard),
    ("event-4", EventKind::SecondYellowCard),
    ("event-5", EventKind::NoGoal),
    ("event-6", EventKind::Penalty),
    ("event-7", EventKind::OwnGoal),
    ("event-8", EventKind::Nemidonam),
    ("event-9", EventKind::InChange),
    ("event-10", EventKind::OutChange),
];

impl EventKind {
    /// Map an event node's class list to its kind. Unknown classes give `None`.
    pub fn classify<S: AsRef<str>>(classes: &[S]) -> Option<EventKind> {
        EVENT_TABLE
            .iter()
            .find(|(class, _)| classes.iter().any(|c| c.as_ref() == *class))
            .map(|(_, kind)| *kind)
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
            EventKind::SecondYellowCard => "2_yellow_card",
            EventKind::NoGoal => "no_goal",
            EventKind::Penalty => "penalty",
            EventKind::OwnGoal => "goal_own",
            EventKind::Nemidonam => "nemidonam",
            EventKind::InChange => "in_change",
            EventKind::OutChange => "out_change",
        }
    }
}

/// Which team an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// `right` when the class list has it, `left` otherwise
    pub fn from_classes<S: AsRef<str>>(classes: &[S]) -> Side {
        if classes.iter().any(|c| c.as_ref() == "right") {
            Side::Right
        } else {
            Side::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_key() {
        for (class, kind) in EVENT_TABLE {
            assert_eq!(EventKind::classify(&[class]), Some(kind));
        }
        assert_eq!(EventKind::classify(&["event-4"]).unwrap().label(), "2_yellow_card");
        assert_eq!(EventKind::classify(&["event-8"]).unwrap().label(), "nemidonam");
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(EventKind::classify(&["match-events-wrapper-child", "right"]), None);
        assert_eq!(EventKind::classify(&["event-11", "event-0"]), None);
        assert_eq!(EventKind::classify::<&str>(&[]), None);
    }

    #[test]
    fn test_classify_table_order_wins() {
        assert_eq!(EventKind::classify(&["event-5", "event-2"]), Some(EventKind::YellowCard));
        assert_eq!(EventKind::classify(&["event-10", "event-1"]), Some(EventKind::Goal));
    }

    #[test]
    fn test_labels_match_serialization() {
        for (_, kind) in EVENT_TABLE {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.label().to_string()));
        }
    }

    #[test]
    fn test_side() {
        assert_eq!(
            Side::from_classes(&["match-events-wrapper-child", "right", "event-1"]),
            Side::Right
        );
        assert_eq!(Side::from_classes(&["event-3"]), Side::Left);
        assert_eq!(Side::from_classes(&["left", "event-3"]), Side::Left);
    }
}
