//! Exercise models for the tracker service

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise record as held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Validated exercise ready to be inserted
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

/// A duration as sent by clients: JSON number or form/JSON string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(serde_json::Number),
    Text(String),
}

/// Request for logging an exercise
#[derive(Debug, Default, Deserialize)]
pub struct LogExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<DurationInput>,
    pub date: Option<String>,
}

/// Response for a logged exercise
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    /// Id of the owning user
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Query parameters for the exercise log
///
/// Kept as raw strings so that bad values are reported by the handler
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Store-level filter for one user's log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub user_id: Uuid,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// `None` returns every matching entry
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Whether `date` falls inside the inclusive `[from, to]` range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// One entry of the exercise log
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Response for the exercise log
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn open_filter_contains_everything() {
        let filter = LogFilter {
            user_id: Uuid::new_v4(),
            from: None,
            to: None,
            limit: Some(500),
        };
        assert!(filter.contains(date("1970-01-01")));
        assert!(filter.contains(date("2999-12-31")));
    }

    #[test]
    fn bounds_are_inclusive() {
        let filter = LogFilter {
            user_id: Uuid::new_v4(),
            from: Some(date("2024-01-10")),
            to: Some(date("2024-01-20")),
            limit: Some(500),
        };
        assert!(filter.contains(date("2024-01-10")));
        assert!(filter.contains(date("2024-01-20")));
        assert!(!filter.contains(date("2024-01-09")));
        assert!(!filter.contains(date("2024-01-21")));
    }

    #[test]
    fn durations_accept_numbers_and_strings() {
        let req: LogExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert!(matches!(req.duration, Some(DurationInput::Number(_))));

        let req: LogExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":"30"}"#).unwrap();
        assert!(matches!(req.duration, Some(DurationInput::Text(ref s)) if s == "30"));
    }
}
