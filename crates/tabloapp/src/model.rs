//! # Domain Model: Notes and Tasks
//!
//! A [`Note`] is free-form text with no scheduling; its lifecycle is
//! create/persist/delete. A [`Task`] optionally carries a due date and a
//! [`RepeatRule`]; a task without a due date is never due.
//!
//! Repetition is encoded as `Option<RepeatRule>`. The rule's unit stays a
//! raw string rather than an enum so that a malformed unit in a persisted
//! document surfaces when the recurrence is computed (see
//! [`crate::recurrence`]), not as a deserialization failure that would make
//! the whole collection unreadable.
//!
//! Ids are fresh v4 uuids assigned at construction. A renewed repeating
//! task is a brand new record with a new id; the engine never reuses ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Record for Note {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Calendar offset applied to a completed repeating task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRule {
    /// How many units to advance per occurrence. Must be positive.
    pub value: u32,
    /// One of `hours`, `days`, `months`, `years`.
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub repeat: Option<RepeatRule>,
}

impl Task {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            due_date: None,
            repeat: None,
        }
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_repeat(mut self, value: u32, unit: &str) -> Self {
        self.repeat = Some(RepeatRule {
            value,
            unit: unit.to_string(),
        });
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.repeat.is_some()
    }

    /// A task is due once the clock reaches its due date.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        matches!(self.due_date, Some(due) if now >= due)
    }
}

impl Record for Task {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_task_without_due_date_is_never_due() {
        let task = Task::new("Untitled", "");
        assert!(!task.is_due(Utc::now()));
        assert!(!task.is_due(Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_task_due_at_and_after_due_date() {
        let due = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let task = Task::new("Pay rent", "").with_due_date(due);

        assert!(!task.is_due(due - Duration::seconds(1)));
        assert!(task.is_due(due));
        assert!(task.is_due(due + Duration::days(3)));
    }

    #[test]
    fn test_with_repeat_marks_task_repeated() {
        let task = Task::new("Water plants", "");
        assert!(!task.is_repeated());

        let task = task.with_repeat(3, "days");
        assert!(task.is_repeated());
        assert_eq!(
            task.repeat,
            Some(RepeatRule {
                value: 3,
                unit: "days".to_string()
            })
        );
    }

    #[test]
    fn test_task_serialization_roundtrip() {
        let task = Task::new("Backup", "Run the backup script")
            .with_due_date(Utc.with_ymd_and_hms(2021, 1, 31, 9, 0, 0).unwrap())
            .with_repeat(1, "months");

        let json = serde_json::to_string(&task).unwrap();
        let loaded: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, task);
    }

    #[test]
    fn test_legacy_task_without_schedule_fields() {
        let id = Uuid::new_v4();
        // Document written before due_date/repeat existed
        let json = format!(
            r#"{{"id": "{}", "title": "Old Task", "content": "body"}}"#,
            id
        );

        let loaded: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.due_date, None);
        assert_eq!(loaded.repeat, None);
        assert!(!loaded.is_repeated());
    }

    #[test]
    fn test_note_ids_are_unique() {
        let a = Note::new("A", "");
        let b = Note::new("A", "");
        assert_ne!(a.id, b.id);
    }
}
