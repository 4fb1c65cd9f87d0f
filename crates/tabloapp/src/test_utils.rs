//! Fixtures and recording fakes for tests.

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::events::{BoardUi, DueNotification, Notifier};
use crate::model::{Note, Task};
use crate::store::MemBackend;

/// `BoardUi` that records every call.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub loaded: Vec<(Vec<Note>, Vec<Task>)>,
    pub due: Vec<Task>,
    pub badges: Vec<usize>,
    pub focused: bool,
}

impl BoardUi for RecordingUi {
    fn items_loaded(&mut self, notes: &[Note], tasks: &[Task]) {
        self.loaded.push((notes.to_vec(), tasks.to_vec()));
    }

    fn task_due(&mut self, task: &Task) {
        self.due.push(task.clone());
    }

    fn badge_count(&mut self, count: usize) {
        self.badges.push(count);
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// `Notifier` that records every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub shown: Vec<DueNotification>,
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, notification: &DueNotification) {
        self.shown.push(notification.clone());
    }
}

/// Memory-backed board with builder-style seeding.
pub struct BoardFixture {
    pub backend: MemBackend,
    pub board: Board<MemBackend>,
}

impl BoardFixture {
    pub fn new() -> Self {
        let backend = MemBackend::new();
        let board = Board::new(backend.clone());
        Self { backend, board }
    }

    pub fn with_note(self, title: &str) -> Self {
        self.board.create_note(title, "").unwrap();
        self
    }

    pub fn with_task(self, title: &str, due: Option<DateTime<Utc>>) -> Self {
        let mut task = Task::new(title, "");
        if let Some(due) = due {
            task = task.with_due_date(due);
        }
        self.board.create_task(task).unwrap();
        self
    }

    pub fn with_repeating_task(
        self,
        title: &str,
        due: DateTime<Utc>,
        value: u32,
        unit: &str,
    ) -> Self {
        let task = Task::new(title, "")
            .with_due_date(due)
            .with_repeat(value, unit);
        self.board.create_task(task).unwrap();
        self
    }
}

impl Default for BoardFixture {
    fn default() -> Self {
        Self::new()
    }
}
