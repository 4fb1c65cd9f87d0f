//! Collaborator seams between the engine and its host shell.
//!
//! The engine never talks to a window or the OS directly. The host hands
//! in a [`BoardUi`] (rendering surface, badge) and a [`Notifier`] (OS
//! notifications); tests hand in recording fakes.

use std::path::PathBuf;

use crate::model::{Note, Task};

/// Payload for an OS notification about a newly due task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueNotification {
    pub title: String,
    pub body: String,
    pub icon: Option<PathBuf>,
    /// When true the notification stays on screen until dismissed.
    pub never_timeout: bool,
}

impl DueNotification {
    pub fn for_task(task: &Task, icon: Option<PathBuf>) -> Self {
        Self {
            title: "A task has come due".to_string(),
            body: task.title.clone(),
            icon,
            never_timeout: true,
        }
    }
}

/// Rendering surface for the board.
pub trait BoardUi {
    /// Push records to the surface. Incremental pushes are allowed: after
    /// completing a repeating task only the renewed successor is pushed.
    fn items_loaded(&mut self, notes: &[Note], tasks: &[Task]);

    /// A task is due. Emitted on every poll for every unacknowledged due
    /// task, not just the first time.
    fn task_due(&mut self, task: &Task);

    /// Count of due tasks not yet acknowledged.
    fn badge_count(&mut self, count: usize);

    /// Whether the surface currently has the user's attention. OS
    /// notifications are suppressed while it does.
    fn is_focused(&self) -> bool;
}

/// OS notification sink. Implementations should refocus the board when
/// the notification is clicked.
pub trait Notifier {
    fn show(&mut self, notification: &DueNotification);
}
