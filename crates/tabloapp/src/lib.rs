//! # tabloapp
//!
//! Engine for a single-user note/task board. Notes and tasks live in JSON
//! documents on disk; tasks may carry a due date and a calendar repeat
//! rule. A background poll checks for due tasks, rings them on the UI
//! surface, sends one OS notification per task, and keeps a badge equal to
//! the number of unacknowledged due tasks. Completing a repeating task
//! renews it with the due date advanced on the calendar.
//!
//! The crate is UI-agnostic: hosts implement [`BoardUi`] and [`Notifier`]
//! and drive a [`Board`] directly or through a [`DuePoller`].

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod poller;
pub mod recurrence;
pub mod scanner;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use board::Board;
pub use config::{default_data_dir, BoardConfig};
pub use error::{BoardError, Result};
pub use events::{BoardUi, DueNotification, Notifier};
pub use model::{Note, RepeatRule, Task};
pub use poller::{DuePoller, DEFAULT_POLL_INTERVAL};
pub use recurrence::{next_due, RepeatUnit};
pub use scanner::{DueScanner, ScanReport};
