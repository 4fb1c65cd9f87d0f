//! Controller flows over the filesystem backend.

use chrono::{DateTime, TimeZone, Utc};
use tabloapp::events::{BoardUi, DueNotification, Notifier};
use tabloapp::model::{Note, Task};
use tabloapp::store::FsBackend;
use tabloapp::Board;
use tempfile::TempDir;

#[derive(Default)]
struct TestUi {
    due: Vec<Task>,
    badges: Vec<usize>,
}

impl BoardUi for TestUi {
    fn items_loaded(&mut self, _notes: &[Note], _tasks: &[Task]) {}
    fn task_due(&mut self, task: &Task) {
        self.due.push(task.clone());
    }
    fn badge_count(&mut self, count: usize) {
        self.badges.push(count);
    }
    fn is_focused(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct TestNotifier {
    shown: Vec<DueNotification>,
}

impl Notifier for TestNotifier {
    fn show(&mut self, notification: &DueNotification) {
        self.shown.push(notification.clone());
    }
}

fn at(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 1, h, 0, 0).unwrap()
}

#[test]
fn test_restart_reannounces_still_due_tasks() {
    let dir = TempDir::new().unwrap();
    let mut ui = TestUi::default();
    let mut notifier = TestNotifier::default();

    {
        let mut board = Board::new(FsBackend::new(dir.path()));
        board
            .create_task(Task::new("overdue", "").with_due_date(at(8)))
            .unwrap();
        board.tick(at(10), &mut ui, &mut notifier).unwrap();
        board.tick(at(11), &mut ui, &mut notifier).unwrap();
    }
    assert_eq!(notifier.shown.len(), 1);

    // the notified set does not survive the process
    let mut board = Board::new(FsBackend::new(dir.path()));
    board.tick(at(12), &mut ui, &mut notifier).unwrap();

    assert_eq!(notifier.shown.len(), 2);
    assert_eq!(board.badge(), 1);
}

#[test]
fn test_renewed_task_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut ui = TestUi::default();

    let original_id = {
        let mut board = Board::new(FsBackend::new(dir.path()));
        let task = Task::new("monthly report", "")
            .with_due_date(at(8))
            .with_repeat(1, "months");
        let id = task.id;
        board.create_task(task).unwrap();
        board.complete_task(id, &mut ui).unwrap();
        id
    };

    let board = Board::new(FsBackend::new(dir.path()));
    let tasks = board.tasks().unwrap();

    assert_eq!(tasks.len(), 1);
    assert_ne!(tasks[0].id, original_id);
    assert_eq!(
        tasks[0].due_date,
        Some(Utc.with_ymd_and_hms(2021, 7, 1, 8, 0, 0).unwrap())
    );
    assert!(tasks[0].is_repeated());
}

#[test]
fn test_tick_sees_tasks_added_after_startup() {
    let dir = TempDir::new().unwrap();
    let mut ui = TestUi::default();
    let mut notifier = TestNotifier::default();
    let mut board = Board::new(FsBackend::new(dir.path()));

    let empty = board.tick(at(10), &mut ui, &mut notifier).unwrap();
    assert!(empty.ringing.is_empty());

    board
        .create_task(Task::new("late arrival", "").with_due_date(at(9)))
        .unwrap();
    let report = board.tick(at(11), &mut ui, &mut notifier).unwrap();

    assert_eq!(report.newly_due.len(), 1);
    assert_eq!(notifier.shown.len(), 1);
}
