//! Terminal implementations of the board's UI seams.

use console::style;
use tabloapp::events::{BoardUi, DueNotification, Notifier};
use tabloapp::model::{Note, Task};

use crate::print;

/// Rings due tasks on stdout. `interactive` marks one-shot command
/// invocations, where the user is looking at the terminal and an extra OS
/// notification would be noise.
pub struct TermUi {
    interactive: bool,
    last_badge: Option<usize>,
}

impl TermUi {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            last_badge: None,
        }
    }
}

impl BoardUi for TermUi {
    fn items_loaded(&mut self, _notes: &[Note], _tasks: &[Task]) {}

    fn task_due(&mut self, task: &Task) {
        print::print_ring(task);
    }

    fn badge_count(&mut self, count: usize) {
        // only announce changes, and stay quiet about the initial zero
        if self.last_badge == Some(count) || (self.last_badge.is_none() && count == 0) {
            self.last_badge = Some(count);
            return;
        }
        self.last_badge = Some(count);
        println!("{}", style(format!("{count} task(s) ringing")).yellow());
    }

    fn is_focused(&self) -> bool {
        self.interactive
    }
}

/// Rings the terminal bell in place of an OS notification.
#[derive(Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn show(&mut self, notification: &DueNotification) {
        eprint!("\x07");
        eprintln!(
            "{} {}",
            style(&notification.title).red().bold(),
            notification.body
        );
    }
}
