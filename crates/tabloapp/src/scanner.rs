//! Due-task scanning and the notified set.
//!
//! A due task moves through three states over the scanner's lifetime:
//! pending (not yet due, or due but not yet seen), ringing-unnotified (due,
//! about to be announced), and ringing-notified (due, already announced).
//! Every scan reports all ringing tasks so the surface can keep showing
//! them, but a task enters `newly_due` only the first time it is seen; the
//! OS notification and badge increment happen once per id.
//!
//! The set lives for the scanner's lifetime, not across restarts. A fresh
//! process re-announces every still-due task once.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::Task;

/// Outcome of one scan pass.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Every task currently due, announced or not.
    pub ringing: Vec<Task>,
    /// Tasks that became due since the last scan (first sighting).
    pub newly_due: Vec<Task>,
    /// Badge value after this scan.
    pub badge: usize,
}

#[derive(Debug, Default)]
pub struct DueScanner {
    notified: HashSet<Uuid>,
    badge: usize,
}

impl DueScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badge(&self) -> usize {
        self.badge
    }

    pub fn is_notified(&self, id: Uuid) -> bool {
        self.notified.contains(&id)
    }

    /// Check every task against `now`.
    pub fn scan(&mut self, tasks: &[Task], now: DateTime<Utc>) -> ScanReport {
        let mut report = ScanReport::default();

        for task in tasks {
            if !task.is_due(now) {
                continue;
            }
            report.ringing.push(task.clone());
            if self.notified.insert(task.id) {
                self.badge += 1;
                report.newly_due.push(task.clone());
            }
        }

        report.badge = self.badge;
        report
    }

    /// Silence a ringing task. Idempotent: the badge only drops when the
    /// id was actually in the set. The task itself is untouched, so while
    /// it stays due it will ring again on the next scan.
    pub fn acknowledge(&mut self, id: Uuid) -> bool {
        if self.notified.remove(&id) {
            self.badge = self.badge.saturating_sub(1);
            true
        } else {
            false
        }
    }
}
