//! # Board Controller
//!
//! [`Board`] is the facade the host shell talks to: CRUD over notes and
//! tasks, the poll tick, ring acknowledgement, and task completion with
//! recurrence. It owns the typed stores and the [`DueScanner`] and pushes
//! state changes out through the [`BoardUi`] and [`Notifier`] seams.
//!
//! Completing a repeating task renews it: the successor gets a fresh id and
//! the due date advanced per the repeat rule, is persisted and pushed to
//! the surface, and only then is the original removed. A repeat rule with
//! an unrecognized unit still removes the original but surfaces the error
//! instead of renewing.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::events::{BoardUi, DueNotification, Notifier};
use crate::model::{Note, Task};
use crate::recurrence::next_due;
use crate::scanner::{DueScanner, ScanReport};
use crate::store::{RecordStore, StorageBackend, NOTES, TASKS};

pub struct Board<B: StorageBackend> {
    notes: RecordStore<B, Note>,
    tasks: RecordStore<B, Task>,
    scanner: DueScanner,
    notification_icon: Option<PathBuf>,
}

impl<B: StorageBackend + Clone> Board<B> {
    pub fn new(backend: B) -> Self {
        Self {
            notes: RecordStore::new(backend.clone(), NOTES),
            tasks: RecordStore::new(backend, TASKS),
            scanner: DueScanner::new(),
            notification_icon: None,
        }
    }
}

impl<B: StorageBackend> Board<B> {
    pub fn with_notification_icon(mut self, icon: PathBuf) -> Self {
        self.notification_icon = Some(icon);
        self
    }

    pub fn badge(&self) -> usize {
        self.scanner.badge()
    }

    pub fn notes(&self) -> Result<Vec<Note>> {
        self.notes.list()
    }

    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.tasks.list()
    }

    /// Push everything in the store to the surface, as on startup.
    pub fn load_items(&self, ui: &mut impl BoardUi) -> Result<()> {
        let notes = self.notes.list()?;
        let tasks = self.tasks.list()?;
        ui.items_loaded(&notes, &tasks);
        Ok(())
    }

    pub fn create_note(&self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content);
        self.notes.add(&note)?;
        info!("created note {}", note.id);
        Ok(note)
    }

    pub fn create_task(&self, task: Task) -> Result<Task> {
        self.tasks.add(&task)?;
        info!("created task {}", task.id);
        Ok(task)
    }

    pub fn delete_note(&self, id: Uuid) -> Result<bool> {
        self.notes.remove(id)
    }

    /// Delete a task. If it was ringing, its badge contribution goes too.
    pub fn delete_task(&mut self, id: Uuid, ui: &mut impl BoardUi) -> Result<bool> {
        let removed = self.tasks.remove(id)?;
        if self.scanner.acknowledge(id) {
            ui.badge_count(self.scanner.badge());
        }
        Ok(removed)
    }

    /// Silence a ringing task without touching the store. The task stays
    /// due, so it rings again on the next poll.
    pub fn acknowledge_ring(&mut self, id: Uuid, ui: &mut impl BoardUi) -> bool {
        if self.scanner.acknowledge(id) {
            ui.badge_count(self.scanner.badge());
            true
        } else {
            false
        }
    }

    /// Complete a task. A repeating task with a due date is renewed first;
    /// the renewed successor is returned. The original is removed even when
    /// renewal fails on a bad repeat rule, and that error is returned.
    pub fn complete_task(&mut self, id: Uuid, ui: &mut impl BoardUi) -> Result<Option<Task>> {
        let task = self.tasks.get(id)?.ok_or(BoardError::NotFound(id))?;

        let successor = match (&task.repeat, task.due_date) {
            (Some(rule), Some(due)) => match next_due(due, rule.value, &rule.unit) {
                Ok(next) => {
                    let renewed = Task {
                        id: Uuid::new_v4(),
                        due_date: Some(next),
                        ..task.clone()
                    };
                    self.tasks.add(&renewed)?;
                    ui.items_loaded(&[], std::slice::from_ref(&renewed));
                    info!("renewed task {} as {} due {}", id, renewed.id, next);
                    Ok(Some(renewed))
                }
                Err(err) => {
                    warn!("cannot renew task {}: {}", id, err);
                    Err(err)
                }
            },
            _ => Ok(None),
        };

        self.tasks.remove(id)?;
        if self.scanner.acknowledge(id) {
            ui.badge_count(self.scanner.badge());
        }

        successor
    }

    /// One poll pass: scan the store against `now`, ring every due task on
    /// the surface, and send an OS notification for each first sighting
    /// unless the surface is focused.
    pub fn tick(
        &mut self,
        now: DateTime<Utc>,
        ui: &mut impl BoardUi,
        notifier: &mut impl Notifier,
    ) -> Result<ScanReport> {
        let tasks = self.tasks.list()?;
        let report = self.scanner.scan(&tasks, now);

        for task in &report.ringing {
            ui.task_due(task);
        }
        ui.badge_count(report.badge);

        if !ui.is_focused() {
            for task in &report.newly_due {
                notifier.show(&DueNotification::for_task(
                    task,
                    self.notification_icon.clone(),
                ));
            }
        }

        Ok(report)
    }
}
