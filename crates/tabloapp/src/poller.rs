//! Background polling.
//!
//! [`DuePoller`] owns a worker thread that ticks the board immediately on
//! spawn and then once per interval, until [`stop`](DuePoller::stop) is
//! called. Cancellation rides the same channel the timer sleeps on, so a
//! stop never waits out the interval.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use log::error;

use crate::board::Board;
use crate::events::{BoardUi, Notifier};
use crate::store::StorageBackend;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

pub struct DuePoller {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl DuePoller {
    /// Start polling on a background thread. The first tick happens right
    /// away; a failed tick is logged and the loop keeps going.
    pub fn spawn<B, U, N>(mut board: Board<B>, mut ui: U, mut notifier: N, interval: Duration) -> Self
    where
        B: StorageBackend + Send + 'static,
        U: BoardUi + Send + 'static,
        N: Notifier + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            if let Err(err) = board.tick(Utc::now(), &mut ui, &mut notifier) {
                error!("poll tick failed: {err}");
            }
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                _ => break,
            }
        });

        Self { stop_tx, handle }
    }

    /// Stop the loop and wait for the worker to finish.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}
