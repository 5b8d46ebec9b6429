// SPDX-License-Identifier: MPL-2.0
//! Per-toast auto-dismiss timers.
//!
//! Each toast gets its own abortable countdown task. Handles are kept in a
//! map keyed by `ToastId`, so any removal path can cancel the matching timer
//! and teardown can cancel all of them at once.

use super::notification::ToastId;
use iced::task::Handle;
use iced::Task;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Resolves to `id` once `duration` has elapsed.
pub fn expiry(id: ToastId, duration: Duration) -> impl Future<Output = ToastId> + Send {
    async move {
        tokio::time::sleep(duration).await;
        id
    }
}

/// Owns the pending countdown of every active toast.
#[derive(Debug)]
pub struct Scheduler {
    duration: Duration,
    timers: HashMap<ToastId, Handle>,
}

impl Scheduler {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            timers: HashMap::new(),
        }
    }

    /// Time a toast stays up before it is dismissed automatically.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts the countdown for `id`.
    ///
    /// The returned task yields `id` when the countdown fires. Scheduling an
    /// id twice replaces (and aborts) the earlier countdown.
    pub fn schedule(&mut self, id: ToastId) -> Task<ToastId> {
        let (task, handle) = Task::perform(expiry(id, self.duration), |id| id).abortable();
        if let Some(previous) = self.timers.insert(id, handle) {
            previous.abort();
        }
        task
    }

    /// Aborts the countdown for `id`.
    ///
    /// Returns `false` when nothing was pending.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.timers.remove(&id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Forgets the countdown for `id` after it fired.
    ///
    /// Returns `false` when the countdown had already been cancelled, which
    /// means the expiry lost a race and must be ignored.
    pub fn finish(&mut self, id: ToastId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Aborts every pending countdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: ToastId) -> bool {
        self.timers.contains_key(&id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub(super) fn handle(&self, id: ToastId) -> Option<&Handle> {
        self.timers.get(&id)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
