// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active toasts.
//!
//! The `Store` is the single source of truth for what is on screen. Every
//! successful mutation publishes a fresh snapshot on a `watch` channel so
//! observers outside the update loop see the same ordering the view does.

use super::notification::{ToastContent, ToastId, ToastMessage};
use tokio::sync::watch;

/// Active toasts in insertion order (oldest first).
#[derive(Debug)]
pub struct Store {
    messages: Vec<ToastMessage>,
    snapshot: watch::Sender<Vec<ToastMessage>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self {
            messages: Vec::new(),
            snapshot,
        }
    }

    /// Creates a message from `content`, appends it and returns its id.
    pub fn add(&mut self, content: ToastContent) -> ToastId {
        self.insert(ToastMessage::new(content))
    }

    /// Appends an already-built message.
    ///
    /// Used by handles, which assign ids on their side of the channel.
    pub(super) fn insert(&mut self, message: ToastMessage) -> ToastId {
        let id = message.id();
        self.messages.push(message);
        self.publish();
        id
    }

    /// Removes the message with `id`.
    ///
    /// Returns `false` (and publishes nothing) when no such message is active.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.messages.iter().position(|m| m.id() == id) else {
            return false;
        };
        self.messages.remove(pos);
        self.publish();
        true
    }

    /// Drops every message.
    pub fn clear(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        self.messages.clear();
        self.publish();
    }

    /// Returns a receiver that observes every snapshot from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<ToastMessage>> {
        self.snapshot.subscribe()
    }

    /// Returns the active messages in insertion order.
    pub fn messages(&self) -> impl DoubleEndedIterator<Item = &ToastMessage> {
        self.messages.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastMessage> {
        self.messages.iter().find(|m| m.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn publish(&self) {
        // send_replace keeps the value current even with no live receivers
        self.snapshot.send_replace(self.messages.clone());
    }
}
