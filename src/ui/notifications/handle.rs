// SPDX-License-Identifier: MPL-2.0
//! Capability handed out to code that needs to raise toasts.
//!
//! A `ToastHandle` never touches the store directly: it queues commands and
//! wakes the manager's subscription, so the update loop applies them on its
//! next turn. Once the manager has shut down, every call fails with
//! [`Error::ToastProviderGone`].

use super::notification::{ToastContent, ToastId, ToastMessage};
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Notify};

/// Mutation requested through a handle.
#[derive(Debug)]
pub(super) enum Command {
    Add(ToastMessage),
    Remove(ToastId),
}

/// Cloneable access point to the toast manager.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    commands: mpsc::UnboundedSender<Command>,
    wake: Arc<Notify>,
    snapshot: watch::Receiver<Vec<ToastMessage>>,
}

impl ToastHandle {
    pub(super) fn new(
        commands: mpsc::UnboundedSender<Command>,
        wake: Arc<Notify>,
        snapshot: watch::Receiver<Vec<ToastMessage>>,
    ) -> Self {
        Self {
            commands,
            wake,
            snapshot,
        }
    }

    /// Queues a new toast and returns the id it will carry.
    ///
    /// The toast becomes visible, and its countdown starts, on the next
    /// turn of the update loop.
    pub fn add_toast(&self, content: ToastContent) -> Result<ToastId> {
        let message = ToastMessage::new(content);
        let id = message.id();
        self.send(Command::Add(message))?;
        Ok(id)
    }

    /// Queues removal of `id`. Removing an unknown id is not an error.
    pub fn remove_toast(&self, id: ToastId) -> Result<()> {
        self.send(Command::Remove(id))
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::ToastProviderGone)?;
        self.wake.notify_one();
        Ok(())
    }

    /// Returns the toasts the manager last published.
    pub fn active(&self) -> Result<Vec<ToastMessage>> {
        if self.commands.is_closed() {
            return Err(Error::ToastProviderGone);
        }
        Ok(self.snapshot.borrow().clone())
    }

    /// Returns whether the manager behind this handle is still running.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.commands.is_closed()
    }
}
