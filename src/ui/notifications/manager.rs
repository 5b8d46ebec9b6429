// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` is the only writer of the toast store. It pairs every toast
//! with an auto-dismiss countdown, cancels that countdown on manual
//! dismissal, and hands out [`ToastHandle`]s to the rest of the application.
//!
//! Commands queued through a handle wake [`Manager::subscription`], which
//! turns them into [`Message::Queued`] so the update loop applies them on
//! its next turn.

use super::handle::{Command, ToastHandle};
use super::notification::{ToastContent, ToastId, ToastMessage};
use super::scheduler::Scheduler;
use super::store::Store;
use crate::app::config::{StackOrder, DEFAULT_TOAST_DURATION_MS};
use futures_util::stream::{self, BoxStream, StreamExt};
use iced::{Subscription, Task};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Notify};

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user clicked the close button of a toast.
    Dismiss(ToastId),
    /// The countdown of a toast fired.
    Expired(ToastId),
    /// A handle queued commands; `pump` applies them.
    Queued,
}

/// Tunables read from the `[toast]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub duration: Duration,
    pub stack_order: StackOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            stack_order: StackOrder::default(),
        }
    }
}

/// Owns the toast store, its timers, and the command queue fed by handles.
#[derive(Debug)]
pub struct Manager {
    store: Store,
    scheduler: Scheduler,
    stack_order: StackOrder,
    sender: mpsc::UnboundedSender<Command>,
    commands: mpsc::UnboundedReceiver<Command>,
    wake: Arc<Notify>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let (sender, commands) = mpsc::unbounded_channel();
        Self {
            store: Store::new(),
            scheduler: Scheduler::new(settings.duration),
            stack_order: settings.stack_order,
            sender,
            commands,
            wake: Arc::new(Notify::new()),
        }
    }

    /// Returns a handle for code that cannot reach the manager directly.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle::new(
            self.sender.clone(),
            Arc::clone(&self.wake),
            self.store.subscribe(),
        )
    }

    /// Shows a toast and starts its countdown.
    ///
    /// The returned task must be run by the caller; it reports
    /// [`Message::Expired`] when the countdown fires.
    pub fn add_toast(&mut self, content: ToastContent) -> (ToastId, Task<Message>) {
        let id = self.store.add(content);
        (id, self.start_countdown(id))
    }

    /// Removes a toast and cancels its countdown.
    ///
    /// Returns `false` if the toast was already gone.
    pub fn remove_toast(&mut self, id: ToastId) -> bool {
        self.scheduler.cancel(id);
        let removed = self.store.remove(id);
        if removed {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Handles a toast message.
    ///
    /// [`Message::Queued`] carries no work of its own: the caller follows
    /// every message with [`Manager::pump`].
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                self.remove_toast(id);
            }
            Message::Expired(id) => {
                // A cancelled countdown may still deliver; the dismissal won.
                if self.scheduler.finish(id) && self.store.remove(id) {
                    tracing::debug!(%id, "toast expired");
                }
            }
            Message::Queued => {}
        }
    }

    /// Applies every command queued by handles, oldest first.
    pub fn pump(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::Add(message) => tasks.push(self.admit(message)),
                Command::Remove(id) => {
                    self.remove_toast(id);
                }
            }
        }
        Task::batch(tasks)
    }

    /// Tears the manager down.
    ///
    /// Handles stop accepting commands, every countdown is aborted and all
    /// toasts are discarded.
    pub fn shutdown(&mut self) {
        self.commands.close();
        while self.commands.try_recv().is_ok() {}
        self.scheduler.cancel_all();
        self.store.clear();
        tracing::debug!("toast manager shut down");
    }

    /// Returns the active toasts in display order.
    pub fn visible(&self) -> Box<dyn Iterator<Item = &ToastMessage> + '_> {
        match self.stack_order {
            StackOrder::NewestLast => Box::new(self.store.messages()),
            StackOrder::NewestFirst => Box::new(self.store.messages().rev()),
        }
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastMessage> {
        self.store.get(id)
    }

    /// Returns whether `id` is still shown.
    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.store.contains(id)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Returns whether `id` still has a countdown running.
    #[must_use]
    pub fn is_pending(&self, id: ToastId) -> bool {
        self.scheduler.is_pending(id)
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    #[must_use]
    pub fn stack_order(&self) -> StackOrder {
        self.stack_order
    }

    /// Countdown applied to every new toast.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.scheduler.duration()
    }

    /// Emits [`Message::Queued`] whenever a handle queues a command.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(CommandFeed(Arc::clone(&self.wake)), CommandFeed::stream)
    }

    /// Stream behind [`Manager::subscription`].
    ///
    /// Wake-ups that arrive while nobody listens are kept, so a command
    /// queued before the stream is polled still yields one message.
    pub fn command_feed(&self) -> BoxStream<'static, Message> {
        command_feed(Arc::clone(&self.wake))
    }

    /// Observes store snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<ToastMessage>> {
        self.store.subscribe()
    }

    fn admit(&mut self, message: ToastMessage) -> Task<Message> {
        let id = self.store.insert(message);
        self.start_countdown(id)
    }

    fn start_countdown(&mut self, id: ToastId) -> Task<Message> {
        tracing::debug!(%id, "toast shown");
        self.scheduler.schedule(id).map(Message::Expired)
    }
}

/// Identifies the wake signal of one manager inside a subscription.
struct CommandFeed(Arc<Notify>);

impl CommandFeed {
    fn stream(&self) -> BoxStream<'static, Message> {
        command_feed(Arc::clone(&self.0))
    }
}

impl Hash for CommandFeed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

fn command_feed(wake: Arc<Notify>) -> BoxStream<'static, Message> {
    stream::unfold(wake, |wake| async move {
        wake.notified().await;
        Some((Message::Queued, wake))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::ToastKind;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn add_toast_starts_countdown() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::new("Welcome"));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.contains(id));
        assert!(manager.is_pending(id));
    }

    #[test]
    fn add_then_remove_leaves_nothing_behind() {
        let mut manager = Manager::default();
        let _ = manager.add_toast(ToastContent::new("existing"));
        let before = manager.visible_count();

        let (id, _task) = manager.add_toast(ToastContent::new("Welcome"));
        assert!(manager.remove_toast(id));

        assert_eq!(manager.visible_count(), before);
        assert!(manager.get(id).is_none());
        assert!(!manager.is_pending(id));
    }

    #[test]
    fn dismiss_twice_is_noop() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::new("twice"));

        manager.handle_message(&Message::Dismiss(id));
        manager.handle_message(&Message::Dismiss(id));

        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn expiry_after_dismiss_is_ignored() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::new("raced"));
        let (other, _other_task) = manager.add_toast(ToastContent::new("survivor"));

        manager.handle_message(&Message::Dismiss(id));
        manager.handle_message(&Message::Expired(id));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.get(other).is_some());
    }

    #[test]
    fn expiry_removes_toast() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::success("saved"));

        manager.handle_message(&Message::Expired(id));

        assert!(manager.get(id).is_none());
        assert!(!manager.is_pending(id));
    }

    #[test]
    fn dismiss_after_expiry_is_ignored() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::new("late click"));

        manager.handle_message(&Message::Expired(id));
        manager.handle_message(&Message::Dismiss(id));

        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn visible_respects_stack_order() {
        let mut newest_last = Manager::default();
        let mut newest_first = Manager::new(Settings {
            stack_order: StackOrder::NewestFirst,
            ..Settings::default()
        });

        for title in ["a", "b", "c"] {
            let _ = newest_last.add_toast(ToastContent::new(title));
            let _ = newest_first.add_toast(ToastContent::new(title));
        }

        let last: Vec<_> = newest_last.visible().map(ToastMessage::title).collect();
        let first: Vec<_> = newest_first.visible().map(ToastMessage::title).collect();
        assert_eq!(last, vec!["a", "b", "c"]);
        assert_eq!(first, vec!["c", "b", "a"]);
    }

    #[test]
    fn handle_commands_apply_on_pump() {
        let mut manager = Manager::default();
        let handle = manager.handle();

        let id = handle
            .add_toast(ToastContent::error("Erro").with_description("detalhe"))
            .unwrap();
        assert_eq!(manager.visible_count(), 0);

        let _task = manager.pump();

        let message = manager.get(id).unwrap();
        assert_eq!(message.kind(), ToastKind::Error);
        assert!(manager.is_pending(id));
        assert_eq!(handle.active().unwrap().len(), 1);

        handle.remove_toast(id).unwrap();
        let _task = manager.pump();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.is_pending(id));
    }

    #[test]
    fn handle_fails_after_shutdown() {
        let mut manager = Manager::default();
        let handle = manager.handle();
        let _ = manager.add_toast(ToastContent::new("pending"));

        manager.shutdown();

        assert!(!handle.is_connected());
        assert!(matches!(
            handle.add_toast(ToastContent::new("too late")),
            Err(Error::ToastProviderGone)
        ));
        assert!(matches!(handle.active(), Err(Error::ToastProviderGone)));
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn handle_fails_after_drop() {
        let manager = Manager::default();
        let handle = manager.handle();

        drop(manager);

        assert!(matches!(
            handle.remove_toast(ToastId::new()),
            Err(Error::ToastProviderGone)
        ));
    }

    #[test]
    fn shutdown_aborts_all_timers() {
        let mut manager = Manager::default();
        let ids: Vec<_> = (0..3)
            .map(|i| manager.add_toast(ToastContent::new(format!("t{i}"))).0)
            .collect();

        manager.shutdown();

        assert!(ids.iter().all(|id| !manager.is_pending(*id)));
        // stale expiries after teardown are harmless
        for id in ids {
            manager.handle_message(&Message::Expired(id));
        }
        assert!(!manager.has_notifications());
    }

    #[test]
    fn subscribers_observe_lifecycle() {
        let mut manager = Manager::default();
        let mut rx = manager.subscribe();

        let (id, _task) = manager.add_toast(ToastContent::new("observed"));
        assert_eq!(rx.borrow_and_update().len(), 1);

        manager.handle_message(&Message::Expired(id));
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn handle_command_wakes_feed() {
        let mut manager = Manager::default();
        let handle = manager.handle();
        let mut feed = manager.command_feed();

        let id = tokio::spawn(async move { handle.add_toast(ToastContent::new("Welcome")) })
            .await
            .unwrap()
            .unwrap();

        let message = feed.next().await.unwrap();
        assert_eq!(message, Message::Queued);
        manager.handle_message(&message);
        let _task = manager.pump();

        assert!(manager.get(id).is_some());
        assert!(manager.is_pending(id));
        assert_eq!(manager.handle().active().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn wake_before_polling_is_not_lost() {
        let manager = Manager::default();
        let handle = manager.handle();
        handle.add_toast(ToastContent::new("early")).unwrap();

        let mut feed = manager.command_feed();
        let message = tokio::time::timeout(Duration::from_secs(1), feed.next())
            .await
            .expect("feed should wake");

        assert_eq!(message, Some(Message::Queued));
    }

    #[test]
    fn queued_message_alone_changes_nothing() {
        let mut manager = Manager::default();
        let (id, _task) = manager.add_toast(ToastContent::new("kept"));

        manager.handle_message(&Message::Queued);

        assert!(manager.get(id).is_some());
        assert!(manager.is_pending(id));
    }

    #[test]
    fn settings_duration_reaches_scheduler() {
        assert_eq!(Manager::default().duration(), Duration::from_millis(3000));

        let manager = Manager::new(Settings {
            duration: Duration::from_millis(1200),
            ..Settings::default()
        });
        assert_eq!(manager.duration(), Duration::from_millis(1200));
    }
}
