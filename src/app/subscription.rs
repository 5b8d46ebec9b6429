// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::Manager;
use iced::{event, window, Subscription};

/// Routes window close requests to the app so it can tear down cleanly.
///
/// Every other native event is left to the widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Wakes the update loop when a toast handle queues a command.
pub fn create_toast_subscription(notifications: &Manager) -> Subscription<Message> {
    notifications.subscription().map(Message::Toast)
}
