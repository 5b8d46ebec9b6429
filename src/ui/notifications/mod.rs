// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear in the top-right corner to report the outcome of an
//! action (a failed sign-in, a saved profile) without blocking interaction.
//! Each toast dismisses itself after a fixed duration or when the user
//! clicks its close button.
//!
//! # Components
//!
//! - [`notification`] - `ToastMessage`, `ToastKind` and the `ToastContent` payload
//! - [`store`] - ordered collection of active toasts with snapshot subscribers
//! - [`scheduler`] - one abortable countdown per toast
//! - [`manager`] - `Manager`, the single writer that ties store and timers together
//! - [`handle`] - `ToastHandle`, the capability handed to the rest of the app
//! - [`toast`] - widgets rendering toasts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Toast, ToastContent};
//!
//! let mut manager = Manager::default();
//!
//! // The task reports expiry back to the update loop.
//! let (_id, task) = manager.add_toast(ToastContent::error("Login failed"));
//! let task = task.map(Message::Toast);
//!
//! // In your view function
//! let overlay = Toast::view_overlay(&manager).map(Message::Toast);
//! ```

mod handle;
mod manager;
mod notification;
mod scheduler;
mod store;
mod toast;

pub use handle::ToastHandle;
pub use manager::{Manager, Message as NotificationMessage, Settings};
pub use notification::{ToastContent, ToastId, ToastKind, ToastMessage};
pub use scheduler::expiry;
pub use toast::{IconKind, Layout, Toast};
