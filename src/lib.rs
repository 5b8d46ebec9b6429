// SPDX-License-Identifier: MPL-2.0
//! `gobarber` is the desktop client of the GoBarber scheduling service,
//! built with the Iced GUI framework.
//!
//! Besides the sign-in and dashboard screens it provides the toast
//! notification subsystem every screen reports outcomes through: an ordered
//! store of active toasts, one cancellable auto-dismiss timer per toast, a
//! top-right presenter and a [`ToastHandle`](ui::notifications::ToastHandle)
//! access point that fails once the manager has shut down.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
