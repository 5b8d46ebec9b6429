// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business rules with ZERO external dependencies.
//!
//! This module contains pure value objects and validation rules. It depends
//! only on `std`, so every rule can be tested without a GUI or a network.
//!
//! # Modules
//!
//! - [`auth`]: Sign-in value objects ([`Email`](auth::Email),
//!   [`Credentials`](auth::Credentials)) and form validation
//! - [`ui`]: UI value objects ([`ToastDuration`](ui::newtypes::ToastDuration))

pub mod auth;
pub mod ui;
