// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`auth`]: Session creation against the GoBarber backend
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so an `Arc<dyn Trait>` can move into tasks
//! - No `async fn` in traits - methods return a boxed future that callers
//!   wrap in an Iced `Task`

pub mod auth;

pub use auth::{AuthError, SessionApi};
