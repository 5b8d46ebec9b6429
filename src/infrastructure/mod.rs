// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: GoBarber backend over HTTP (implements [`SessionApi`])
//!
//! [`SessionApi`]: crate::application::port::SessionApi

pub mod http;

pub use http::HttpSessionApi;
