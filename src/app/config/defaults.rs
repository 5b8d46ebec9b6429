// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss delay and its bounds
//! - **API**: Backend location and request timeout

use crate::domain::ui::newtypes::toast_duration_bounds;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before it dismisses itself (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = toast_duration_bounds::DEFAULT_MS;

/// Shortest accepted toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = toast_duration_bounds::MIN_MS;

/// Longest accepted toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = toast_duration_bounds::MAX_MS;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend the client talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Request timeout for backend calls (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Shortest accepted request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Longest accepted request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;
