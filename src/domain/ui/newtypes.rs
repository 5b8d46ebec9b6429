// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Toast Duration Bounds
// =============================================================================

/// Toast auto-dismiss bounds in milliseconds (0.5s to 30s).
pub mod toast_duration_bounds {
    /// Minimum display time.
    pub const MIN_MS: u64 = 500;
    /// Maximum display time.
    pub const MAX_MS: u64 = 30_000;
    /// Default display time.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Time a toast stays on screen before it dismisses itself.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500–30000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new toast duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(toast_duration_bounds::MIN_MS, toast_duration_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(toast_duration_bounds::DEFAULT_MS)
    }
}
