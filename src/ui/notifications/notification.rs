// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastMessage` struct, its `ToastKind`, and the
//! `ToastContent` payload collaborators hand to the manager.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide counter and are never reused, so a
/// stale id can only ever miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of toast, which determines its icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_500,
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
        }
    }

    /// Returns the background tint used behind the toast body.
    #[must_use]
    pub fn background_color(self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_100,
            ToastKind::Success => palette::SUCCESS_100,
            ToastKind::Error => palette::ERROR_100,
        }
    }
}

/// What a collaborator asks to show.
///
/// `kind` is optional; a missing kind becomes [`ToastKind::Info`] when the
/// message is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastContent {
    pub kind: Option<ToastKind>,
    pub title: String,
    pub description: Option<String>,
}

impl ToastContent {
    /// Creates content with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            description: None,
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Info)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Success)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(ToastKind::Error)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Adds the longer explanatory text shown under the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A toast currently owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    id: ToastId,
    kind: ToastKind,
    title: String,
    description: Option<String>,
}

impl ToastMessage {
    /// Builds a message from content, assigning a fresh id.
    pub fn new(content: ToastContent) -> Self {
        Self {
            id: ToastId::new(),
            kind: content.kind.unwrap_or_default(),
            title: content.title,
            description: content.description,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the message carries a description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }
}
