// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sign_in`] - E-mail and password form
//! - [`dashboard`] - Greeting header and the selected schedule date
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`input`] - Form input with focus and validation highlight
//! - [`notifications`] - Toast notification system for user feedback

pub mod dashboard;
pub mod design_tokens;
pub mod icons;
pub mod input;
pub mod notifications;
pub mod sign_in;
pub mod theming;
