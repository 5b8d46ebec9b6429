// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the UI drives and infrastructure implements.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer only sees the traits

pub mod port;
