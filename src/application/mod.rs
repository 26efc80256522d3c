// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the notification core is written against.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The notification core depends only on these traits
//! - Infrastructure layer implements application layer ports
//! - Host applications pick the adapters (real clock, audio, test doubles)

pub mod port;
