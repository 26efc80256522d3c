// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clock`]: System, tokio and manually advanced clocks (implement [`Clock`])
//! - [`audio`]: Tone cues via cpal (implements [`Effects`])
//!
//! [`Clock`]: crate::application::port::Clock
//! [`Effects`]: crate::application::port::Effects

pub mod audio;
pub mod clock;

// Re-export main types for convenience
pub use audio::ToneEffects;
pub use clock::{ManualClock, SystemClock, TokioClock};
