// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The queue and scheduler never read the wall clock or touch an audio device
//! directly; they go through these traits so tests can substitute virtual time
//! and silent effects.
//!
//! # Available Ports
//!
//! - [`clock`]: Monotonic time and timestamps
//! - [`effects`]: Optional cosmetic side effects (tones, enter/exit animations)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so a service can be shared with async tasks
//! - No `async fn`: timers are deadlines, polled by the service

pub mod clock;
pub mod effects;

pub use clock::Clock;
pub use effects::{Effects, NoEffects};
