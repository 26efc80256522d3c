// SPDX-License-Identifier: MPL-2.0
//! Clock port definition.
//!
//! Countdown math uses [`Clock::now`], a monotonic [`Instant`]. Creation
//! timestamps and id suffixes use [`Clock::timestamp`].

use chrono::{DateTime, Utc};
use std::time::Instant;

/// Port for reading the current time.
///
/// Implementations: `SystemClock` for production, `ManualClock` for tests
/// that need to advance time explicitly.
pub trait Clock: Send + Sync {
    /// Monotonic "now" used for deadlines.
    fn now(&self) -> Instant;

    /// Wall-clock timestamp used for `created_at` and ids.
    fn timestamp(&self) -> DateTime<Utc>;
}
