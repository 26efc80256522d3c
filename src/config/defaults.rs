// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Durations**: Auto-dismiss timing per notification kind
//! - **Capacity**: Queue size bounds
//! - **Sound**: Tone length and volume for the optional audio cue

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default auto-dismiss duration for success, info and warning toasts (ms).
pub const DEFAULT_DURATION_MS: i64 = 4000;

/// Default auto-dismiss duration for error toasts (ms).
/// Failures get more reading time.
pub const DEFAULT_ERROR_DURATION_MS: i64 = 6000;

/// Upper bound accepted from configuration files (ms).
pub const MAX_DURATION_MS: i64 = 120_000;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of notifications held at once.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 5;

/// Smallest queue capacity a configuration may request.
pub const MIN_NOTIFICATIONS_LIMIT: usize = 1;

/// Largest queue capacity a configuration may request.
pub const MAX_NOTIFICATIONS_LIMIT: usize = 50;

// ==========================================================================
// Sound Defaults
// ==========================================================================

/// Length of the per-kind tone (ms).
pub const TONE_DURATION_MS: u64 = 120;

/// Output amplitude of the tone (0.0 to 1.0).
pub const TONE_VOLUME: f32 = 0.15;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(DEFAULT_ERROR_DURATION_MS > DEFAULT_DURATION_MS);
    assert!(MAX_DURATION_MS >= DEFAULT_ERROR_DURATION_MS);

    assert!(MIN_NOTIFICATIONS_LIMIT > 0);
    assert!(MAX_NOTIFICATIONS_LIMIT >= MIN_NOTIFICATIONS_LIMIT);
    assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_NOTIFICATIONS_LIMIT);
    assert!(DEFAULT_MAX_NOTIFICATIONS <= MAX_NOTIFICATIONS_LIMIT);

    assert!(TONE_DURATION_MS > 0);
    assert!(TONE_VOLUME > 0.0);
    assert!(TONE_VOLUME <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_defaults_are_valid() {
        assert_eq!(DEFAULT_DURATION_MS, 4000);
        assert_eq!(DEFAULT_ERROR_DURATION_MS, 6000);
        assert!(DEFAULT_ERROR_DURATION_MS <= MAX_DURATION_MS);
    }

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_NOTIFICATIONS, 5);
        assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_NOTIFICATIONS_LIMIT);
        assert!(DEFAULT_MAX_NOTIFICATIONS <= MAX_NOTIFICATIONS_LIMIT);
    }
}
