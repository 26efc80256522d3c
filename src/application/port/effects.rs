// SPDX-License-Identifier: MPL-2.0
//! Effects port definition.
//!
//! Cosmetic side effects the host may attach to the queue. None of them can
//! affect queue state: a failing tone is logged and ignored.

use crate::error::Result;
use crate::notifications::{DismissReason, Kind, NotificationId};

/// Port for optional sound and animation hooks.
///
/// All methods have no-op defaults so adapters only implement what they
/// support.
pub trait Effects: Send + Sync {
    /// Plays a short cue for a freshly published notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio backend is unavailable. Callers ignore it.
    fn play_tone(&self, _kind: Kind) -> Result<()> {
        Ok(())
    }

    /// Starts the enter animation of a notification.
    fn animate_enter(&self, _id: &NotificationId) {}

    /// Starts the exit animation of a notification that was just removed.
    fn animate_exit(&self, _id: &NotificationId, _reason: DismissReason) {}
}

/// Effects adapter that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl Effects for NoEffects {}
