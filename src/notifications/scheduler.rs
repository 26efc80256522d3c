// SPDX-License-Identifier: MPL-2.0
//! Per-notification auto-dismiss countdowns.
//!
//! Timers are deadlines rather than callbacks: [`Scheduler::arm`] records a
//! countdown, [`Scheduler::due`] hands back whatever has expired by a given
//! instant. The owner decides when to poll (a tokio task in production, the
//! test itself with a manual clock).

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Countdown {
    total: Duration,
    /// Time left as of `running_since` (or as of the pause).
    remaining: Duration,
    /// `None` while paused.
    running_since: Option<Instant>,
    /// Arm order, used to break deadline ties.
    seq: u64,
}

impl Countdown {
    fn remaining_at(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(since)),
            None => self.remaining,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.running_since.map(|since| since + self.remaining)
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    countdowns: HashMap<NotificationId, Countdown>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the countdown for `id`.
    pub fn arm(&mut self, id: NotificationId, duration: Duration, now: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.countdowns.insert(
            id,
            Countdown {
                total: duration,
                remaining: duration,
                running_since: Some(now),
                seq,
            },
        );
    }

    /// Drops the countdown for `id`. Returns whether one existed.
    pub fn cancel(&mut self, id: &NotificationId) -> bool {
        self.countdowns.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.countdowns.clear();
    }

    /// Freezes the countdown, keeping the time already elapsed.
    ///
    /// Returns `false` for unknown or already paused ids.
    pub fn pause(&mut self, id: &NotificationId, now: Instant) -> bool {
        let Some(countdown) = self.countdowns.get_mut(id) else {
            return false;
        };
        if countdown.running_since.is_none() {
            return false;
        }
        countdown.remaining = countdown.remaining_at(now);
        countdown.running_since = None;
        true
    }

    /// Restarts a paused countdown for the time it had left.
    ///
    /// Returns `false` for unknown or running ids.
    pub fn resume(&mut self, id: &NotificationId, now: Instant) -> bool {
        match self.countdowns.get_mut(id) {
            Some(countdown) if countdown.running_since.is_none() => {
                countdown.running_since = Some(now);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self, id: &NotificationId) -> bool {
        self.countdowns.contains_key(id)
    }

    #[must_use]
    pub fn is_paused(&self, id: &NotificationId) -> bool {
        self.countdowns
            .get(id)
            .is_some_and(|c| c.running_since.is_none())
    }

    #[must_use]
    pub fn remaining(&self, id: &NotificationId, now: Instant) -> Option<Duration> {
        self.countdowns.get(id).map(|c| c.remaining_at(now))
    }

    /// Fraction of the countdown still left, from 1.0 (just armed) to 0.0.
    #[must_use]
    pub fn progress(&self, id: &NotificationId, now: Instant) -> Option<f32> {
        let countdown = self.countdowns.get(id)?;
        if countdown.total.is_zero() {
            return Some(0.0);
        }
        let left = countdown.remaining_at(now).as_secs_f32() / countdown.total.as_secs_f32();
        Some(left.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn deadline(&self, id: &NotificationId) -> Option<Instant> {
        self.countdowns.get(id).and_then(Countdown::deadline)
    }

    /// Earliest deadline among running countdowns.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.countdowns.values().filter_map(Countdown::deadline).min()
    }

    /// Removes and returns every countdown expired at `now`, earliest first.
    pub fn due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired: Vec<(Instant, u64, NotificationId)> = self
            .countdowns
            .iter()
            .filter_map(|(id, c)| {
                let deadline = c.deadline()?;
                (deadline <= now).then(|| (deadline, c.seq, id.clone()))
            })
            .collect();
        expired.sort();

        expired
            .into_iter()
            .map(|(_, _, id)| {
                self.countdowns.remove(&id);
                id
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countdowns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countdowns.is_empty()
    }

    #[must_use]
    pub fn paused_count(&self) -> usize {
        self.countdowns
            .values()
            .filter(|c| c.running_since.is_none())
            .count()
    }
}
