// SPDX-License-Identifier: MPL-2.0
//! Queue statistics: what is on screen now, and lifetime counters.

use super::notification::Kind;
use super::scheduler::Scheduler;
use super::store::{DismissReason, QueueStore};

/// Active notifications per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub success: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub loading: usize,
}

impl KindCounts {
    #[must_use]
    pub fn get(&self, kind: Kind) -> usize {
        match kind {
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Warning => self.warning,
            Kind::Info => self.info,
            Kind::Loading => self.loading,
        }
    }

    fn bump(&mut self, kind: Kind) {
        let slot = match kind {
            Kind::Success => &mut self.success,
            Kind::Error => &mut self.error,
            Kind::Warning => &mut self.warning,
            Kind::Info => &mut self.info,
            Kind::Loading => &mut self.loading,
        };
        *slot += 1;
    }
}

/// Lifetime dismissals per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissCounts {
    pub timeout: u64,
    pub user: u64,
    pub capacity: u64,
    pub cleared: u64,
}

impl DismissCounts {
    #[must_use]
    pub fn get(&self, reason: DismissReason) -> u64 {
        match reason {
            DismissReason::Timeout => self.timeout,
            DismissReason::User => self.user,
            DismissReason::Capacity => self.capacity,
            DismissReason::Cleared => self.cleared,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.timeout + self.user + self.capacity + self.cleared
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastStats {
    pub active: usize,
    pub by_kind: KindCounts,
    pub persistent: usize,
    pub paused: usize,
    pub published: u64,
    pub dismissed: DismissCounts,
}

/// Lifetime counters kept alongside the store.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    published: u64,
    dismissed: DismissCounts,
}

impl StatsRecorder {
    pub(crate) fn record_published(&mut self) {
        self.published += 1;
    }

    pub(crate) fn record_dismissed(&mut self, reason: DismissReason, count: usize) {
        let count = count as u64;
        match reason {
            DismissReason::Timeout => self.dismissed.timeout += count,
            DismissReason::User => self.dismissed.user += count,
            DismissReason::Capacity => self.dismissed.capacity += count,
            DismissReason::Cleared => self.dismissed.cleared += count,
        }
    }

    pub(crate) fn collect(&self, store: &QueueStore, scheduler: &Scheduler) -> ToastStats {
        let mut by_kind = KindCounts::default();
        let mut persistent = 0;
        for notification in store.iter() {
            by_kind.bump(notification.kind());
            if notification.is_persistent() {
                persistent += 1;
            }
        }
        ToastStats {
            active: store.len(),
            by_kind,
            persistent,
            paused: scheduler.paused_count(),
            published: self.published,
            dismissed: self.dismissed,
        }
    }
}
