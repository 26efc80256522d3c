// SPDX-License-Identifier: MPL-2.0
//! Authoritative ordered list of active notifications.
//!
//! The store knows nothing about timers or subscribers. It mutates the list,
//! enforces capacity and bumps a version on every change so the service can
//! broadcast snapshots in order.

use super::notification::{
    validate_title, Kind, Notification, NotificationDraft, NotificationId, NotificationPatch,
};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Why a notification left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Its countdown ran out.
    Timeout,
    /// Explicit `dismiss`, an action click, or a finished promise.
    User,
    /// Evicted to make room for a newer notification.
    Capacity,
    /// Removed by `dismiss_all` or `dismiss_by_kind`.
    Cleared,
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DismissReason::Timeout => "timeout",
            DismissReason::User => "user",
            DismissReason::Capacity => "capacity",
            DismissReason::Cleared => "cleared",
        };
        f.write_str(name)
    }
}

/// Immutable view of the list at one version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) version: u64,
    pub(crate) entries: Arc<[Notification]>,
}

impl Snapshot {
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

/// Result of a successful publish.
#[derive(Debug)]
pub struct Published {
    pub id: NotificationId,
    /// Entries removed to keep the queue within capacity, oldest first.
    pub evicted: Vec<Notification>,
}

/// Outcome of [`QueueStore::update`] for an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Updated {
    pub was_persistent: bool,
    pub is_persistent: bool,
}

#[derive(Debug)]
pub struct QueueStore {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_seq: u64,
    version: u64,
}

impl QueueStore {
    /// Creates an empty store. A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            next_seq: 0,
            version: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a notification whose duration and persistence are already resolved.
    ///
    /// When the queue overflows, the oldest non-persistent entry is evicted;
    /// only when every entry is persistent does the oldest overall go. That
    /// can be the entry being published, in which case its id is still
    /// returned and it appears in `evicted`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidInput`] when the title is blank.
    pub fn publish(
        &mut self,
        draft: NotificationDraft,
        duration_ms: Option<i64>,
        persistent: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Published> {
        validate_title(&draft.title)?;

        let id = NotificationId::generate(self.next_seq, created_at);
        self.next_seq += 1;
        self.entries.push_back(Notification::from_draft(
            id.clone(),
            draft,
            duration_ms,
            persistent,
            created_at,
        ));

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let Some(victim) = self.eviction_candidate() else {
                break;
            };
            if let Some(removed) = self.entries.remove(victim) {
                evicted.push(removed);
            }
        }

        self.version += 1;
        Ok(Published { id, evicted })
    }

    fn eviction_candidate(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .position(|n| !n.is_persistent())
            .or(Some(0))
    }

    /// Removes one entry. Unknown ids return `None` and leave the version alone.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        let pos = self.entries.iter().position(|n| n.id() == id)?;
        let removed = self.entries.remove(pos);
        self.version += 1;
        removed
    }

    /// Removes everything. Always counts as a mutation.
    pub fn clear(&mut self) -> Vec<Notification> {
        self.version += 1;
        self.entries.drain(..).collect()
    }

    /// Removes every entry of the given kind, preserving the order of the rest.
    /// Like [`QueueStore::clear`], always counts as a mutation.
    pub fn remove_kind(&mut self, kind: Kind) -> Vec<Notification> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|n| n.kind() == kind);
        self.entries = kept.into();
        self.version += 1;
        removed
    }

    /// Merges a patch into the matching entry.
    ///
    /// Returns `Ok(None)` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidInput`] when the patch carries a blank title.
    pub fn update(
        &mut self,
        id: &NotificationId,
        patch: NotificationPatch,
    ) -> Result<Option<Updated>> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        let Some(entry) = self.entries.iter_mut().find(|n| n.id() == id) else {
            return Ok(None);
        };
        let was_persistent = entry.is_persistent();
        entry.apply(patch);
        let is_persistent = entry.is_persistent();
        self.version += 1;
        Ok(Some(Updated {
            was_persistent,
            is_persistent,
        }))
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            entries: self.entries.iter().cloned().collect(),
        }
    }
}
