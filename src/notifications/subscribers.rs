// SPDX-License-Identifier: MPL-2.0
//! Subscriber registry for queue snapshots.
//!
//! Callbacks run outside the queue's state lock, so a subscriber may call
//! back into the service. Versions are tracked so a late, older snapshot is
//! never delivered after a newer one.

use super::notification::Notification;
use super::store::Snapshot;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback receiving the full list after every mutation.
pub type Listener = dyn Fn(&[Notification]) + Send + Sync;

struct Entry {
    key: u64,
    active: Arc<AtomicBool>,
    seen: Arc<AtomicU64>,
    callback: Arc<Listener>,
}

#[derive(Default)]
struct Registry {
    next_key: u64,
    entries: Vec<Entry>,
}

#[derive(Default, Clone)]
pub(crate) struct Subscribers {
    registry: Arc<Mutex<Registry>>,
}

/// Records `version` as delivered to one subscriber.
///
/// `seen` holds the last delivered version plus one, zero meaning nothing yet.
/// Returns `false` when an equal or newer snapshot already got there first.
fn claim(seen: &AtomicU64, version: u64) -> bool {
    let next = version.saturating_add(1);
    seen.fetch_max(next, Ordering::AcqRel) < next
}

impl Subscribers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a callback. The caller delivers the initial snapshot through
    /// [`Subscription::deliver`].
    pub(crate) fn register(&self, callback: Arc<Listener>) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let key = registry.next_key;
        registry.next_key += 1;
        let active = Arc::new(AtomicBool::new(true));
        let seen = Arc::new(AtomicU64::new(0));
        registry.entries.push(Entry {
            key,
            active: Arc::clone(&active),
            seen: Arc::clone(&seen),
            callback,
        });
        Subscription {
            key,
            active,
            seen,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Invokes every active callback, in registration order, with the snapshot.
    ///
    /// The version check is made per subscriber right before its call, so a
    /// callback that mutates the queue does not leave later subscribers with
    /// the older list once the nested broadcast has reached them.
    pub(crate) fn broadcast(&self, snapshot: &Snapshot) {
        let targets: Vec<(Arc<AtomicBool>, Arc<AtomicU64>, Arc<Listener>)> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .entries
                .iter()
                .map(|e| {
                    (
                        Arc::clone(&e.active),
                        Arc::clone(&e.seen),
                        Arc::clone(&e.callback),
                    )
                })
                .collect()
        };

        for (active, seen, callback) in targets {
            // An earlier callback in this round may have unsubscribed this one.
            if active.load(Ordering::Acquire) && claim(&seen, snapshot.version) {
                callback(snapshot.entries());
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle unsubscribes, as does [`Subscription::unsubscribe`].
/// Either way the callback is never invoked again once the call returns.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    key: u64,
    active: Arc<AtomicBool>,
    seen: Arc<AtomicU64>,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Delivers a snapshot to this subscriber alone, unless a newer one
    /// already reached it.
    pub(crate) fn deliver(&self, callback: &Listener, snapshot: &Snapshot) {
        if self.is_active() && claim(&self.seen, snapshot.version) {
            callback(snapshot.entries());
        }
    }

    fn detach(&self) {
        self.active.store(false, Ordering::Release);
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.entries.retain(|e| e.key != self.key);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("active", &self.is_active())
            .finish()
    }
}
