// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! `ToastService` owns the queue store, the countdown scheduler and the
//! subscriber registry. Every mutating call finishes its state change, drops
//! the lock, and then notifies subscribers before returning, so callers can
//! observe the new list immediately after any call.

use super::notification::{
    Kind, Notification, NotificationDraft, NotificationId, NotificationPatch,
};
use super::scheduler::Scheduler;
use super::stats::{StatsRecorder, ToastStats};
use super::store::{DismissReason, QueueStore, Snapshot};
use super::subscribers::{Listener, Subscribers, Subscription};
use crate::application::port::{Clock, Effects, NoEffects};
use crate::config::ToastConfig;
use crate::error::Result;
use crate::infrastructure::SystemClock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::Notify;

struct State {
    store: QueueStore,
    scheduler: Scheduler,
    stats: StatsRecorder,
}

struct Inner {
    state: Mutex<State>,
    subscribers: Subscribers,
    clock: Arc<dyn Clock>,
    effects: Arc<dyn Effects>,
    config: ToastConfig,
    /// Wakes the timer driver when deadlines change.
    wake: Notify,
    shut_down: AtomicBool,
}

/// Shared handle to a toast queue. Cloning is cheap and every clone sees
/// the same queue.
#[derive(Clone)]
pub struct ToastService {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ToastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastService")
            .field("config", &self.inner.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl ToastService {
    /// Creates a service on the system clock without side effects.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self::with_ports(config, Arc::new(SystemClock), Arc::new(NoEffects))
    }

    /// Creates a service with explicit clock and effects adapters.
    #[must_use]
    pub fn with_ports(
        config: ToastConfig,
        clock: Arc<dyn Clock>,
        effects: Arc<dyn Effects>,
    ) -> Self {
        let config = config.sanitized();
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    store: QueueStore::new(config.max_notifications),
                    scheduler: Scheduler::new(),
                    stats: StatsRecorder::default(),
                }),
                subscribers: Subscribers::new(),
                clock,
                effects,
                config,
                wake: Notify::new(),
                shut_down: AtomicBool::new(false),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.inner.config
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> Instant {
        self.inner.clock.now()
    }

    // =========================================================================
    // Queue operations
    // =========================================================================

    /// Publishes a notification and returns its id.
    ///
    /// Unset options resolve to the kind defaults: the configured duration
    /// (none for loading) and `persistent = true` for loading only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidInput`] when the title is blank.
    pub fn publish(&self, draft: NotificationDraft) -> Result<NotificationId> {
        let kind = draft.kind;
        let duration_ms = draft
            .options
            .duration_ms
            .or_else(|| self.inner.config.default_duration_for(kind));
        let persistent = draft.options.persistent.unwrap_or(kind == Kind::Loading);
        let title = draft.title.clone();

        let (published, snapshot, armed) = {
            let mut state = self.lock();
            let now = self.now();
            let published = match state.store.publish(
                draft,
                duration_ms,
                persistent,
                self.inner.clock.timestamp(),
            ) {
                Ok(published) => published,
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "rejected notification");
                    return Err(err);
                }
            };

            for evicted in &published.evicted {
                state.scheduler.cancel(evicted.id());
            }
            state
                .stats
                .record_dismissed(DismissReason::Capacity, published.evicted.len());
            state.stats.record_published();

            let countdown = state
                .store
                .get(&published.id)
                .and_then(Notification::auto_dismiss_ms)
                .filter(|_| !self.is_shut_down());
            if let Some(ms) = countdown {
                state
                    .scheduler
                    .arm(published.id.clone(), Duration::from_millis(ms), now);
            }
            (published, state.store.snapshot(), countdown.is_some())
        };

        match kind {
            Kind::Error => tracing::error!(id = %published.id, title = %title, "error notification"),
            Kind::Warning => tracing::warn!(id = %published.id, title = %title, "warning notification"),
            Kind::Success | Kind::Info | Kind::Loading => {
                tracing::debug!(id = %published.id, kind = %kind, title = %title, "published notification");
            }
        }
        for evicted in &published.evicted {
            tracing::debug!(id = %evicted.id(), "evicted notification to respect capacity");
        }

        if armed {
            self.inner.wake.notify_one();
        }
        self.inner.subscribers.broadcast(&snapshot);

        if self.inner.config.enable_sound {
            if let Err(err) = self.inner.effects.play_tone(kind) {
                tracing::debug!(error = %err, "tone playback unavailable");
            }
        }
        if self.inner.config.enable_animations {
            for evicted in &published.evicted {
                self.inner
                    .effects
                    .animate_exit(evicted.id(), DismissReason::Capacity);
            }
            if !published.evicted.iter().any(|n| n.id() == &published.id) {
                self.inner.effects.animate_enter(&published.id);
            }
        }

        Ok(published.id)
    }

    /// Dismisses a notification. Unknown or already removed ids are ignored.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&self, id: &NotificationId) -> bool {
        self.remove(id, DismissReason::User).is_some()
    }

    pub(crate) fn remove(&self, id: &NotificationId, reason: DismissReason) -> Option<Notification> {
        let (removed, snapshot) = {
            let mut state = self.lock();
            let removed = state.store.remove(id)?;
            state.scheduler.cancel(id);
            state.stats.record_dismissed(reason, 1);
            (removed, state.store.snapshot())
        };
        tracing::debug!(id = %id, reason = %reason, "dismissed notification");
        self.finish_removal(std::slice::from_ref(&removed), reason, &snapshot);
        Some(removed)
    }

    /// Clears the queue. Subscribers always receive the (empty) list.
    ///
    /// Returns how many notifications were removed.
    pub fn dismiss_all(&self) -> usize {
        let (removed, snapshot) = {
            let mut state = self.lock();
            let removed = state.store.clear();
            state.scheduler.clear();
            state
                .stats
                .record_dismissed(DismissReason::Cleared, removed.len());
            (removed, state.store.snapshot())
        };
        tracing::debug!(count = removed.len(), "dismissed all notifications");
        self.finish_removal(&removed, DismissReason::Cleared, &snapshot);
        removed.len()
    }

    /// Removes every notification of one kind. Subscribers always receive
    /// the resulting list, even when nothing matched.
    ///
    /// Returns how many notifications were removed.
    pub fn dismiss_by_kind(&self, kind: Kind) -> usize {
        let (removed, snapshot) = {
            let mut state = self.lock();
            let removed = state.store.remove_kind(kind);
            for notification in &removed {
                state.scheduler.cancel(notification.id());
            }
            state
                .stats
                .record_dismissed(DismissReason::Cleared, removed.len());
            (removed, state.store.snapshot())
        };
        tracing::debug!(kind = %kind, count = removed.len(), "dismissed notifications by kind");
        self.finish_removal(&removed, DismissReason::Cleared, &snapshot);
        removed.len()
    }

    fn finish_removal(&self, removed: &[Notification], reason: DismissReason, snapshot: &Snapshot) {
        self.inner.wake.notify_one();
        self.inner.subscribers.broadcast(snapshot);
        if self.inner.config.enable_animations {
            for notification in removed {
                self.inner.effects.animate_exit(notification.id(), reason);
            }
        }
    }

    /// Merges a patch into a notification in place.
    ///
    /// Returns `Ok(false)` for an unknown id. Flipping `persistent` starts or
    /// cancels the countdown; `duration_ms` itself never changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidInput`] when the patch carries a blank title.
    pub fn update(&self, id: &NotificationId, patch: NotificationPatch) -> Result<bool> {
        let snapshot = {
            let mut state = self.lock();
            let Some(updated) = state.store.update(id, patch)? else {
                return Ok(false);
            };
            if updated.is_persistent && !updated.was_persistent {
                state.scheduler.cancel(id);
            } else if !updated.is_persistent && updated.was_persistent && !self.is_shut_down() {
                let countdown = state.store.get(id).and_then(Notification::auto_dismiss_ms);
                if let Some(ms) = countdown {
                    let now = self.now();
                    state
                        .scheduler
                        .arm(id.clone(), Duration::from_millis(ms), now);
                }
            }
            state.store.snapshot()
        };
        tracing::debug!(id = %id, "updated notification");
        self.inner.wake.notify_one();
        self.inner.subscribers.broadcast(&snapshot);
        Ok(true)
    }

    /// Registers a callback for queue changes.
    ///
    /// The callback runs immediately with the current list, then after every
    /// mutation, in registration order. Drop or call
    /// [`Subscription::unsubscribe`] on the handle to stop it.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[Notification]) + Send + Sync + 'static,
    {
        let callback: Arc<Listener> = Arc::new(callback);
        let (subscription, snapshot) = {
            let state = self.lock();
            let subscription = self.inner.subscribers.register(Arc::clone(&callback));
            (subscription, state.store.snapshot())
        };
        subscription.deliver(callback.as_ref(), &snapshot);
        subscription
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the current notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().store.iter().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<Notification> {
        self.lock().store.get(id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> ToastStats {
        let state = self.lock();
        state.stats.collect(&state.store, &state.scheduler)
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// Freezes a notification's countdown (pointer entered the toast).
    ///
    /// Returns `false` for unknown, persistent or already paused ids.
    pub fn pause(&self, id: &NotificationId) -> bool {
        let paused = {
            let mut state = self.lock();
            let now = self.now();
            state.scheduler.pause(id, now)
        };
        if paused {
            tracing::debug!(id = %id, "paused countdown");
            self.inner.wake.notify_one();
        }
        paused
    }

    /// Restarts a paused countdown for its remaining time (pointer left).
    ///
    /// Returns `false` for unknown or running ids.
    pub fn resume(&self, id: &NotificationId) -> bool {
        let resumed = {
            let mut state = self.lock();
            let now = self.now();
            state.scheduler.resume(id, now)
        };
        if resumed {
            tracing::debug!(id = %id, "resumed countdown");
            self.inner.wake.notify_one();
        }
        resumed
    }

    #[must_use]
    pub fn is_paused(&self, id: &NotificationId) -> bool {
        self.lock().scheduler.is_paused(id)
    }

    /// Time left before auto-dismiss; `None` when no countdown runs.
    #[must_use]
    pub fn remaining(&self, id: &NotificationId) -> Option<Duration> {
        let now = self.now();
        self.lock().scheduler.remaining(id, now)
    }

    /// Fraction of the countdown left, for a progress bar.
    #[must_use]
    pub fn progress(&self, id: &NotificationId) -> Option<f32> {
        let now = self.now();
        self.lock().scheduler.progress(id, now)
    }

    /// Earliest pending auto-dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock().scheduler.next_deadline()
    }

    /// Dismisses every notification whose countdown has expired.
    ///
    /// Returns the ids removed, earliest deadline first.
    pub fn tick(&self) -> Vec<NotificationId> {
        let (removed, snapshot) = {
            let mut state = self.lock();
            let now = self.now();
            let due = state.scheduler.due(now);
            if due.is_empty() {
                return Vec::new();
            }
            let removed: Vec<Notification> =
                due.iter().filter_map(|id| state.store.remove(id)).collect();
            state
                .stats
                .record_dismissed(DismissReason::Timeout, removed.len());
            (removed, state.store.snapshot())
        };
        if removed.is_empty() {
            return Vec::new();
        }
        for notification in &removed {
            tracing::debug!(id = %notification.id(), "notification timed out");
        }
        self.finish_removal(&removed, DismissReason::Timeout, &snapshot);
        removed.iter().map(|n| n.id().clone()).collect()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Stops all countdowns and the timer driver. Queue contents are kept.
    ///
    /// Notifications published or made non-persistent afterwards get no
    /// countdown, so nothing auto-dismisses once this returns.
    pub fn shutdown(&self) {
        self.inner.shut_down.store(true, Ordering::Release);
        self.lock().scheduler.clear();
        self.inner.wake.notify_one();
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.inner.shut_down.load(Ordering::Acquire)
    }

    pub(crate) fn wake(&self) -> &Notify {
        &self.inner.wake
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ManualClock;
    use crate::notifications::ToastOptions;
    use std::sync::atomic::AtomicUsize;

    fn service_with_clock(config: ToastConfig) -> (ToastService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let service = ToastService::with_ports(config, clock.clone(), Arc::new(NoEffects));
        (service, clock)
    }

    #[derive(Default)]
    struct RecordingEffects {
        tones: AtomicUsize,
        enters: AtomicUsize,
        exits: Mutex<Vec<DismissReason>>,
    }

    impl Effects for RecordingEffects {
        fn play_tone(&self, _kind: Kind) -> Result<()> {
            self.tones.fetch_add(1, Ordering::SeqCst);
            Err(crate::error::Error::Audio("no device".into()))
        }

        fn animate_enter(&self, _id: &NotificationId) {
            self.enters.fetch_add(1, Ordering::SeqCst);
        }

        fn animate_exit(&self, _id: &NotificationId, reason: DismissReason) {
            self.exits.lock().unwrap().push(reason);
        }
    }

    #[test]
    fn new_service_is_empty() {
        let service = ToastService::default();
        assert!(service.is_empty());
        assert_eq!(service.stats(), ToastStats::default());
    }

    #[test]
    fn publish_resolves_kind_defaults() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let id = service
            .publish(NotificationDraft::new(Kind::Error, "Failed"))
            .unwrap();
        let n = service.get(&id).unwrap();
        assert_eq!(n.duration_ms(), Some(6000));
        assert!(!n.is_persistent());
        assert_eq!(service.remaining(&id), Some(Duration::from_millis(6000)));
    }

    #[test]
    fn loading_is_persistent_unless_overridden() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let sticky = service
            .publish(NotificationDraft::new(Kind::Loading, "Working"))
            .unwrap();
        let timed = service
            .publish(
                NotificationDraft::new(Kind::Loading, "Working")
                    .with_options(ToastOptions::new().persistent(false).duration_ms(500)),
            )
            .unwrap();

        assert!(service.get(&sticky).unwrap().is_persistent());
        assert_eq!(service.remaining(&sticky), None);
        assert_eq!(service.remaining(&timed), Some(Duration::from_millis(500)));
    }

    #[test]
    fn pause_of_persistent_is_noop() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let id = service
            .publish(NotificationDraft::new(Kind::Loading, "Working"))
            .unwrap();
        assert!(!service.pause(&id));
    }

    #[test]
    fn tick_without_expiry_does_not_broadcast() {
        let (service, clock) = service_with_clock(ToastConfig::default());
        service
            .publish(NotificationDraft::new(Kind::Info, "Hello"))
            .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _sub = service.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        clock.advance_ms(100);
        assert!(service.tick().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_to_non_persistent_arms_countdown() {
        let (service, clock) = service_with_clock(ToastConfig::default());
        let id = service
            .publish(
                NotificationDraft::new(Kind::Info, "Sync")
                    .with_options(ToastOptions::new().persistent(true)),
            )
            .unwrap();
        assert_eq!(service.remaining(&id), None);

        clock.advance_ms(10_000);
        assert!(service.update(&id, NotificationPatch::new().persistent(false)).unwrap());
        assert_eq!(service.remaining(&id), Some(Duration::from_millis(4000)));

        assert!(service.update(&id, NotificationPatch::new().persistent(true)).unwrap());
        assert_eq!(service.remaining(&id), None);
    }

    #[test]
    fn update_rejects_blank_title() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let id = service
            .publish(NotificationDraft::new(Kind::Info, "Sync"))
            .unwrap();
        let err = service
            .update(&id, NotificationPatch::new().title(""))
            .unwrap_err();
        assert_eq!(err.field(), Some("title"));
        assert_eq!(service.get(&id).unwrap().title(), "Sync");
    }

    #[test]
    fn effects_follow_config_and_tone_errors_are_swallowed() {
        let clock = Arc::new(ManualClock::new());
        let effects = Arc::new(RecordingEffects::default());
        let config = ToastConfig {
            enable_sound: true,
            max_notifications: 1,
            ..ToastConfig::default()
        };
        let service = ToastService::with_ports(config, clock, effects.clone());

        let first = service.publish(NotificationDraft::new(Kind::Info, "one"));
        let second = service.publish(NotificationDraft::new(Kind::Info, "two"));
        assert!(first.is_ok());
        assert!(second.is_ok());

        assert_eq!(effects.tones.load(Ordering::SeqCst), 2);
        assert_eq!(effects.enters.load(Ordering::SeqCst), 2);
        assert_eq!(*effects.exits.lock().unwrap(), vec![DismissReason::Capacity]);
    }

    #[test]
    fn sound_disabled_plays_nothing() {
        let clock = Arc::new(ManualClock::new());
        let effects = Arc::new(RecordingEffects::default());
        let config = ToastConfig {
            enable_animations: false,
            ..ToastConfig::default()
        };
        let service = ToastService::with_ports(config, clock, effects.clone());
        let id = service
            .publish(NotificationDraft::new(Kind::Info, "quiet"))
            .unwrap();
        service.dismiss(&id);

        assert_eq!(effects.tones.load(Ordering::SeqCst), 0);
        assert_eq!(effects.enters.load(Ordering::SeqCst), 0);
        assert!(effects.exits.lock().unwrap().is_empty());
    }

    #[test]
    fn stats_track_reasons() {
        let (service, clock) = service_with_clock(ToastConfig {
            max_notifications: 2,
            ..ToastConfig::default()
        });
        let a = service.publish(NotificationDraft::new(Kind::Info, "a")).unwrap();
        service.publish(NotificationDraft::new(Kind::Info, "b")).unwrap();
        service.publish(NotificationDraft::new(Kind::Warning, "c")).unwrap();
        assert!(!service.dismiss(&a));

        service.pause(&service.notifications()[0].id().clone());
        clock.advance_ms(4000);
        service.tick();

        let stats = service.stats();
        assert_eq!(stats.published, 3);
        assert_eq!(stats.dismissed.capacity, 1);
        assert_eq!(stats.dismissed.timeout, 1);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.paused, 1);
        assert_eq!(stats.by_kind.info, 1);
    }

    #[test]
    fn subscriber_may_call_back_into_the_service() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let observed = Arc::new(AtomicUsize::new(0));
        let inner = service.clone();
        let seen = Arc::clone(&observed);
        let _sub = service.subscribe(move |list| {
            seen.store(inner.len().max(list.len()), Ordering::SeqCst);
        });

        service
            .publish(NotificationDraft::new(Kind::Info, "re-entrant"))
            .unwrap();
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn shutdown_clears_countdowns_but_keeps_entries() {
        let (service, clock) = service_with_clock(ToastConfig::default());
        service
            .publish(NotificationDraft::new(Kind::Info, "bye"))
            .unwrap();
        service.shutdown();

        clock.advance_ms(10_000);
        assert!(service.tick().is_empty());
        assert_eq!(service.len(), 1);
        assert!(service.is_shut_down());
    }

    #[test]
    fn subscriber_publishing_from_callback_leaves_others_current() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        let producer = service.clone();
        let _first = service.subscribe(move |list| {
            if list.len() == 1 {
                producer
                    .publish(NotificationDraft::new(Kind::Info, "Follow-up"))
                    .unwrap();
            }
        });
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lengths);
        let _second = service.subscribe(move |list| {
            sink.lock().unwrap().push(list.len());
        });

        service
            .publish(NotificationDraft::new(Kind::Info, "First"))
            .unwrap();

        assert_eq!(service.len(), 2);
        assert_eq!(*lengths.lock().unwrap(), vec![0, 2]);
    }

    #[test]
    fn initial_delivery_reflects_current_queue() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        service
            .publish(NotificationDraft::new(Kind::Info, "Existing"))
            .unwrap();
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lengths);
        let _sub = service.subscribe(move |list| {
            sink.lock().unwrap().push(list.len());
        });
        service.dismiss_all();

        assert_eq!(*lengths.lock().unwrap(), vec![1, 0]);
    }

    #[test]
    fn dismiss_by_kind_without_match_still_notifies() {
        let (service, _clock) = service_with_clock(ToastConfig::default());
        service
            .publish(NotificationDraft::new(Kind::Info, "kept"))
            .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _sub = service.subscribe(move |list| {
            assert_eq!(list.len(), 1);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(service.dismiss_by_kind(Kind::Error), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(service.stats().dismissed.cleared, 0);
    }

    #[test]
    fn newcomer_is_evicted_when_all_others_are_persistent() {
        let clock = Arc::new(ManualClock::new());
        let effects = Arc::new(RecordingEffects::default());
        let config = ToastConfig {
            max_notifications: 2,
            ..ToastConfig::default()
        };
        let service = ToastService::with_ports(config, clock, effects.clone());
        for title in ["Upload 1", "Upload 2"] {
            service
                .publish(NotificationDraft::new(Kind::Loading, title))
                .unwrap();
        }

        let id = service
            .publish(NotificationDraft::new(Kind::Info, "Saved"))
            .unwrap();

        assert!(service.get(&id).is_none());
        assert_eq!(service.remaining(&id), None);
        assert_eq!(service.next_deadline(), None);
        assert!(service.notifications().iter().all(Notification::is_persistent));
        assert_eq!(effects.enters.load(Ordering::SeqCst), 2);
        assert_eq!(*effects.exits.lock().unwrap(), vec![DismissReason::Capacity]);
    }

    #[test]
    fn nothing_times_out_after_shutdown() {
        let (service, clock) = service_with_clock(ToastConfig::default());
        let sticky = service
            .publish(
                NotificationDraft::new(Kind::Info, "sticky")
                    .with_options(ToastOptions::new().persistent(true)),
            )
            .unwrap();
        service.shutdown();

        let late = service
            .publish(NotificationDraft::new(Kind::Info, "late"))
            .unwrap();
        assert!(service
            .update(&sticky, NotificationPatch::new().persistent(false))
            .unwrap());
        assert_eq!(service.remaining(&late), None);
        assert_eq!(service.remaining(&sticky), None);

        clock.advance_ms(60_000);
        assert!(service.tick().is_empty());
        assert_eq!(service.len(), 2);
    }
}
