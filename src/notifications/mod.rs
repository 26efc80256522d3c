// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns: an ordered, capacity-bounded queue of transient
//! messages, each with its own auto-dismiss countdown that pauses while hovered.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Kind` and the draft/patch types
//! - [`store`] - `QueueStore`, the ordered list with capacity eviction
//! - [`scheduler`] - `Scheduler`, per-notification countdowns with pause/resume
//! - [`service`] - `ToastService`, the shared handle tying store, scheduler and subscribers
//! - [`producers`] - `success`/`error`/.../`promise` convenience entry points
//! - [`stats`] - queue statistics
//!
//! # Usage
//!
//! ```
//! use toast_queue::config::ToastConfig;
//! use toast_queue::notifications::{ToastOptions, ToastService};
//!
//! let service = ToastService::new(ToastConfig::default());
//! let _subscription = service.subscribe(|toasts| {
//!     println!("{} toast(s) on screen", toasts.len());
//! });
//!
//! let id = service.success("Image saved", ToastOptions::new()).unwrap();
//! service.pause(&id); // pointer entered the toast
//! service.resume(&id); // pointer left
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 4s for success/info/warning, 6s for errors, loading stays until dismissed
//! - Max toasts: 5; the oldest non-persistent one makes room for a new one
//! - Subscribers are called synchronously, outside the state lock

mod driver;
pub mod notification;
pub mod producers;
pub mod scheduler;
pub mod service;
pub mod stats;
pub mod store;
mod subscribers;

pub use notification::{
    ActionHandler, Kind, Notification, NotificationAction, NotificationDraft, NotificationId,
    NotificationPatch, ToastOptions,
};
pub use producers::PromiseMessages;
pub use scheduler::Scheduler;
pub use service::ToastService;
pub use stats::{DismissCounts, KindCounts, ToastStats};
pub use store::{DismissReason, QueueStore, Snapshot};
pub use subscribers::{Listener, Subscription};
