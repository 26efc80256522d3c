// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is an in-memory toast notification queue.
//!
//! It keeps an ordered, capacity-bounded list of transient notifications,
//! runs a pausable auto-dismiss countdown for each one, and broadcasts every
//! change to subscribers. Rendering is left to the host application.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod notifications;
