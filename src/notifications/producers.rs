// SPDX-License-Identifier: MPL-2.0
//! Convenience producers.
//!
//! Typed entry points so callers rarely build a [`NotificationDraft`] by hand.
//! Each one only picks the kind; defaults are resolved by
//! [`ToastService::publish`].

use super::notification::{
    Kind, NotificationAction, NotificationDraft, NotificationId, ToastOptions,
};
use super::service::ToastService;
use super::store::DismissReason;
use crate::error::{Error, Result};
use std::fmt::Display;
use std::future::Future;

/// Titles shown by [`ToastService::promise`] for each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseMessages {
    loading: String,
    success: String,
    error: String,
}

impl PromiseMessages {
    /// Validates the three titles up front so the wrapper itself cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first blank title.
    pub fn new(
        loading: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Result<Self> {
        let messages = Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
        };
        for (field, title) in [
            ("loading", &messages.loading),
            ("success", &messages.success),
            ("error", &messages.error),
        ] {
            if title.trim().is_empty() {
                return Err(Error::invalid(field, "promise title must not be empty"));
            }
        }
        Ok(messages)
    }

    #[must_use]
    pub fn loading(&self) -> &str {
        &self.loading
    }

    #[must_use]
    pub fn success(&self) -> &str {
        &self.success
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }
}

impl ToastService {
    fn produce(
        &self,
        kind: Kind,
        title: impl Into<String>,
        options: ToastOptions,
    ) -> Result<NotificationId> {
        self.publish(NotificationDraft::new(kind, title).with_options(options))
    }

    /// Publishes a success toast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title is blank.
    pub fn success(&self, title: impl Into<String>, options: ToastOptions) -> Result<NotificationId> {
        self.produce(Kind::Success, title, options)
    }

    /// Publishes an error toast. Errors stay longer by default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title is blank.
    pub fn error(&self, title: impl Into<String>, options: ToastOptions) -> Result<NotificationId> {
        self.produce(Kind::Error, title, options)
    }

    /// Publishes a warning toast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title is blank.
    pub fn warning(&self, title: impl Into<String>, options: ToastOptions) -> Result<NotificationId> {
        self.produce(Kind::Warning, title, options)
    }

    /// Publishes an info toast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title is blank.
    pub fn info(&self, title: impl Into<String>, options: ToastOptions) -> Result<NotificationId> {
        self.produce(Kind::Info, title, options)
    }

    /// Publishes a loading toast, persistent unless the options say otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title is blank.
    pub fn loading(&self, title: impl Into<String>, options: ToastOptions) -> Result<NotificationId> {
        self.produce(Kind::Loading, title, options)
    }

    /// Publishes a toast carrying an action button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the title or label is blank.
    pub fn with_action<F>(
        &self,
        kind: Kind,
        title: impl Into<String>,
        label: impl Into<String>,
        handler: F,
        options: ToastOptions,
    ) -> Result<NotificationId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::invalid("action", "label must not be empty"));
        }
        self.produce(
            kind,
            title,
            options.action(NotificationAction::new(label, handler)),
        )
    }

    /// Runs a notification's action: dismisses it, then calls the handler.
    ///
    /// Returns `false` for unknown ids and for notifications without an action.
    pub fn trigger_action(&self, id: &NotificationId) -> bool {
        let Some(handler) = self
            .get(id)
            .and_then(|n| n.action().map(NotificationAction::handler))
        else {
            return false;
        };
        // Lost a race with another dismissal path: the action no longer exists.
        if self.remove(id, DismissReason::User).is_none() {
            return false;
        }
        tracing::debug!(id = %id, "triggered notification action");
        handler();
        true
    }

    /// Wraps an async operation with loading / success / error toasts.
    ///
    /// A persistent loading toast is shown while `operation` runs; the queue
    /// stays fully usable meanwhile. On completion the loading toast is
    /// dismissed and a success toast, or an error toast whose message is the
    /// error's `Display`, takes its place. The operation's own result is
    /// returned untouched.
    pub async fn promise<T, E, F>(
        &self,
        operation: F,
        messages: PromiseMessages,
    ) -> std::result::Result<T, E>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: Display,
    {
        let loading_id = self
            .loading(messages.loading.clone(), ToastOptions::new().persistent(true))
            .inspect_err(|err| tracing::warn!(error = %err, "could not show loading toast"))
            .ok();

        let outcome = operation.await;

        if let Some(id) = &loading_id {
            self.dismiss(id);
        }
        let shown = match &outcome {
            Ok(_) => self.success(messages.success, ToastOptions::new()),
            Err(err) => self.error(messages.error, ToastOptions::new().message(err.to_string())),
        };
        if let Err(err) = shown {
            tracing::warn!(error = %err, "could not show promise outcome toast");
        }
        outcome
    }
}
