// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Kind` enum and the
//! draft/patch types used to create and edit notifications.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Unique identifier for a notification.
///
/// Formatted as `toast-{seq}-{unix_millis}`; `seq` comes from the owning
/// store's counter, so two ids minted in the same millisecond still differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    pub(crate) fn generate(seq: u64, created_at: DateTime<Utc>) -> Self {
        Self(format!("toast-{seq}-{}", created_at.timestamp_millis()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Kind determines default icon, default duration and tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Failure; stays visible longer.
    Error,
    /// Something worth a look that didn't block the operation.
    Warning,
    #[default]
    Info,
    /// Work in progress; persistent by default.
    Loading,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Loading,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Loading => "loading",
        }
    }

    /// Icon shown when the notification has no override.
    #[must_use]
    pub fn default_icon(&self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
            Kind::Loading => "⟳",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::invalid("kind", format!("unknown kind '{s}'")))
    }
}

/// Callback run when the user triggers a notification's action.
pub type ActionHandler = Arc<dyn Fn() + Send + Sync>;

/// A labelled button attached to a notification.
#[derive(Clone)]
pub struct NotificationAction {
    label: String,
    handler: ActionHandler,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn handler(&self) -> ActionHandler {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Overrides accepted by every producer.
///
/// Unset fields fall back to the kind defaults at publish time.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub message: Option<String>,
    /// Explicit auto-dismiss duration. Zero or negative dismisses on the next tick.
    pub duration_ms: Option<i64>,
    pub persistent: Option<bool>,
    pub icon: Option<String>,
    pub action: Option<NotificationAction>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Everything needed to publish a notification.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub kind: Kind,
    pub title: String,
    pub options: ToastOptions,
}

impl NotificationDraft {
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            options: ToastOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ToastOptions) -> Self {
        self.options = options;
        self
    }
}

/// Partial update merged into an existing notification.
///
/// `duration_ms` and `created_at` are deliberately absent: they never change.
#[derive(Debug, Clone, Default)]
pub struct NotificationPatch {
    pub kind: Option<Kind>,
    pub title: Option<String>,
    /// `Some(None)` clears the message.
    pub message: Option<Option<String>>,
    /// `Some(None)` restores the kind's default icon.
    pub icon: Option<Option<String>>,
    pub persistent: Option<bool>,
    /// `Some(None)` removes the action.
    pub action: Option<Option<NotificationAction>>,
}

impl NotificationPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Option<NotificationAction>) -> Self {
        self.action = Some(action);
        self
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::invalid("title", "must not be empty"));
    }
    Ok(())
}

/// A notification held by the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: Option<String>,
    /// Resolved at publish time; never mutated afterwards.
    duration_ms: Option<i64>,
    persistent: bool,
    action: Option<NotificationAction>,
    icon: Option<String>,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds a notification from a draft whose defaults are already resolved.
    pub(crate) fn from_draft(
        id: NotificationId,
        draft: NotificationDraft,
        duration_ms: Option<i64>,
        persistent: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NotificationDraft {
            kind,
            title,
            options,
        } = draft;
        Self {
            id,
            kind,
            title,
            message: options.message,
            duration_ms,
            persistent,
            action: options.action,
            icon: options.icon,
            created_at,
        }
    }

    /// Merges a patch. The caller validates the title beforehand.
    pub(crate) fn apply(&mut self, patch: NotificationPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(persistent) = patch.persistent {
            self.persistent = persistent;
        }
        if let Some(action) = patch.action {
            self.action = action;
        }
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Duration stored at creation, explicit or kind default.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        self.duration_ms
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Countdown length the scheduler should use, if any.
    ///
    /// Persistent notifications and kinds without a duration have none.
    /// Negative durations are treated as zero.
    #[must_use]
    pub fn auto_dismiss_ms(&self) -> Option<u64> {
        if self.persistent {
            return None;
        }
        self.duration_ms.map(|ms| u64::try_from(ms).unwrap_or(0))
    }

    #[must_use]
    pub fn action(&self) -> Option<&NotificationAction> {
        self.action.as_ref()
    }

    /// The override icon, or the kind's default.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.kind.default_icon())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: Kind, persistent: bool, duration_ms: Option<i64>) -> Notification {
        Notification::from_draft(
            NotificationId::from("toast-0-0"),
            NotificationDraft::new(kind, "Saved"),
            duration_ms,
            persistent,
            DateTime::<Utc>::default(),
        )
    }

    #[test]
    fn kind_parses_known_names() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected_with_field_name() {
        let err = "fatal".parse::<Kind>().unwrap_err();
        assert_eq!(err.field(), Some("kind"));
    }

    #[test]
    fn ids_embed_sequence_and_timestamp() {
        let at = DateTime::<Utc>::from_timestamp_millis(1234).unwrap();
        assert_eq!(NotificationId::generate(7, at).as_str(), "toast-7-1234");
        assert_ne!(
            NotificationId::generate(7, at),
            NotificationId::generate(8, at)
        );
    }

    #[test]
    fn icon_defaults_to_kind_and_honours_override() {
        let mut n = sample(Kind::Success, false, Some(4000));
        assert_eq!(n.icon(), "✓");

        n.apply(NotificationPatch::new().icon(Some("★".into())));
        assert_eq!(n.icon(), "★");

        n.apply(NotificationPatch::new().icon(None).kind(Kind::Error));
        assert_eq!(n.icon(), "✕");
    }

    #[test]
    fn persistent_suppresses_auto_dismiss() {
        assert_eq!(sample(Kind::Info, true, Some(4000)).auto_dismiss_ms(), None);
        assert_eq!(sample(Kind::Info, false, Some(4000)).auto_dismiss_ms(), Some(4000));
        assert_eq!(sample(Kind::Loading, false, None).auto_dismiss_ms(), None);
    }

    #[test]
    fn negative_duration_means_immediate() {
        assert_eq!(sample(Kind::Info, false, Some(-10)).auto_dismiss_ms(), Some(0));
    }

    #[test]
    fn patch_leaves_duration_untouched() {
        let mut n = sample(Kind::Loading, true, None);
        n.apply(
            NotificationPatch::new()
                .kind(Kind::Success)
                .title("Uploaded")
                .message(Some("3 files".into())),
        );
        assert_eq!(n.kind(), Kind::Success);
        assert_eq!(n.title(), "Uploaded");
        assert_eq!(n.message(), Some("3 files"));
        assert_eq!(n.duration_ms(), None);
        assert!(n.is_persistent());
    }

    #[test]
    fn blank_titles_are_invalid() {
        assert!(validate_title("Saved").is_ok());
        assert_eq!(validate_title("   ").unwrap_err().field(), Some("title"));
    }

    #[test]
    fn action_debug_hides_handler() {
        let action = NotificationAction::new("Undo", || {});
        assert!(format!("{action:?}").contains("Undo"));
    }
}
