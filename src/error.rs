// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only structural mistakes surface here (bad input at publish time, config
//! I/O, audio device failures). Operations against unknown notification ids
//! are not errors: they report `false` instead.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A notification field was rejected at publish or update time.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Sound playback failed (no device, unsupported format, ...).
    #[error("Audio Error: {0}")]
    Audio(String),
}

impl Error {
    /// Builds an [`Error::InvalidInput`] for the given field.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending field name for input errors.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn invalid_input_names_the_field() {
        let err = Error::invalid("title", "must not be empty");
        assert_eq!(err.field(), Some("title"));
        assert_eq!(format!("{}", err), "Invalid title: must not be empty");
    }

    #[test]
    fn non_input_errors_have_no_field() {
        assert_eq!(Error::Audio("no device".into()).field(), None);
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
