//! Unified error types for chatlyze.
//!
//! This module provides a single [`ChatlyzeError`] enum that covers all error
//! cases in the library.
//!
//! Malformed transcript lines are never errors: the parser skips them and
//! records the skip in its [`ParseReport`](crate::parsers::ParseReport).
//! Aggregations never fail either; a view without rows is reported as
//! [`Panel::NoData`](crate::dashboard::Panel::NoData).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
///
/// ```rust
/// use chatlyze::error::Result;
/// use chatlyze::parsers::WhatsAppParser;
///
/// fn count_records(text: &str) -> Result<usize> {
///     Ok(WhatsAppParser::new().parse_str(text)?.len())
/// }
///
/// assert_eq!(count_records("15/01/2024, 10:30 - Alice: hi\n").unwrap(), 1);
/// ```
pub type Result<T> = std::result::Result<T, ChatlyzeError>;

/// The error type for all chatlyze operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlyzeError {
    /// Reading the export or writing a report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript doesn't match any known export layout.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An `--after`/`--before` bound is not `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },

    /// A configuration file or value could not be used.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidConfig {
        /// Description of the problem
        message: String,
        /// The configuration file, if one was involved
        path: Option<PathBuf>,
    },

    /// The requested user never wrote in this chat.
    #[error("User '{user}' does not appear in this chat")]
    UnknownUser {
        /// The name that was asked for
        user: String,
    },

    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config file parsing or dashboard serialization failed.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Uploaded bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlyzeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlyzeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlyzeError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlyzeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlyzeError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlyzeError::InvalidConfig {
            message: message.into(),
            path,
        }
    }

    /// Creates an unknown user error.
    pub fn unknown_user(user: impl Into<String>) -> Self {
        ChatlyzeError::UnknownUser { user: user.into() }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlyzeError::Utf8 {
            context: context.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ChatlyzeError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlyzeError::InvalidFormat { .. })
    }

    /// Returns `true` if a date bound could not be parsed.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlyzeError::InvalidDate { .. })
    }

    /// Returns `true` if this is an unknown user error.
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, ChatlyzeError::UnknownUser { .. })
    }
}
