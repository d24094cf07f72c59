//! Filter records by user, sentiment and date range.
//!
//! This module provides [`UserSelection`], the per-view user choice every
//! aggregation takes, and [`FilterConfig`] plus [`apply_filters`] for
//! narrowing a record set before export or reporting.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | User | [`with_user`](FilterConfig::with_user) | Records from one user (exact match) |
//! | Sentiment | [`with_sentiment`](FilterConfig::with_sentiment) | Records with one label |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Examples
//!
//! ```
//! use chatlyze::core::filter::{FilterConfig, apply_filters};
//! use chatlyze::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlyze::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(day(1), "Alice", "Old"),
//!     Message::new(day(15), "Alice", "New"),
//!     Message::new(day(15), "Bob", "Hi"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_user("Alice")
//!     .with_date_from("2024-06-10")?;
//!
//! let filtered = apply_filters(&messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - User matching is exact and case-sensitive
//! - Date bounds are inclusive whole days
//! - Multiple filters are combined with AND logic

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatlyzeError;
use crate::sentiment::Sentiment;

/// Label of the "no user filter" choice.
pub const OVERALL: &str = "Overall";

/// Which records a view covers: everyone, or one named user.
///
/// # Examples
///
/// ```
/// use chatlyze::core::filter::UserSelection;
///
/// assert_eq!(UserSelection::from("Overall"), UserSelection::Overall);
/// assert_eq!(UserSelection::from("Alice"), UserSelection::User("Alice".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserSelection {
    #[default]
    Overall,
    User(String),
}

impl UserSelection {
    /// Returns `true` if the record belongs to this selection.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => msg.user == *name,
        }
    }

    /// Returns `true` for [`UserSelection::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, UserSelection::Overall)
    }

    /// Returns the selection label as shown in user lists.
    pub fn as_str(&self) -> &str {
        match self {
            UserSelection::Overall => OVERALL,
            UserSelection::User(name) => name,
        }
    }
}

impl From<&str> for UserSelection {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(s.to_string())
        }
    }
}

impl From<String> for UserSelection {
    fn from(s: String) -> Self {
        if s == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(s)
        }
    }
}

impl From<UserSelection> for String {
    fn from(selection: UserSelection) -> String {
        match selection {
            UserSelection::Overall => OVERALL.to_string(),
            UserSelection::User(name) => name,
        }
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for filtering records.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatlyze::core::filter::FilterConfig;
/// use chatlyze::sentiment::Sentiment;
///
/// # fn main() -> chatlyze::Result<()> {
/// let combined = FilterConfig::new()
///     .with_user("Alice")
///     .with_sentiment(Sentiment::Negative)
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(combined.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records from this selection.
    pub selection: UserSelection,

    /// Include only records with this label.
    pub sentiment: Option<Sentiment>,

    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user selection.
    #[must_use]
    pub fn with_selection(mut self, selection: UserSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the user filter; `"Overall"` clears it.
    #[must_use]
    pub fn with_user(self, user: impl Into<String>) -> Self {
        self.with_selection(UserSelection::from(user.into()))
    }

    /// Sets the sentiment filter.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlyzeError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlyzeError> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlyzeError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlyzeError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(parse_date(date_str)?.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        !self.selection.is_overall() || self.sentiment.is_some() || self.has_date_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        self.selection.matches(msg)
            && self.sentiment.is_none_or(|s| msg.sentiment == s)
            && self.after.is_none_or(|after| msg.timestamp >= after)
            && self.before.is_none_or(|before| msg.timestamp <= before)
    }
}

/// Parses a `YYYY-MM-DD` date.
fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlyzeError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlyzeError::invalid_date(date_str))
}

/// Filters records based on the provided configuration.
///
/// Returns the matching records in their original order.
pub fn apply_filters<'a>(messages: &'a [Message], config: &FilterConfig) -> Vec<&'a Message> {
    messages.iter().filter(|msg| config.matches(msg)).collect()
}
