//! The structured chat record.
//!
//! This module provides [`Message`], one parsed chat entry with its sender,
//! text, timestamp, calendar fields derived from the timestamp, and sentiment
//! label. The parser creates records; the aggregator only borrows them.
//!
//! # Examples
//!
//! ```
//! use chatlyze::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(23, 5, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "  Hello!  ");
//!
//! assert_eq!(msg.user(), "Alice");
//! assert_eq!(msg.text(), "Hello!");
//! assert_eq!(msg.day_name, "Monday");
//! assert_eq!(msg.month, "January");
//! assert_eq!(msg.period, "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// Sender name used for system notices (joins, leaves, encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One parsed chat entry.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Wall-clock time from the export prefix |
/// | `user` | Sender, or [`GROUP_NOTIFICATION`] for system notices |
/// | `message` | Trimmed message text; continuation lines joined with `\n` |
/// | `year`, `month`, `month_num`, `day`, `day_name`, `hour`, `minute` | Calendar fields of `timestamp` |
/// | `only_date` | Calendar date of `timestamp` |
/// | `period` | Hour bucket such as `"14-15"` |
/// | `sentiment` | Label assigned after parsing |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub message: String,
    pub year: i32,
    pub month: String,
    pub month_num: u32,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    pub only_date: NaiveDate,
    pub period: String,
    #[serde(default)]
    pub sentiment: Sentiment,
}

impl Message {
    /// Creates a record and derives its calendar fields.
    ///
    /// The text is trimmed. An empty or whitespace-only user becomes
    /// [`GROUP_NOTIFICATION`]. The sentiment starts as neutral until a
    /// scorer assigns one.
    pub fn new(timestamp: NaiveDateTime, user: impl Into<String>, message: impl AsRef<str>) -> Self {
        let user = user.into();
        let user = if user.trim().is_empty() {
            GROUP_NOTIFICATION.to_string()
        } else {
            user
        };

        let hour = timestamp.hour();
        Self {
            timestamp,
            user,
            message: message.as_ref().trim().to_string(),
            year: timestamp.year(),
            month: month_name(timestamp.month()).to_string(),
            month_num: timestamp.month(),
            day: timestamp.day(),
            day_name: WEEKDAYS[timestamp.weekday().num_days_from_monday() as usize].to_string(),
            hour,
            minute: timestamp.minute(),
            only_date: timestamp.date(),
            period: period_label(hour),
            sentiment: Sentiment::default(),
        }
    }

    /// Creates a system notice attributed to [`GROUP_NOTIFICATION`].
    pub fn notification(timestamp: NaiveDateTime, message: impl AsRef<str>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, message)
    }

    /// Builder method to set the sentiment label.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Returns the sender name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this record is a system notice.
    pub fn is_notification(&self) -> bool {
        self.user == GROUP_NOTIFICATION
    }

    /// Returns `true` if the text is exactly one of the media placeholders.
    ///
    /// Invisible direction marks that iOS exports put in front of
    /// placeholders are ignored.
    pub fn is_media<S: AsRef<str>>(&self, placeholders: &[S]) -> bool {
        let text = self.message.trim_start_matches(['\u{200e}', '\u{200f}']).trim();
        placeholders.iter().any(|p| p.as_ref() == text)
    }
}

/// Returns the `"HH-HH+1"` bucket label for an hour, wrapping 23 to 0.
///
/// ```
/// use chatlyze::message::period_label;
///
/// assert_eq!(period_label(0), "00-01");
/// assert_eq!(period_label(9), "09-10");
/// assert_eq!(period_label(23), "23-00");
/// ```
pub fn period_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Returns the English name of a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Weekday names in calendar order, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
