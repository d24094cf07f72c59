//! Output format writers.
//!
//! This module provides writers for records and dashboards:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//! - [`write_dashboard`] / [`dashboard_to_json`] - every view as pretty JSON - requires `json-output` feature
//!
//! Record writers accept `&[Message]` as well as the `&[&Message]` that
//! [`apply_filters`](crate::core::filter::apply_filters) returns.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlyze::Result<()> {
//! use chatlyze::core::output::{OutputConfig, to_csv, write_json};
//! use chatlyze::parsers::WhatsAppParser;
//!
//! let messages = WhatsAppParser::new().parse("chat.txt")?;
//! let config = OutputConfig::full();
//!
//! write_json(&messages, "records.json", &config)?;
//! let csv_string = to_csv(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{dashboard_to_json, to_json, write_dashboard, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::Message;

/// Controls which record fields the writers include.
///
/// User and message text are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include the hour bucket such as `"14-15"`
    pub include_period: bool,
    /// Include the sentiment value (`1`, `0`, `-1`)
    pub include_sentiment: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional field enabled.
    pub fn full() -> Self {
        Self {
            include_timestamps: true,
            include_period: true,
            include_sentiment: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_period(mut self) -> Self {
        self.include_period = true;
        self
    }

    #[must_use]
    pub fn with_sentiment(mut self) -> Self {
        self.include_sentiment = true;
        self
    }
}

/// Record shape shared by the JSON and JSONL writers.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct OutputRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    user: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<i8>,
}

#[cfg(feature = "json-output")]
impl<'a> OutputRecord<'a> {
    fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()),
            user: msg.user(),
            message: msg.text(),
            period: config.include_period.then_some(msg.period.as_str()),
            sentiment: config.include_sentiment.then(|| msg.sentiment.value()),
        }
    }
}
