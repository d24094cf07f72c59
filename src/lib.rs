//! # Chatlyze
//!
//! A Rust library for analyzing WhatsApp chat exports.
//!
//! ## Overview
//!
//! Chatlyze turns the plain-text export of a WhatsApp chat into structured
//! records and computes the usual chat statistics over them:
//! - **Parsing**: Android and iOS layouts, 12h/24h clocks, day-first and
//!   month-first dates, multi-line messages and system notices
//! - **Sentiment**: every record is labelled positive, neutral or negative
//!   with VADER
//! - **Analysis**: message/word/media/link counts, monthly and daily
//!   timelines, busiest weekdays and months, weekday x hour heatmaps,
//!   busiest users, word frequencies and emoji usage
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlyze::prelude::*;
//!
//! let text = "15/01/2024, 10:30 - Alice: Good morning, great news!\n\
//!             15/01/2024, 10:31 - Bob: 😂😂\n\
//!             15/01/2024, 10:32 - Alice added Charlie\n";
//!
//! let session = Session::from_text(text, &SessionConfig::default())?;
//! assert_eq!(session.users(), ["Overall", "Alice", "Bob"]);
//!
//! let dashboard = session.dashboard(&UserSelection::Overall);
//! assert_eq!(dashboard.stats.data().map(|s| s.messages), Some(3));
//! # Ok::<(), chatlyze::ChatlyzeError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - export layout detection and timestamp parsing
//! - [`parsers`] - [`WhatsAppParser`](parsers::WhatsAppParser) and its [`ParseReport`](parsers::ParseReport)
//! - [`message`] - the [`Message`] record and its derived calendar fields
//! - [`sentiment`] - [`Sentiment`](sentiment::Sentiment), [`VaderScorer`](sentiment::VaderScorer)
//! - [`analysis`] - aggregation functions over records
//! - [`dashboard`] - every view for one selection, each ready or empty
//! - [`session`] - one parsed and labelled transcript
//! - [`core`] - filtering and record/dashboard writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - parsing and analysis settings
//! - [`cli`] - clap definitions for the binary (feature `cli`)
//! - [`error`] - [`ChatlyzeError`] and [`Result`]

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod message;
pub mod parsers;
pub mod parsing;
pub mod sentiment;
pub mod session;

pub use error::{ChatlyzeError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlyze::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlyzeError, Result};

    pub use crate::config::{AnalysisConfig, SessionConfig, WhatsAppConfig};

    pub use crate::parsers::{ParseReport, WhatsAppParser};

    pub use crate::sentiment::{Sentiment, SentimentScorer, VaderScorer};

    pub use crate::analysis::StopWords;

    pub use crate::core::filter::{FilterConfig, UserSelection, apply_filters};
    pub use crate::core::output::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_dashboard, write_json, write_jsonl};

    pub use crate::dashboard::{Dashboard, Panel};
    pub use crate::format::OutputFormat;
    pub use crate::session::Session;
}
