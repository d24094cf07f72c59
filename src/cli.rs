//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - top-level arguments and the verbosity flag
//! - [`Command`] - the `users`, `report` and `export` subcommands
//! - [`FormatArg`] / [`SentimentArg`] - value enums mapped onto library types
//!
//! ```rust
//! use chatlyze::cli::{Cli, Command};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["chatlyze", "-v", "users", "chat.txt"]);
//! assert_eq!(cli.verbose, 1);
//! assert!(matches!(cli.command, Command::Users { .. }));
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::filter::{FilterConfig, UserSelection};
use crate::error::Result;
use crate::format::OutputFormat;
use crate::sentiment::Sentiment;

/// Analyze WhatsApp chat exports: activity, busiest users, words, emoji
/// and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlyze")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlyze users chat.txt
    chatlyze report chat.txt --user Alice -o alice.json
    chatlyze report chat.txt --after 2024-01-01 --top-words 10
    chatlyze export chat.txt -f jsonl --sentiment negative")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the selectable users, "Overall" first
    Users {
        /// Path to the WhatsApp TXT export
        input: PathBuf,
    },

    /// Write every dashboard view as JSON
    Report {
        /// Path to the WhatsApp TXT export
        input: PathBuf,

        /// Restrict the views to one sender
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        dates: DateRange,

        /// JSON session configuration
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Rows in the common-words table
        #[arg(long, value_name = "N")]
        top_words: Option<usize>,

        /// Rows in the busiest-users table
        #[arg(long, value_name = "N")]
        top_users: Option<usize>,
    },

    /// Write the annotated records
    Export {
        /// Path to the WhatsApp TXT export
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: FormatArg,

        /// Output file (defaults to `records.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep only this sender's records
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// Keep only records with this label
        #[arg(long, value_enum)]
        sentiment: Option<SentimentArg>,

        #[command(flatten)]
        dates: DateRange,
    },
}

/// Inclusive date bounds shared by `report` and `export`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DateRange {
    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,
}

impl DateRange {
    /// Applies both bounds to `filter`.
    pub fn apply(&self, mut filter: FilterConfig) -> Result<FilterConfig> {
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }
}

/// `--user` value as a selection; absent means Overall.
pub fn selection(user: Option<&str>) -> UserSelection {
    user.map_or(UserSelection::Overall, UserSelection::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Semicolon-delimited CSV
    Csv,
    /// JSON array
    Json,
    /// One JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SentimentArg {
    #[value(alias = "pos")]
    Positive,
    #[value(alias = "neu")]
    Neutral,
    #[value(alias = "neg")]
    Negative,
}

impl From<SentimentArg> for Sentiment {
    fn from(arg: SentimentArg) -> Sentiment {
        match arg {
            SentimentArg::Positive => Sentiment::Positive,
            SentimentArg::Neutral => Sentiment::Neutral,
            SentimentArg::Negative => Sentiment::Negative,
        }
    }
}
