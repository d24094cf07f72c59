//! Record output formats.
//!
//! [`OutputFormat`] picks one of the record writers in
//! [`core::output`](crate::core::output) without pulling in the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlyze::Result<()> {
//! use chatlyze::Message;
//! use chatlyze::core::OutputConfig;
//! use chatlyze::format::{OutputFormat, to_format_string};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let messages = vec![Message::new(ts, "Alice", "Hello!")];
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let csv = to_format_string(&messages, OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.contains("Alice;Hello!"));
//! # Ok(())
//! # }
//! ```

use std::borrow::Borrow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::output::OutputConfig;
use crate::error::{ChatlyzeError, Result};

/// Output format for annotated records.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - one pretty array
/// - [`Jsonl`](OutputFormat::Jsonl) - one object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    /// Also accepted as `ndjson`.
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// File extension without the dot.
    ///
    /// ```rust
    /// use chatlyze::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Every accepted name, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Feature that compiles in the writer for this format.
    pub fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Infers the format from a file extension (case-insensitive).
    ///
    /// ```rust
    /// use chatlyze::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/Records.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("records.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        ext.parse().map_err(|_| {
            ChatlyzeError::invalid_format(
                "output",
                format!(
                    "unknown file extension '.{ext}', expected one of: {}",
                    Self::all_names().join(", ")
                ),
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatlyzeError {
    ChatlyzeError::invalid_format(
        "output",
        format!(
            "output format {format} requires the '{}' feature",
            format.required_feature()
        ),
    )
}

/// Writes records to `path` with the writer for `format`.
///
/// # Errors
///
/// Fails when the file cannot be written or the writer for `format` was
/// not compiled in.
#[allow(unused_variables)]
pub fn write_to_format<M: Borrow<Message>>(
    messages: &[M],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders records as a string in `format`.
#[allow(unused_variables)]
pub fn to_format_string<M: Borrow<Message>>(
    messages: &[M],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
