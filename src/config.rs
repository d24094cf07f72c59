//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Every struct deserializes with
//! defaults for missing fields, so a config file only needs the settings it
//! changes.
//!
//! - [`WhatsAppConfig`] - export parsing settings
//! - [`AnalysisConfig`] - table sizes, media placeholder, stop words
//! - [`SessionConfig`] - both of the above
//!
//! # Example
//!
//! ```rust
//! use chatlyze::config::{AnalysisConfig, SessionConfig, WhatsAppConfig};
//!
//! let config = SessionConfig::new()
//!     .with_whatsapp(WhatsAppConfig::new().with_skip_system_messages(true))
//!     .with_analysis(AnalysisConfig::new().with_top_words(10));
//! assert_eq!(config.analysis.top_words, 10);
//! ```

#[cfg(feature = "json-output")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::analysis::StopWords;
use crate::error::{ChatlyzeError, Result};
use crate::parsing::whatsapp::DateFormat;

/// Media placeholders written by iOS exports, recognised in addition to
/// [`AnalysisConfig::media_placeholder`].
pub const IOS_MEDIA_PLACEHOLDERS: &[&str] = &[
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
];

/// Configuration for WhatsApp export parsing.
///
/// WhatsApp exports are TXT files with various locale-specific date formats.
/// The parser auto-detects the format by analyzing the first
/// `detection_sample` non-empty lines unless `date_format` pins one.
///
/// # Example
///
/// ```rust
/// use chatlyze::config::WhatsAppConfig;
/// use chatlyze::parsing::whatsapp::DateFormat;
///
/// let config = WhatsAppConfig::new()
///     .with_date_format(DateFormat::DashedSlash)
///     .with_skip_system_messages(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    /// Layout to use instead of auto-detection (default: detect)
    pub date_format: Option<DateFormat>,

    /// Drop system notices instead of attributing them to
    /// `group_notification` (default: false)
    pub skip_system_messages: bool,

    /// Non-empty lines sampled for layout detection (default: 20)
    pub detection_sample: usize,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            date_format: None,
            skip_system_messages: false,
            detection_sample: 20,
        }
    }
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the timestamp layout.
    #[must_use]
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the number of lines sampled for detection.
    #[must_use]
    pub fn with_detection_sample(mut self, lines: usize) -> Self {
        self.detection_sample = lines;
        self
    }
}

/// Configuration for the aggregation functions.
///
/// # Example
///
/// ```rust
/// use chatlyze::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_top_users(3)
///     .with_extra_stop_words(["lol", "haha"]);
/// assert!(config.stop_words.contains("lol"));
/// assert_eq!(config.media_placeholders()[0], "<Media omitted>");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rows in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Rows in the busiest-users table (default: 5)
    pub top_users: usize,

    /// Text of a message whose media was not exported (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Words excluded from word tables (default: bundled English + Hinglish list)
    pub stop_words: StopWords,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_users: 5,
            media_placeholder: "<Media omitted>".to_string(),
            stop_words: StopWords::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Replaces the stop-word set.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Adds words to the stop-word set.
    #[must_use]
    pub fn with_extra_stop_words<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.stop_words = self.stop_words.extend(words);
        self
    }

    /// Returns every text treated as a media placeholder.
    pub fn media_placeholders(&self) -> Vec<&str> {
        std::iter::once(self.media_placeholder.as_str())
            .chain(IOS_MEDIA_PLACEHOLDERS.iter().copied())
            .collect()
    }

    /// Returns `true` if the record's text is a media placeholder.
    pub fn is_media(&self, msg: &Message) -> bool {
        msg.is_media(&self.media_placeholders())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(ChatlyzeError::invalid_config("top_words must be at least 1", None));
        }
        if self.top_users == 0 {
            return Err(ChatlyzeError::invalid_config("top_users must be at least 1", None));
        }
        if self.media_placeholder.trim().is_empty() {
            return Err(ChatlyzeError::invalid_config(
                "media_placeholder must not be empty",
                None,
            ));
        }
        Ok(())
    }
}

/// Everything a [`Session`](crate::session::Session) needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub whatsapp: WhatsAppConfig,
    pub analysis: AnalysisConfig,
}

impl SessionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_whatsapp(mut self, whatsapp: WhatsAppConfig) -> Self {
        self.whatsapp = whatsapp;
        self
    }

    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    /// Checks value ranges of every section.
    pub fn validate(&self) -> Result<()> {
        if self.whatsapp.detection_sample == 0 {
            return Err(ChatlyzeError::invalid_config(
                "whatsapp.detection_sample must be at least 1",
                None,
            ));
        }
        self.analysis.validate()
    }

    /// Loads and validates a JSON configuration file.
    ///
    /// Missing fields take their default values.
    ///
    /// ```json
    /// {
    ///   "whatsapp": { "skip_system_messages": true },
    ///   "analysis": { "top_words": 10 }
    /// }
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ChatlyzeError::invalid_config(e.to_string(), Some(path.to_path_buf())))?;
        config.validate().map_err(|e| match e {
            ChatlyzeError::InvalidConfig { message, .. } => {
                ChatlyzeError::invalid_config(message, Some(path.to_path_buf()))
            }
            other => other,
        })?;
        Ok(config)
    }
}
