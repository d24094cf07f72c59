//! Per-upload analysis context.
//!
//! A [`Session`] owns everything derived from one uploaded transcript: the
//! annotated records, the parse report, the selectable users and the
//! configuration. Loading another transcript means building another
//! session; nothing is shared between them.
//!
//! # Example
//!
//! ```rust
//! use chatlyze::config::SessionConfig;
//! use chatlyze::core::filter::UserSelection;
//! use chatlyze::session::Session;
//!
//! let text = "[1/15/24, 10:30:45 AM] Alice: I love this group!\n\
//!             [1/15/24, 10:31:00 AM] Bob: this is terrible\n";
//! let session = Session::from_text(text, &SessionConfig::default())?;
//!
//! assert_eq!(session.users(), ["Overall", "Alice", "Bob"]);
//!
//! let dashboard = session.dashboard(&UserSelection::Overall);
//! assert_eq!(dashboard.stats.data().unwrap().messages, 2);
//! # Ok::<(), chatlyze::ChatlyzeError>(())
//! ```

use std::path::Path;

use tracing::info;

use crate::Message;
use crate::analysis::{UserSelection, user_list};
use crate::config::SessionConfig;
use crate::core::filter::FilterConfig;
use crate::dashboard::Dashboard;
use crate::error::{ChatlyzeError, Result};
use crate::parsers::{ParseReport, WhatsAppParser};
use crate::sentiment::{VaderScorer, annotate};

/// Parsed and annotated transcript plus its configuration.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    report: ParseReport,
    users: Vec<String>,
    config: SessionConfig,
}

impl Session {
    /// Parses export text and labels every record.
    pub fn from_text(text: &str, config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let parser = WhatsAppParser::with_config(config.whatsapp.clone());
        let (messages, report) = parser.parse_with_report(text)?;

        let messages = annotate(messages, &VaderScorer::new());

        info!(
            records = messages.len(),
            skipped = report.skipped,
            "session loaded"
        );
        Ok(Self::assemble(messages, report, config.clone()))
    }

    /// Reads and analyzes an export file.
    pub fn from_path(path: impl AsRef<Path>, config: &SessionConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text, config)
    }

    /// Analyzes uploaded bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8], config: &SessionConfig) -> Result<Self> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| ChatlyzeError::utf8("chat export", e))?;
        Self::from_text(&text, config)
    }

    /// Builds a session over records that already carry their labels.
    pub fn from_messages(messages: Vec<Message>, config: SessionConfig) -> Self {
        let report = ParseReport {
            entries: messages.len(),
            parsed: messages.len(),
            ..ParseReport::default()
        };
        Self::assemble(messages, report, config)
    }

    fn assemble(messages: Vec<Message>, report: ParseReport, config: SessionConfig) -> Self {
        let users = user_list(&messages);
        Self {
            messages,
            report,
            users,
            config,
        }
    }

    /// Returns `"Overall"` followed by every sender, sorted, without the
    /// notification sentinel.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Returns `true` if the selection is Overall or a known sender.
    pub fn has_user(&self, selection: &UserSelection) -> bool {
        match selection {
            UserSelection::Overall => true,
            UserSelection::User(name) => self.users[1..].iter().any(|u| u == name),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a session over the records that pass `filter`.
    ///
    /// The parse report is kept; the user list is recomputed.
    #[must_use]
    pub fn filtered(&self, filter: &FilterConfig) -> Self {
        let messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        Self::assemble(messages, self.report.clone(), self.config.clone())
    }

    /// Computes every view for `selection`.
    pub fn dashboard(&self, selection: &UserSelection) -> Dashboard {
        Dashboard::build(&self.messages, selection, &self.config.analysis)
    }

    /// Like [`dashboard`](Self::dashboard), but rejects users absent from
    /// the transcript.
    pub fn dashboard_for(&self, selection: &UserSelection) -> Result<Dashboard> {
        if !self.has_user(selection) {
            return Err(ChatlyzeError::unknown_user(selection.as_str()));
        }
        Ok(self.dashboard(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisConfig, WhatsAppConfig};
    use crate::message::GROUP_NOTIFICATION;
    use crate::sentiment::Sentiment;

    const CHAT: &str = "\
15/01/2024, 10:30 - Alice: I love this, it is wonderful
15/01/2024, 10:31 - Bob: this is terrible and awful
15/01/2024, 10:32 - Alice added Carol
16/01/2024, 09:00 - Carol: the meeting is at noon
";

    #[test]
    fn test_from_text_annotates() {
        let session = Session::from_text(CHAT, &SessionConfig::default()).unwrap();
        let labels: Vec<Sentiment> = session.messages().iter().map(|m| m.sentiment).collect();
        assert_eq!(labels[0], Sentiment::Positive);
        assert_eq!(labels[1], Sentiment::Negative);
        assert_eq!(labels[3], Sentiment::Neutral);
        assert_eq!(session.messages()[2].user(), GROUP_NOTIFICATION);
        assert_eq!(session.report().parsed, 4);
    }

    #[test]
    fn test_users() {
        let session = Session::from_text(CHAT, &SessionConfig::default()).unwrap();
        assert_eq!(session.users(), ["Overall", "Alice", "Bob", "Carol"]);
        assert!(session.has_user(&UserSelection::from("Carol")));
        assert!(!session.has_user(&UserSelection::from(GROUP_NOTIFICATION)));
        assert!(session.has_user(&UserSelection::Overall));
    }

    #[test]
    fn test_emoji_only_message_is_scored() {
        let chat = "15/01/2024, 10:30 - Alice: 😢\n15/01/2024, 10:31 - Bob: you are a genius\n";
        let session = Session::from_text(chat, &SessionConfig::default()).unwrap();
        assert_eq!(session.messages()[0].sentiment, Sentiment::Negative);
        assert_eq!(session.messages()[1].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_skip_system_messages_config() {
        let config = SessionConfig::default()
            .with_whatsapp(WhatsAppConfig::new().with_skip_system_messages(true));
        let session = Session::from_text(CHAT, &config).unwrap();
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config =
            SessionConfig::default().with_analysis(AnalysisConfig::new().with_top_words(0));
        let err = Session::from_text(CHAT, &config).unwrap_err();
        assert!(matches!(err, ChatlyzeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_filtered() {
        let session = Session::from_text(CHAT, &SessionConfig::default()).unwrap();
        let filter = FilterConfig::new().with_date_from("2024-01-16").unwrap();
        let later = session.filtered(&filter);
        assert_eq!(later.messages().len(), 1);
        assert_eq!(later.users(), ["Overall", "Carol"]);
    }

    #[test]
    fn test_dashboard_for_unknown_user() {
        let session = Session::from_text(CHAT, &SessionConfig::default()).unwrap();
        let err = session
            .dashboard_for(&UserSelection::from("Mallory"))
            .unwrap_err();
        assert!(err.is_unknown_user());

        let dash = session.dashboard_for(&UserSelection::from("Bob")).unwrap();
        assert_eq!(dash.stats.data().unwrap().messages, 1);
    }

    #[test]
    fn test_from_bytes() {
        let session = Session::from_bytes(CHAT.as_bytes(), &SessionConfig::default()).unwrap();
        assert_eq!(session.messages().len(), 4);

        let err = Session::from_bytes(&[0xff, 0xfe], &SessionConfig::default()).unwrap_err();
        assert!(matches!(err, ChatlyzeError::Utf8 { .. }));
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
