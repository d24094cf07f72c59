//! WhatsApp TXT export parser.
//!
//! WhatsApp exports vary by locale. This parser auto-detects the layout
//! by analyzing the first non-empty lines of the file (20 by default).
//!
//! Supported layouts:
//! - iOS US: `[1/15/24, 10:30:45 AM] Sender: Message`
//! - iOS EU: `[15.01.24, 10:30:45] Sender: Message`
//! - iOS slashed: `[15/01/2024, 10:30:45] Sender: Message`
//! - Android EU: `15/01/2024, 10:30 - Sender: Message`
//! - Android US: `1/15/24, 10:30 PM - Sender: Message`
//! - Android dotted: `26.10.2025, 20:40 - Sender: Message`

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::Message;
use crate::config::WhatsAppConfig;
use crate::error::ChatlyzeError;
use crate::parsing::whatsapp::{
    DateFormat, DateOrder, detect_date_order, detect_whatsapp_format, is_whatsapp_system_message,
    parse_whatsapp_timestamp, split_sender,
};

/// Counts collected while parsing one transcript.
///
/// `entries == parsed + skipped + empty + dropped_notices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Layout used for the transcript, `None` for blank input
    pub format: Option<DateFormat>,
    /// Day/month order used for slashed dates
    pub date_order: Option<DateOrder>,
    /// Lines that started a new entry
    pub entries: usize,
    /// Records produced
    pub parsed: usize,
    /// Entries dropped because the timestamp did not parse
    pub skipped: usize,
    /// Entries with nothing after the prefix
    pub empty: usize,
    /// System notices dropped by `skip_system_messages`
    pub dropped_notices: usize,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlyze::parsers::WhatsAppParser;
/// use chatlyze::message::GROUP_NOTIFICATION;
///
/// let text = "15/01/2024, 10:30 - Alice: Hello\n\
///             second line\n\
///             15/01/2024, 10:31 - Alice added Bob\n";
///
/// let messages = WhatsAppParser::new().parse_str(text)?;
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].text(), "Hello\nsecond line");
/// assert_eq!(messages[1].user(), GROUP_NOTIFICATION);
/// # Ok::<(), chatlyze::ChatlyzeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

/// One entry as it appears in the transcript, before timestamp parsing.
struct RawEntry<'a> {
    date: &'a str,
    time: &'a str,
    body: String,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Parses an export file.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Message>, ChatlyzeError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export text.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>, ChatlyzeError> {
        self.parse_with_report(content).map(|(messages, _)| messages)
    }

    /// Parses uploaded bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Message>, ChatlyzeError> {
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|e| ChatlyzeError::utf8("chat export", e))?;
        self.parse_str(&content)
    }

    /// Parses export text and reports what was kept and skipped.
    ///
    /// Blank input yields no records. Input with text but no recognizable
    /// timestamp prefix is an [`InvalidFormat`](ChatlyzeError::InvalidFormat)
    /// error. Entries with an impossible timestamp are skipped and counted.
    pub fn parse_with_report(
        &self,
        content: &str,
    ) -> Result<(Vec<Message>, ParseReport), ChatlyzeError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        // Blank lines stay: they separate paragraphs inside a message.
        let lines: Vec<&str> = content
            .lines()
            .map(|l| l.trim_start_matches('\u{200e}'))
            .collect();
        let sample: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| !l.trim().is_empty())
            .take(self.config.detection_sample.max(1))
            .collect();

        let mut report = ParseReport::default();
        if sample.is_empty() {
            return Ok((Vec::new(), report));
        }

        // Step 1: pick the layout
        let format = match self.config.date_format {
            Some(format) => format,
            None => {
                detect_whatsapp_format(&sample).ok_or_else(|| {
                    ChatlyzeError::invalid_format(
                        "WhatsApp",
                        "Could not detect WhatsApp export format. \
                         Make sure the file is a valid WhatsApp chat export.",
                    )
                })?
            }
        };
        debug!(?format, "using WhatsApp layout");
        report.format = Some(format);

        // Step 2: split into entries
        let regex = Regex::new(format.pattern())
            .map_err(|e| ChatlyzeError::invalid_format("WhatsApp", e.to_string()))?;
        let entries = collect_entries(&regex, &lines);
        report.entries = entries.len();

        // Step 3: settle day/month order for slashed dates
        let order = if format.is_slashed() {
            detect_date_order(entries.iter().map(|e| e.date)).unwrap_or_else(|| {
                debug!(?format, "date order ambiguous, using layout default");
                format.default_order()
            })
        } else {
            DateOrder::DayFirst
        };
        report.date_order = Some(order);

        // Step 4: build records
        let mut messages = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.body.trim().is_empty() {
                report.empty += 1;
                continue;
            }

            let Some(timestamp) = parse_whatsapp_timestamp(entry.date, entry.time, format, order)
            else {
                warn!(date = entry.date, time = entry.time, "skipping entry with unparsable timestamp");
                report.skipped += 1;
                continue;
            };

            let msg = match split_sender(&entry.body) {
                (Some(_), text) if text.trim().is_empty() => {
                    report.empty += 1;
                    continue;
                }
                (Some(sender), text)
                    if !sender.trim().is_empty() && !is_whatsapp_system_message(text) =>
                {
                    Message::new(timestamp, sender.trim(), text)
                }
                (Some(_), text) => Message::notification(timestamp, text),
                (None, body) => Message::notification(timestamp, body),
            };

            if self.config.skip_system_messages && msg.is_notification() {
                report.dropped_notices += 1;
                continue;
            }
            messages.push(msg);
        }

        report.parsed = messages.len();
        debug!(
            entries = report.entries,
            parsed = report.parsed,
            skipped = report.skipped,
            "parsed WhatsApp export"
        );
        Ok((messages, report))
    }
}

/// Groups lines into entries; lines before the first entry are dropped.
///
/// Blank lines inside an entry are kept, trailing ones are not.
fn collect_entries<'a>(regex: &Regex, lines: &[&'a str]) -> Vec<RawEntry<'a>> {
    let mut entries: Vec<RawEntry<'a>> = Vec::new();
    let mut orphans = 0usize;

    for line in lines {
        if line.trim().is_empty() {
            if let Some(last) = entries.last_mut() {
                last.body.push('\n');
            }
            continue;
        }
        if let Some(caps) = regex.captures(line) {
            let date = caps.get(1).map_or("", |m| m.as_str());
            let time = caps.get(2).map_or("", |m| m.as_str());
            let body = caps.get(3).map_or("", |m| m.as_str());
            entries.push(RawEntry {
                date,
                time,
                body: body.to_string(),
            });
        } else if let Some(last) = entries.last_mut() {
            // Continuation of previous entry (multiline)
            last.body.push('\n');
            last.body.push_str(line);
        } else {
            orphans += 1;
        }
    }

    if orphans > 0 {
        debug!(orphans, "dropped lines before the first entry");
    }
    for entry in &mut entries {
        let end = entry.body.trim_end_matches('\n').len();
        entry.body.truncate(end);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::GROUP_NOTIFICATION;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parser_name() {
        assert_eq!(WhatsAppParser::new().name(), "WhatsApp");
    }

    #[test]
    fn test_parse_android_basic() {
        let text = "\
15/01/2024, 10:30 - Alice: Hello
15/01/2024, 10:31 - Bob: Hi there
";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].user(), "Alice");
        assert_eq!(messages[0].text(), "Hello");
        assert_eq!(messages[0].day, 15);
        assert_eq!(messages[0].month_num, 1);
        assert_eq!(messages[1].minute, 31);
    }

    #[test]
    fn test_notice_goes_to_sentinel() {
        let text = "\
15/01/2024, 10:30 - Alice: Hello
15/01/2024, 10:31 - Alice: Again
15/01/2024, 10:32 - X added Y
";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].user(), GROUP_NOTIFICATION);
        assert_eq!(messages[2].text(), "X added Y");
    }

    #[test]
    fn test_skip_system_messages() {
        let text = "\
15/01/2024, 10:30 - Alice: Hello
15/01/2024, 10:32 - X added Y
";
        let parser =
            WhatsAppParser::with_config(WhatsAppConfig::new().with_skip_system_messages(true));
        let (messages, report) = parser.parse_with_report(text).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(report.dropped_notices, 1);
    }

    #[test]
    fn test_multiline_and_orphans() {
        let text = "\
orphan before anything
[1/15/24, 10:30:45 AM] Alice: first
continued here
[1/15/24, 10:31:00 PM] Bob: second
";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "first\ncontinued here");
        assert_eq!(messages[1].hour, 22);
    }

    #[test]
    fn test_blank_lines_inside_message_kept() {
        let text = "\
15/01/2024, 10:30 - Alice: para one

para two


15/01/2024, 10:31 - Bob: next
";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "para one\n\npara two");
        assert_eq!(messages[1].text(), "next");
    }

    #[test]
    fn test_sender_with_trimmed_empty_text() {
        let text = "\
15/01/2024, 10:30 - Alice:
15/01/2024, 10:31 - Bob: hi
";
        let (messages, report) = WhatsAppParser::new().parse_with_report(text).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].user(), "Bob");
        assert!(messages.iter().all(|m| !m.is_notification()));
        assert_eq!(report.empty, 1);
    }

    #[test]
    fn test_ios_group_notice_reclassified() {
        let text = "\
[15.01.24, 10:30:45] Family: Messages and calls are end-to-end encrypted.
[15.01.24, 10:31:00] Alice: hi
";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages[0].user(), GROUP_NOTIFICATION);
        assert_eq!(messages[1].user(), "Alice");
    }

    #[test]
    fn test_invalid_timestamp_skipped() {
        let text = "\
31/02/2024, 10:30 - Alice: impossible date
15/01/2024, 10:31 - Bob: fine
";
        let (messages, report) = WhatsAppParser::new().parse_with_report(text).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(report.entries, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.parsed, 1);
    }

    #[test]
    fn test_month_first_detected_from_dates() {
        let text = "\
3/5/24, 10:30 PM - Alice: hi
3/25/24, 10:31 PM - Bob: hey
";
        let (messages, report) = WhatsAppParser::new().parse_with_report(text).unwrap();
        assert_eq!(report.format, Some(DateFormat::DashedSlash12h));
        assert_eq!(report.date_order, Some(DateOrder::MonthFirst));
        assert_eq!(messages[0].month_num, 3);
        assert_eq!(messages[0].day, 5);
    }

    #[test]
    fn test_bom_and_crlf() {
        let text = "\u{feff}15/01/2024, 10:30 - Alice: Hello\r\n15/01/2024, 10:31 - Bob: Hi\r\n";
        let messages = WhatsAppParser::new().parse_str(text).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "Hello");
        assert_eq!(messages[1].text(), "Hi");
    }

    #[test]
    fn test_empty_input() {
        let (messages, report) = WhatsAppParser::new().parse_with_report("\n  \n").unwrap();
        assert!(messages.is_empty());
        assert_eq!(report.format, None);
    }

    #[test]
    fn test_unrecognized_input() {
        let err = WhatsAppParser::new()
            .parse_str("just some notes\nnothing else")
            .unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_pinned_format() {
        let parser =
            WhatsAppParser::with_config(WhatsAppConfig::new().with_date_format(DateFormat::DashedDot));
        let messages = parser
            .parse_str("26.10.2025, 20:40 - Alice: Hello\n")
            .unwrap();
        assert_eq!(messages[0].year, 2025);
        assert_eq!(messages[0].timestamp.hour(), 20);
        assert_eq!(messages[0].timestamp.day(), 26);
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = WhatsAppParser::new().parse_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ChatlyzeError::Utf8 { .. }));
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "15/01/2024, 10:30 - Alice: from disk").unwrap();
        let messages = WhatsAppParser::new().parse(file.path()).unwrap();
        assert_eq!(messages[0].text(), "from disk");
    }
}
