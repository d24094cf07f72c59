//! Shared WhatsApp parsing utilities.
//!
//! Everything here works on single lines or single entry prefixes; the
//! orchestration over a whole transcript lives in
//! [`WhatsAppParser`](crate::parsers::WhatsAppParser).

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Timestamp prefix layouts found in WhatsApp exports.
///
/// WhatsApp exports vary by locale and platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// iOS, 12-hour clock
    /// Example: [1/15/24, 10:30:45 AM] Sender: Message
    #[serde(rename = "bracketed_12h")]
    Bracketed12h,
    /// iOS, dotted date
    /// Example: [15.01.24, 10:30:45] Sender: Message
    BracketedDot,
    /// iOS, slashed date, 24-hour clock
    /// Example: [15/01/2024, 10:30:45] Sender: Message
    BracketedSlash,
    /// Android, slashed date, 24-hour clock
    /// Example: 15/01/2024, 10:30 - Sender: Message
    DashedSlash,
    /// Android, slashed date, 12-hour clock
    /// Example: 1/15/24, 10:30 PM - Sender: Message
    #[serde(rename = "dashed_slash_12h")]
    DashedSlash12h,
    /// Android, dotted date
    /// Example: 26.10.2025, 20:40 - Sender: Message
    DashedDot,
}

impl DateFormat {
    /// Returns the prefix regex for this layout.
    ///
    /// Captures: 1 = date, 2 = time, 3 = the rest of the line.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Bracketed12h => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?\s?[APap]\.?[Mm]\.?)\]\s?(.*)$"
            }
            DateFormat::BracketedDot => {
                r"^\[(\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\]\s?(.*)$"
            }
            DateFormat::BracketedSlash => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\]\s?(.*)$"
            }
            DateFormat::DashedSlash => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s(.*)$"
            }
            DateFormat::DashedSlash12h => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?\s?[APap]\.?[Mm]\.?)\s-\s(.*)$"
            }
            DateFormat::DashedDot => {
                r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s(.*)$"
            }
        }
    }

    /// Returns chrono format strings for this layout, most specific first.
    pub fn date_parse_formats(self, order: DateOrder) -> &'static [&'static str] {
        match (self, order) {
            (DateFormat::Bracketed12h | DateFormat::DashedSlash12h, DateOrder::MonthFirst) => &[
                "%m/%d/%y, %I:%M:%S %p",
                "%m/%d/%y, %I:%M %p",
                "%m/%d/%Y, %I:%M:%S %p",
                "%m/%d/%Y, %I:%M %p",
            ],
            (DateFormat::Bracketed12h | DateFormat::DashedSlash12h, DateOrder::DayFirst) => &[
                "%d/%m/%y, %I:%M:%S %p",
                "%d/%m/%y, %I:%M %p",
                "%d/%m/%Y, %I:%M:%S %p",
                "%d/%m/%Y, %I:%M %p",
            ],
            (DateFormat::BracketedSlash | DateFormat::DashedSlash, DateOrder::DayFirst) => &[
                "%d/%m/%y, %H:%M:%S",
                "%d/%m/%y, %H:%M",
                "%d/%m/%Y, %H:%M:%S",
                "%d/%m/%Y, %H:%M",
            ],
            (DateFormat::BracketedSlash | DateFormat::DashedSlash, DateOrder::MonthFirst) => &[
                "%m/%d/%y, %H:%M:%S",
                "%m/%d/%y, %H:%M",
                "%m/%d/%Y, %H:%M:%S",
                "%m/%d/%Y, %H:%M",
            ],
            (DateFormat::BracketedDot | DateFormat::DashedDot, _) => &[
                "%d.%m.%y, %H:%M:%S",
                "%d.%m.%y, %H:%M",
                "%d.%m.%Y, %H:%M:%S",
                "%d.%m.%Y, %H:%M",
            ],
        }
    }

    /// Returns the date order assumed when the dates themselves don't tell.
    ///
    /// 12-hour exports come from US-style locales; 24-hour slashed exports
    /// put the day first.
    pub fn default_order(self) -> DateOrder {
        match self {
            DateFormat::Bracketed12h | DateFormat::DashedSlash12h => DateOrder::MonthFirst,
            _ => DateOrder::DayFirst,
        }
    }

    /// Returns `true` if dates in this layout use `/` and may be either order.
    pub fn is_slashed(self) -> bool {
        !matches!(self, DateFormat::BracketedDot | DateFormat::DashedDot)
    }

    /// Returns all layouts, in detection priority order.
    pub fn all() -> &'static [DateFormat] {
        &[
            DateFormat::Bracketed12h,
            DateFormat::BracketedDot,
            DateFormat::BracketedSlash,
            DateFormat::DashedSlash,
            DateFormat::DashedSlash12h,
            DateFormat::DashedDot,
        ]
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let example = match self {
            DateFormat::Bracketed12h => "[M/D/YY, h:mm AM]",
            DateFormat::BracketedDot => "[DD.MM.YY, HH:MM]",
            DateFormat::BracketedSlash => "[DD/MM/YY, HH:MM]",
            DateFormat::DashedSlash => "DD/MM/YY, HH:MM -",
            DateFormat::DashedSlash12h => "M/D/YY, h:mm AM -",
            DateFormat::DashedDot => "DD.MM.YY, HH:MM -",
        };
        f.write_str(example)
    }
}

/// Order of day and month in slashed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Infers the day/month order from the date strings of a transcript.
///
/// A first component above 12 can only be a day; a second component above
/// 12 can only be a day too. Returns `None` when every date is ambiguous or
/// the evidence contradicts itself.
pub fn detect_date_order<'a, I>(dates: I) -> Option<DateOrder>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut day_first = false;
    let mut month_first = false;

    for date in dates {
        let mut parts = date.split(['/', '.']).map(|p| p.parse::<u32>().ok());
        let (Some(Some(a)), Some(Some(b))) = (parts.next(), parts.next()) else {
            continue;
        };
        if a > 12 {
            day_first = true;
        }
        if b > 12 {
            month_first = true;
        }
    }

    match (day_first, month_first) {
        (true, false) => Some(DateOrder::DayFirst),
        (false, true) => Some(DateOrder::MonthFirst),
        _ => None,
    }
}

/// Normalizes the time part so chrono's `%p` can read it.
///
/// Handles the narrow no-break space newer exports put before AM/PM, dotted
/// `a.m.`/`p.m.`, lowercase markers, and a missing space.
pub fn normalize_time(time_str: &str) -> String {
    let compact: String = time_str
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let compact = compact.trim();

    let upper = compact.to_uppercase();
    for marker in ["AM", "PM"] {
        if let Some(clock) = upper.strip_suffix(marker) {
            return format!("{} {}", clock.trim_end(), marker);
        }
    }
    compact.to_string()
}

/// Parse timestamp from date and time strings.
pub fn parse_whatsapp_timestamp(
    date_str: &str,
    time_str: &str,
    format: DateFormat,
    order: DateOrder,
) -> Option<NaiveDateTime> {
    let datetime_str = format!("{}, {}", date_str, normalize_time(time_str));

    format
        .date_parse_formats(order)
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(&datetime_str, f).ok())
}

/// Splits an entry body into sender and text.
///
/// The sender ends at the first colon that has at least one character before
/// it and whitespace or the end of the body after it. A body without such a
/// colon has no sender.
///
/// ```
/// use chatlyze::parsing::whatsapp::split_sender;
///
/// assert_eq!(split_sender("Alice: see http://x.io"), (Some("Alice"), "see http://x.io"));
/// assert_eq!(split_sender("Bob added Carol"), (None, "Bob added Carol"));
/// assert_eq!(split_sender("Time is 10:30 now"), (None, "Time is 10:30 now"));
/// assert_eq!(split_sender("Alice:"), (Some("Alice"), ""));
/// ```
pub fn split_sender(body: &str) -> (Option<&str>, &str) {
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != ':' || i == 0 {
            continue;
        }
        match chars.peek() {
            Some(&(j, next)) if next.is_whitespace() => {
                return (Some(&body[..i]), &body[j + next.len_utf8()..]);
            }
            None => return (Some(&body[..i]), ""),
            Some(_) => {}
        }
    }
    (None, body)
}

/// Check if a text is a system notice even though a sender prefix is present.
///
/// iOS exports attribute some notices to the group name, e.g.
/// `[..] Family: Messages and calls are end-to-end encrypted.`
pub fn is_whatsapp_system_message(content: &str) -> bool {
    const SYSTEM_PHRASES: &[&str] = &[
        "messages and calls are end-to-end encrypted",
        "messages to this group are now secured with end-to-end encryption",
        "changed the subject from",
        "changed this group's icon",
        "changed the group description",
        "deleted this group's icon",
        "joined using this group's invite link",
        "your security code with",
        "turned on disappearing messages",
        "turned off disappearing messages",
        "you're now an admin",
        "created group \"",
        "created group “",
    ];

    let content_lower = content.trim_start_matches('\u{200e}').to_lowercase();
    SYSTEM_PHRASES
        .iter()
        .any(|phrase| content_lower.contains(phrase))
}

/// Detection result for format auto-detection.
struct FormatDetector {
    format: DateFormat,
    regex: Regex,
}

impl FormatDetector {
    fn new(format: DateFormat) -> Option<Self> {
        Some(Self {
            format,
            regex: Regex::new(format.pattern()).ok()?,
        })
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Auto-detect the prefix layout by analyzing sample lines.
///
/// Every layout is scored by the number of lines it matches; the highest
/// score wins and ties go to the earlier layout in [`DateFormat::all`].
/// Returns `None` if no layout matches any line.
pub fn detect_whatsapp_format(lines: &[&str]) -> Option<DateFormat> {
    let detectors: Vec<FormatDetector> = DateFormat::all()
        .iter()
        .filter_map(|&f| FormatDetector::new(f))
        .collect();

    let mut scores = vec![0usize; detectors.len()];

    for line in lines {
        for (i, detector) in detectors.iter().enumerate() {
            if detector.matches(line) {
                scores[i] += 1;
            }
        }
    }

    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(detectors[winner_idx].format)
}
