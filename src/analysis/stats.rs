//! Top-line counts: messages, words, media and links.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{UserSelection, select};
use crate::Message;
use crate::config::AnalysisConfig;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("URL pattern is valid")
});

/// Headline numbers for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Records in the selection
    pub messages: usize,
    /// Whitespace-separated tokens over all texts
    pub words: usize,
    /// Records whose text is a media placeholder
    pub media: usize,
    /// Records containing at least one URL
    pub links: usize,
}

/// Counts messages, words, media placeholders and messages with links.
///
/// Every record of the selection counts, notices and media included.
pub fn fetch_stats(
    messages: &[Message],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> ChatStats {
    let placeholders = config.media_placeholders();
    select(messages, selection, None).fold(ChatStats::default(), |mut stats, msg| {
        stats.messages += 1;
        stats.words += msg.text().split_whitespace().count();
        if msg.is_media(&placeholders) {
            stats.media += 1;
        }
        if contains_url(msg.text()) {
            stats.links += 1;
        }
        stats
    })
}

/// Returns `true` if the text contains an `http(s)://` or `www.` link.
pub fn contains_url(text: &str) -> bool {
    URL_RE.is_match(text)
}
