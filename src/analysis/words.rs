//! Word and emoji frequencies.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stats::contains_url;
use super::{Tally, UserSelection, select};
use crate::Message;
use crate::config::AnalysisConfig;
use crate::sentiment::Sentiment;

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}").expect("emoji pattern is valid")
});

/// Occurrences of one lower-cased word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word frequencies for a word cloud, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloud {
    pub words: Vec<WordCount>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns each word's frequency relative to the most frequent word.
    pub fn relative_weights(&self) -> Vec<(&str, f64)> {
        let Some(max) = self.words.first().map(|w| w.count as f64) else {
            return Vec::new();
        };
        self.words
            .iter()
            .map(|w| (w.word.as_str(), w.count as f64 / max))
            .collect()
    }
}

/// Occurrences of one emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Builds the word-cloud bag over every remaining word.
///
/// The bag is not truncated; a renderer decides how many words to draw.
pub fn create_wordcloud(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
    config: &AnalysisConfig,
) -> WordCloud {
    WordCloud {
        words: ranked_words(messages, selection, sentiment, config),
    }
}

/// Returns the `top_words` most frequent words.
pub fn most_common_words(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    let mut words = ranked_words(messages, selection, sentiment, config);
    words.truncate(config.top_words);
    words
}

/// Counts words outside notices and media messages.
///
/// Tokens are whitespace-separated and lower-cased; links and stop words
/// are dropped. Punctuation stays attached.
fn ranked_words(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    let placeholders = config.media_placeholders();
    let mut tally = Tally::new();

    for msg in select(messages, selection, sentiment)
        .filter(|m| !m.is_notification() && !m.is_media(&placeholders))
    {
        for token in msg.text().split_whitespace() {
            let word = token.to_lowercase();
            if contains_url(&word) || config.stop_words.contains(&word) {
                continue;
            }
            tally.add(word);
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Counts emoji characters, most frequent first.
///
/// Each pictographic character counts once; skin-tone modifiers and zero
/// width joiners are not counted on their own.
pub fn emoji_helper(messages: &[Message], selection: &UserSelection) -> Vec<EmojiCount> {
    let mut tally = Tally::new();
    for msg in select(messages, selection, None) {
        for m in EMOJI_RE.find_iter(msg.text()) {
            tally.add(m.as_str());
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
