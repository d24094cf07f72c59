//! Descriptive statistics over parsed records.
//!
//! Every function here is pure: it borrows the records, applies a
//! [`UserSelection`] (and, where it makes sense, a sentiment filter) and
//! returns a plain table. A selection without rows yields an empty table,
//! never an error.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`fetch_stats`] | message, word, media and link counts |
//! | [`monthly_timeline`], [`daily_timeline`] | messages per month / day |
//! | [`day_activity_map`], [`month_activity_map`] | busiest weekdays / months |
//! | [`activity_heatmap`] | weekday x hour counts |
//! | [`most_busy_users`], [`percentage_by_sentiment`] | user rankings and shares |
//! | [`create_wordcloud`], [`most_common_words`] | word frequencies |
//! | [`emoji_helper`] | emoji frequencies |
//!
//! # Example
//!
//! ```rust
//! use chatlyze::analysis::{day_activity_map, fetch_stats};
//! use chatlyze::config::AnalysisConfig;
//! use chatlyze::core::filter::UserSelection;
//! use chatlyze::parsers::WhatsAppParser;
//!
//! let text = "15/01/2024, 10:30 - Alice: Hi all\n\
//!             15/01/2024, 10:31 - Alice: http://example.com\n\
//!             15/01/2024, 10:32 - X added Y\n";
//! let messages = WhatsAppParser::new().parse_str(text)?;
//! let alice = UserSelection::from("Alice");
//!
//! let stats = fetch_stats(&messages, &alice, &AnalysisConfig::default());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.links, 1);
//!
//! let days = day_activity_map(&messages, &UserSelection::Overall);
//! assert_eq!(days[0].label, "Monday");
//! assert_eq!(days[0].count, 3);
//! # Ok::<(), chatlyze::ChatlyzeError>(())
//! ```

pub mod activity;
pub mod stats;
pub mod stop_words;
pub mod timeline;
pub mod users;
pub mod words;

use std::collections::HashMap;
use std::hash::Hash;

pub use activity::{ActivityCount, Heatmap, activity_heatmap, day_activity_map, month_activity_map};
pub use stats::{ChatStats, fetch_stats};
pub use stop_words::StopWords;
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserCount, UserShare, most_busy_users, percentage_by_sentiment, user_list};
pub use words::{EmojiCount, WordCloud, WordCount, create_wordcloud, emoji_helper, most_common_words};

pub use crate::core::filter::UserSelection;

use crate::Message;
use crate::sentiment::Sentiment;

/// Records of the selection, optionally narrowed to one sentiment.
pub(crate) fn select<'a>(
    messages: &'a [Message],
    selection: &'a UserSelection,
    sentiment: Option<Sentiment>,
) -> impl Iterator<Item = &'a Message> {
    messages
        .iter()
        .filter(move |m| selection.matches(m) && sentiment.is_none_or(|s| m.sentiment == s))
}

/// Occurrence counter that remembers first-seen order.
///
/// Ranking sorts by count descending and keeps first-seen order for ties.
pub(crate) struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub(crate) fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

/// Rounds to two decimals.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
