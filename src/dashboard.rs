//! Every view of one user selection, ready for rendering.
//!
//! A [`Dashboard`] holds one [`Panel`] per view. A panel is either
//! [`Panel::Ready`] with its table or [`Panel::NoData`] when the table came
//! out empty; the renderer decides what to show for the latter. Views that
//! are split by sentiment hold a [`SentimentPanels`] with one panel per
//! label.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::analysis::{
    ActivityCount, BusyUsers, ChatStats, DailyPoint, EmojiCount, Heatmap, MonthlyPoint,
    UserSelection, UserShare, WordCloud, WordCount, activity_heatmap, create_wordcloud,
    daily_timeline, day_activity_map, emoji_helper, fetch_stats, month_activity_map,
    monthly_timeline, most_busy_users, most_common_words, percentage_by_sentiment,
};
use crate::config::AnalysisConfig;
use crate::sentiment::Sentiment;

/// A table that can come out empty.
pub trait Table {
    fn has_rows(&self) -> bool;
}

impl<T> Table for Vec<T> {
    fn has_rows(&self) -> bool {
        !self.is_empty()
    }
}

impl Table for ChatStats {
    fn has_rows(&self) -> bool {
        self.messages > 0
    }
}

impl Table for Heatmap {
    fn has_rows(&self) -> bool {
        !self.is_empty()
    }
}

impl Table for WordCloud {
    fn has_rows(&self) -> bool {
        !self.is_empty()
    }
}

impl Table for BusyUsers {
    fn has_rows(&self) -> bool {
        !self.is_empty()
    }
}

/// One dashboard view.
///
/// Serialized as `{"status": "ready", "data": ...}` or
/// `{"status": "no_data"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    NoData,
}

impl<T: Table> Panel<T> {
    /// Wraps a table, turning an empty one into [`Panel::NoData`].
    pub fn from_table(table: T) -> Self {
        if table.has_rows() {
            Panel::Ready(table)
        } else {
            Panel::NoData
        }
    }
}

impl<T> Panel<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }

    /// Returns the table, if there is one.
    pub fn data(&self) -> Option<&T> {
        match self {
            Panel::Ready(table) => Some(table),
            Panel::NoData => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Panel::Ready(table) => Some(table),
            Panel::NoData => None,
        }
    }
}

/// The same view computed once per sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPanels<T> {
    pub positive: Panel<T>,
    pub neutral: Panel<T>,
    pub negative: Panel<T>,
}

impl<T: Table> SentimentPanels<T> {
    /// Computes the view for each label.
    pub fn build(mut view: impl FnMut(Sentiment) -> T) -> Self {
        Self {
            positive: Panel::from_table(view(Sentiment::Positive)),
            neutral: Panel::from_table(view(Sentiment::Neutral)),
            negative: Panel::from_table(view(Sentiment::Negative)),
        }
    }
}

impl<T> SentimentPanels<T> {
    pub fn get(&self, sentiment: Sentiment) -> &Panel<T> {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }
}

/// Every view for one user selection.
///
/// `busy_users` and `sentiment_contribution` describe the whole chat and
/// are only present for [`UserSelection::Overall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub selection: UserSelection,
    pub stats: Panel<ChatStats>,
    pub monthly_timeline: SentimentPanels<Vec<MonthlyPoint>>,
    pub daily_timeline: SentimentPanels<Vec<DailyPoint>>,
    pub busiest_days: Panel<Vec<ActivityCount>>,
    pub busiest_months: Panel<Vec<ActivityCount>>,
    pub heatmap: SentimentPanels<Heatmap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub busy_users: Option<Panel<BusyUsers>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sentiment_contribution: Option<SentimentPanels<Vec<UserShare>>>,
    pub wordcloud: SentimentPanels<WordCloud>,
    pub common_words: SentimentPanels<Vec<WordCount>>,
    pub emoji: Panel<Vec<EmojiCount>>,
}

impl Dashboard {
    /// Computes every view over `messages` for `selection`.
    pub fn build(messages: &[Message], selection: &UserSelection, config: &AnalysisConfig) -> Self {
        let overall = selection.is_overall().then(|| {
            (
                Panel::from_table(most_busy_users(messages, config.top_users)),
                SentimentPanels::build(|s| percentage_by_sentiment(messages, s)),
            )
        });
        let (busy_users, sentiment_contribution) = overall.unzip();

        Self {
            selection: selection.clone(),
            stats: Panel::from_table(fetch_stats(messages, selection, config)),
            monthly_timeline: SentimentPanels::build(|s| {
                monthly_timeline(messages, selection, Some(s))
            }),
            daily_timeline: SentimentPanels::build(|s| daily_timeline(messages, selection, Some(s))),
            busiest_days: Panel::from_table(day_activity_map(messages, selection)),
            busiest_months: Panel::from_table(month_activity_map(messages, selection)),
            heatmap: SentimentPanels::build(|s| activity_heatmap(messages, selection, Some(s))),
            busy_users,
            sentiment_contribution,
            wordcloud: SentimentPanels::build(|s| {
                create_wordcloud(messages, selection, Some(s), config)
            }),
            common_words: SentimentPanels::build(|s| {
                most_common_words(messages, selection, Some(s), config)
            }),
            emoji: Panel::from_table(emoji_helper(messages, selection)),
        }
    }

    /// Returns `true` if no view has data.
    pub fn is_empty(&self) -> bool {
        !self.stats.is_ready()
    }
}
