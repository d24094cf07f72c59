//! Per-message sentiment labels.
//!
//! Every record carries a [`Sentiment`]: positive (`+1`), neutral (`0`) or
//! negative (`-1`). The label comes from three polarity scores produced by a
//! [`SentimentScorer`]; [`Sentiment::classify`] picks the highest score with
//! the fixed priority positive, then negative, then neutral on ties.
//!
//! # Example
//!
//! ```rust
//! use chatlyze::sentiment::{Sentiment, SentimentScorer, VaderScorer};
//!
//! let scorer = VaderScorer::new();
//! let scores = scorer.polarity_scores("I love this, great job!");
//! assert_eq!(Sentiment::classify(&scores), Sentiment::Positive);
//! ```

mod vader;

pub use vader::VaderScorer;

use serde::{Deserialize, Serialize};

use crate::Message;

/// Discrete sentiment label of a message.
///
/// Serialized as its numeric value (`1`, `0`, `-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Sentiment {
    /// `+1`
    Positive,
    /// `0`
    #[default]
    Neutral,
    /// `-1`
    Negative,
}

impl Sentiment {
    /// Returns the numeric value of the label.
    pub fn value(self) -> i8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }

    /// Returns the label for a numeric value, if it is one of `-1`, `0`, `1`.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Sentiment::Positive),
            0 => Some(Sentiment::Neutral),
            -1 => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Returns all labels in display order.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Returns the lowercase name of the label.
    pub fn name(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Picks the label with the highest score.
    ///
    /// Ties resolve in the order positive, negative, neutral: positive wins
    /// ties with anything, negative wins ties with neutral. All-zero scores
    /// are therefore positive.
    pub fn classify(scores: &PolarityScores) -> Self {
        let PolarityScores { pos, neg, neu, .. } = *scores;
        if pos >= neg && pos >= neu {
            Sentiment::Positive
        } else if neg >= pos && neg >= neu {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl From<Sentiment> for i8 {
    fn from(sentiment: Sentiment) -> i8 {
        sentiment.value()
    }
}

impl TryFrom<i8> for Sentiment {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Sentiment::from_value(value)
            .ok_or_else(|| format!("Invalid sentiment value {value}. Expected one of: -1, 0, 1"))
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" | "pos" | "1" | "+1" => Ok(Sentiment::Positive),
            "neutral" | "neu" | "0" => Ok(Sentiment::Neutral),
            "negative" | "neg" | "-1" => Ok(Sentiment::Negative),
            _ => Err(format!(
                "Unknown sentiment: '{}'. Expected one of: positive, neutral, negative",
                s
            )),
        }
    }
}

/// Proportions of positive, negative and neutral content in a text.
///
/// `pos + neg + neu` is `1.0` (within rounding) for any text with at least one
/// token, and all zeros for empty text. `compound` is the normalized overall
/// valence in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

/// Produces polarity scores for a piece of text.
pub trait SentimentScorer {
    /// Scores a single message text.
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Scores and classifies a single message text.
    fn sentiment(&self, text: &str) -> Sentiment {
        Sentiment::classify(&self.polarity_scores(text))
    }
}

/// Assigns a sentiment label to every record.
pub fn annotate<S>(messages: Vec<Message>, scorer: &S) -> Vec<Message>
where
    S: SentimentScorer + ?Sized,
{
    messages
        .into_iter()
        .map(|msg| {
            let sentiment = scorer.sentiment(&msg.message);
            msg.with_sentiment(sentiment)
        })
        .collect()
}
