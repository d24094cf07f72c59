//! VADER polarity scoring.
//!
//! Backed by the `vader_sentiment` crate, a port of the reference VADER
//! analyzer. It carries the full word lexicon and the emoji description
//! table, and applies the usual rules: boosters and dampeners, negation,
//! ALL-CAPS emphasis, the contrastive "but", and `!`/`?` emphasis.

use std::collections::HashMap;

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{PolarityScores, SentimentScorer};

/// Scorer using the VADER lexicon and rules.
///
/// ```rust
/// use chatlyze::sentiment::{Sentiment, SentimentScorer, VaderScorer};
///
/// let scorer = VaderScorer::new();
/// assert_eq!(scorer.sentiment("you are a genius"), Sentiment::Positive);
/// assert_eq!(scorer.sentiment("😢"), Sentiment::Negative);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        // The analyzer only borrows the crate's static lexicons.
        let analyzer = SentimentIntensityAnalyzer::new();
        from_map(&analyzer.polarity_scores(text))
    }
}

fn from_map(scores: &HashMap<&str, f64>) -> PolarityScores {
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
    PolarityScores {
        pos: get("pos"),
        neg: get("neg"),
        neu: get("neu"),
        compound: get("compound"),
    }
}
