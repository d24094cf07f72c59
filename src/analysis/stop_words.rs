//! Stop-word set used by the word tables.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUNDLED_STOP_WORDS: &str = include_str!("../../data/stop_words.txt");

/// Lower-cased words excluded from word clouds and common-word tables.
///
/// Defaults to the bundled English + Hinglish list. Serialized as a sorted
/// list of words.
///
/// # Example
///
/// ```
/// use chatlyze::analysis::StopWords;
///
/// let stop = StopWords::default().extend(["lol"]);
/// assert!(stop.contains("the"));
/// assert!(stop.contains("LOL"));
/// assert!(!stop.contains("pizza"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Returns the bundled list.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_STOP_WORDS)
    }

    /// Returns an empty set.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Parses a newline-separated list.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Loads a newline-separated list from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    /// Adds words to the set.
    #[must_use]
    pub fn extend<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Returns `true` if the word (in any case) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::bundled()
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        Self::empty().extend(words)
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop: StopWords) -> Vec<String> {
        let mut words: Vec<String> = stop.words.into_iter().collect();
        words.sort();
        words
    }
}
