// ============================================================
// Layer 3 — Stopword Set
// ============================================================
// Corpus-specific words that are dropped from category
// sequences. Membership is tested against the WORD part of a
// token only, never its tag. This set is unrelated to the
// built-in English list applied by the vectorizer.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated stopwords. Empty text gives an empty set.
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
