// ============================================================
// Layer 4 — Category Extractor
// ============================================================
// Derives the string sequences that windows are cut from.
//
// Two modes:
//
//   word mode      → the word part of every token
//                    It  is  interest_5  .
//
//   category mode  → the tag of every token, except the scored
//                    target which keeps its whole unit so the
//                    '_' marker survives for window extraction
//                    PRP VBZ interest_5/NN .
//
// Filters:
//   - punctuation: drop tokens whose word is a bare punctuation
//     symbol (both modes)
//   - stopwords:   drop tokens whose word is in the corpus
//     stopword set (category mode only)
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::record::RecordViews;
use crate::domain::stopwords::StopWords;
use crate::domain::token::Token;

/// Word parts treated as pure punctuation.
pub const PUNCTUATION: &[&str] = &[
    "'", ";", ":", ".", ",", "!", "?", ">", "<", "}", "{", "(", ")", "``", "''",
];

pub fn is_punctuation(word: &str) -> bool {
    PUNCTUATION.contains(&word)
}

/// Filter settings for one extraction pass.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions<'a> {
    /// Words to drop (category mode). None means no stopword filtering.
    pub stop_words: Option<&'a StopWords>,

    /// Keep punctuation tokens. Defaults to true.
    pub include_punctuation: bool,
}

impl Default for ExtractOptions<'_> {
    fn default() -> Self {
        Self {
            stop_words:          None,
            include_punctuation: true,
        }
    }
}

impl<'a> ExtractOptions<'a> {
    pub fn with_stop_words(mut self, stop_words: &'a StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    pub fn without_punctuation(mut self) -> Self {
        self.include_punctuation = false;
        self
    }

    fn keeps(&self, token: &Token) -> bool {
        if !self.include_punctuation && is_punctuation(&token.word) {
            return false;
        }
        !self.stop_words.is_some_and(|s| s.contains(&token.word))
    }
}

/// Word mode. Stopwords are not applied here.
pub fn words(tokens: &[Token], include_punctuation: bool) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| include_punctuation || !is_punctuation(&t.word))
        .map(|t| t.word.clone())
        .collect()
}

/// Category mode.
pub fn categories(tokens: &[Token], options: ExtractOptions<'_>) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| options.keeps(t))
        .map(|t| {
            if t.is_scored_target() {
                t.unit()
            } else {
                t.tag.clone()
            }
        })
        .collect()
}

/// All six sequence variants of one tokenized record.
pub fn record_views(tokens: &[Token], stop_words: &StopWords) -> RecordViews {
    let plain   = ExtractOptions::default();
    let no_stop = plain.with_stop_words(stop_words);

    RecordViews {
        words:                       words(tokens, true),
        words_no_punct:              words(tokens, false),
        categories:                  categories(tokens, plain),
        categories_no_punct:         categories(tokens, plain.without_punctuation()),
        categories_no_stop:          categories(tokens, no_stop),
        categories_no_stop_no_punct: categories(tokens, no_stop.without_punctuation()),
    }
}
