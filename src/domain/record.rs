// ============================================================
// Layer 3 — Annotated Record
// ============================================================
// Everything derived from ONE corpus record lives in one struct:
//
//   AnnotatedRecord
//     ├── index   → position in the corpus file (0-based)
//     ├── label   → gold sense of the marked occurrence
//     ├── tokens  → (word, tag) pairs in reading order
//     └── views   → the six sequence variants used for windowing
//
// Features and labels are produced from the same struct, so a
// record is either kept with both or dropped with both.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::sense::Sense;
use crate::domain::token::Token;

/// Which sequence variant a window is extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum SequenceView {
    /// Word part of every token
    Words,
    /// Word part, punctuation tokens dropped
    WordsNoPunct,
    /// Tag of every token (target unit kept whole)
    Categories,
    /// Tags, punctuation tokens dropped
    CategoriesNoPunct,
    /// Tags, stopword tokens dropped
    CategoriesNoStop,
    /// Tags, stopword and punctuation tokens dropped
    CategoriesNoStopNoPunct,
}

impl fmt::Display for SequenceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None        => write!(f, "{self:?}"),
        }
    }
}

/// The six sequence variants of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordViews {
    pub words:                       Vec<String>,
    pub words_no_punct:              Vec<String>,
    pub categories:                  Vec<String>,
    pub categories_no_punct:         Vec<String>,
    pub categories_no_stop:          Vec<String>,
    pub categories_no_stop_no_punct: Vec<String>,
}

impl RecordViews {
    pub fn get(&self, view: SequenceView) -> &[String] {
        match view {
            SequenceView::Words                   => &self.words,
            SequenceView::WordsNoPunct            => &self.words_no_punct,
            SequenceView::Categories              => &self.categories,
            SequenceView::CategoriesNoPunct       => &self.categories_no_punct,
            SequenceView::CategoriesNoStop        => &self.categories_no_stop,
            SequenceView::CategoriesNoStopNoPunct => &self.categories_no_stop_no_punct,
        }
    }
}

/// One fully parsed corpus entry with its label and all derived views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub index:  usize,
    pub label:  Sense,
    pub tokens: Vec<Token>,
    pub views:  RecordViews,
}

impl AnnotatedRecord {
    pub fn view(&self, view: SequenceView) -> &[String] {
        self.views.get(view)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Result of scanning a sequence for the marked target occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPosition {
    Found(usize),
    NotFound,
}

impl TargetPosition {
    pub fn index(self) -> Option<usize> {
        match self {
            TargetPosition::Found(i) => Some(i),
            TargetPosition::NotFound => None,
        }
    }
}
