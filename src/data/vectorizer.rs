// ============================================================
// Layer 4 — Count Vectorizer
// ============================================================
// Turns window documents into a sparse term-count matrix.
//
//   windows  ["is ."]  ["the rate rose"]  ...
//       │  analyze: lowercase, terms = \b\w\w+\b
//       ▼
//   ["is"]  ["the", "rate", "rose"]
//       │  fit: vocabulary = sorted distinct terms
//       │       (minus English stopwords when enabled)
//       ▼
//   CSR matrix, one row per window, one column per term
//
// One-character tokens and bare punctuation never become terms,
// which matches the usual count-vectorizer token pattern.
//
// Reference: sprs crate documentation (TriMat → CsMat)

use regex::Regex;
use sprs::{CsMat, TriMat};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::data::english_stop_words::is_english_stop_word;
use crate::data::window::ContextWindow;

/// Two or more word characters between word boundaries.
static TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"));

/// Sparse count matrix plus the term behind each column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub vocabulary: Vec<String>,
    pub counts:     CsMat<usize>,
}

impl FeatureMatrix {
    pub fn rows(&self) -> usize {
        self.counts.rows()
    }

    pub fn cols(&self) -> usize {
        self.counts.cols()
    }

    pub fn nnz(&self) -> usize {
        self.counts.nnz()
    }

    /// Column of `term`, if it made it into the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Count of `term` in row `row` (0 when absent).
    pub fn count(&self, row: usize, term: &str) -> usize {
        self.term_index(term)
            .and_then(|col| self.counts.get(row, col).copied())
            .unwrap_or(0)
    }

    /// Row `row` expanded to a dense vector.
    pub fn row_dense(&self, row: usize) -> Vec<usize> {
        let mut dense = vec![0; self.cols()];
        if let Some(view) = self.counts.outer_view(row) {
            for (col, &value) in view.iter() {
                dense[col] = value;
            }
        }
        dense
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountVectorizer {
    /// Drop built-in English stopwords from the vocabulary
    english_stop_words: bool,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_english_stop_words(mut self, enabled: bool) -> Self {
        self.english_stop_words = enabled;
        self
    }

    /// Split a document into terms, lowercased.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        TERM_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !(self.english_stop_words && is_english_stop_word(t)))
            .collect()
    }

    /// Build the vocabulary from `documents` and count every term.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> FeatureMatrix {
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.analyze(d.as_ref()))
            .collect();

        // BTreeMap keeps the vocabulary sorted, so columns are deterministic
        let mut columns: BTreeMap<&str, usize> = analyzed
            .iter()
            .flatten()
            .map(|t| (t.as_str(), 0))
            .collect();
        for (col, slot) in columns.values_mut().enumerate() {
            *slot = col;
        }

        let mut triplets = TriMat::new((documents.len(), columns.len()));
        for (row, terms) in analyzed.iter().enumerate() {
            let mut row_counts: BTreeMap<usize, usize> = BTreeMap::new();
            for term in terms {
                *row_counts.entry(columns[term.as_str()]).or_insert(0) += 1;
            }
            for (col, count) in row_counts {
                triplets.add_triplet(row, col, count);
            }
        }

        let vocabulary: Vec<String> = columns.keys().map(|t| t.to_string()).collect();
        tracing::debug!(
            "Vectorized {} documents over {} terms",
            documents.len(),
            vocabulary.len()
        );

        FeatureMatrix {
            vocabulary,
            counts: triplets.to_csr(),
        }
    }
}

/// Window every sequence with `margin`, join each window with spaces and
/// count terms. Sequences without a marked target are skipped; the second
/// element lists, per matrix row, the index of the sequence it came from.
pub fn vectorize<'a, I>(margin: usize, sequences: I, english_stop_words: bool) -> (FeatureMatrix, Vec<usize>)
where
    I: IntoIterator<Item = &'a [String]>,
{
    let bags = ContextWindow::new(margin).bag_of_words(sequences);
    let documents: Vec<String> = bags.iter().map(|b| b.document()).collect();
    let sources: Vec<usize> = bags.iter().map(|b| b.sequence).collect();

    let matrix = CountVectorizer::new()
        .with_english_stop_words(english_stop_words)
        .fit_transform(&documents);

    (matrix, sources)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_lowercases_and_drops_short_tokens() {
        let v = CountVectorizer::new();
        assert_eq!(v.analyze("The rate , a NN ."), vec!["the", "rate", "nn"]);
    }

    #[test]
    fn test_counts_and_sorted_vocabulary() {
        let docs = vec!["rate rate rose", "the rate"];
        let m = CountVectorizer::new().fit_transform(&docs);

        assert_eq!(m.vocabulary, vec!["rate", "rose", "the"]);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.row_dense(0), vec![2, 1, 0]);
        assert_eq!(m.row_dense(1), vec![1, 0, 1]);
        assert_eq!(m.count(1, "the"), 1);
        assert_eq!(m.count(1, "missing"), 0);
    }

    #[test]
    fn test_english_stop_words_leave_vocabulary() {
        let docs = vec!["the rate is high", "of the bank"];
        let m = CountVectorizer::new()
            .with_english_stop_words(true)
            .fit_transform(&docs);
        assert_eq!(m.vocabulary, vec!["bank", "high", "rate"]);
    }

    #[test]
    fn test_empty_window_gives_empty_row() {
        let docs = vec!["", "rate"];
        let m = CountVectorizer::new().fit_transform(&docs);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.row_dense(0), vec![0]);
    }

    #[test]
    fn test_no_documents() {
        let docs: Vec<String> = Vec::new();
        let m = CountVectorizer::new().fit_transform(&docs);
        assert_eq!((m.rows(), m.cols(), m.nnz()), (0, 0, 0));
    }

    #[test]
    fn test_vectorize_windows() {
        let seqs: Vec<Vec<String>> = vec![
            vec!["It".into(), "is".into(), "interest_5".into(), ".".into()],
            vec!["high".into(), "interest_6".into(), "rates".into()],
        ];
        let (m, sources) = vectorize(1, seqs.iter().map(Vec::as_slice), false);

        assert_eq!(sources, vec![0, 1]);
        assert_eq!(m.vocabulary, vec!["high", "is", "rates"]);
        assert_eq!(m.row_dense(0), vec![0, 1, 0]);
        assert_eq!(m.row_dense(1), vec![1, 0, 1]);
    }
}
