// ============================================================
// Layer 4 — Annotation Tokenizer
// ============================================================
// Turns one raw corpus record into an ordered Vec<Token>.
//
//   raw record
//       │  Preprocessor::units  (strip "[ ] =", split whitespace)
//       ▼
//   ["It/PRP", "is/VBZ", "interest_5/NN", "./."]
//       │  Token::split_unit    (first '/')
//       ▼
//   [(It, PRP), (is, VBZ), (interest_5, NN), (., .)]
//
// A unit without any '/' cannot be split and fails the record.
//
// Reference: Rust Book §9 (Result and the ? operator)

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::{CorpusError, CorpusResult};
use crate::domain::token::Token;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationTokenizer {
    preprocessor: Preprocessor,
}

impl AnnotationTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize record number `record` of the corpus.
    pub fn tokenize(&self, record: usize, raw: &str) -> CorpusResult<Vec<Token>> {
        self.preprocessor
            .units(raw)
            .into_iter()
            .map(|unit| {
                Token::split_unit(&unit).ok_or(CorpusError::Parse { record, unit })
            })
            .collect()
    }
}
