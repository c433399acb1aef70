// ============================================================
// Layer 3 — Corpus Errors
// ============================================================
// Typed failures raised by the data pipeline. Every variant that
// concerns a single record carries its index so a failed run
// points straight at the offending entry of the corpus file.
//
// The application and CLI layers wrap these in anyhow with
// extra context; this layer stays framework-free.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::record::SequenceView;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("record {record}: unit '{unit}' has no '/' separating word and tag")]
    Parse { record: usize, unit: String },

    #[error("record {record}: no disambiguation marker (expected 'interest_<sense>')")]
    MissingLabel { record: usize },

    #[error("record {record}: sense marker is followed by '{found}', expected a digit 1-6")]
    InvalidSense { record: usize, found: String },

    #[error("record {record}: marked target not found in the {view} sequence")]
    MissingTarget { record: usize, view: SequenceView },

    #[error("cannot read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    /// Index of the record this error refers to, if any.
    pub fn record(&self) -> Option<usize> {
        match self {
            CorpusError::Parse { record, .. }
            | CorpusError::MissingLabel { record }
            | CorpusError::InvalidSense { record, .. }
            | CorpusError::MissingTarget { record, .. } => Some(*record),
            CorpusError::Io { .. } => None,
        }
    }
}

pub type CorpusResult<T> = Result<T, CorpusError>;
