// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline only needs two things from the outside world:
// the raw records of the corpus and the corpus stopword list.
// Where they come from (a file, an in-memory string in a test)
// is hidden behind these traits.
//
// Implementations:
//   - CorpusFile    → records from a `$$`-delimited text file
//   - StopwordFile  → whitespace-separated stopwords from a file
//   - CorpusText    → records from an in-memory string
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::CorpusResult;
use crate::domain::stopwords::StopWords;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the raw, still-annotated records of a corpus.
pub trait CorpusSource {
    /// Raw record strings in corpus order.
    fn load_records(&self) -> CorpusResult<Vec<String>>;
}

// ─── StopwordSource ───────────────────────────────────────────────────────────
/// Anything that can produce the corpus-specific stopword set.
pub trait StopwordSource {
    fn load_stopwords(&self) -> CorpusResult<StopWords>;
}
