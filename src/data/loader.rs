// ============================================================
// Layer 4 — Corpus and Stopword Loaders
// ============================================================
// Reads the two input files of the pipeline.
//
// Corpus file layout:
//   <record 0> $$ <record 1> $$ ... $$ <record N-1> $$\n
//
// Splitting on "$$" leaves one extra segment after the final
// delimiter (normally just the trailing newline). That segment
// is discarded. If it contains anything other than whitespace a
// warning is logged, since it would be a real record lost.
//
// Stopword file layout: whitespace-separated words.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::{CorpusError, CorpusResult};
use crate::domain::stopwords::StopWords;
use crate::domain::traits::{CorpusSource, StopwordSource};

/// Literal separator between records in the corpus file.
pub const RECORD_DELIMITER: &str = "$$";

/// Split corpus text into raw records, dropping the segment after the last `$$`.
pub fn split_records(text: &str) -> Vec<String> {
    let mut segments: Vec<&str> = text.split(RECORD_DELIMITER).collect();

    // split() always yields at least one segment
    if let Some(trailing) = segments.pop() {
        if !trailing.trim().is_empty() {
            tracing::warn!(
                "Discarding {} chars after the final '{}' delimiter",
                trailing.trim().len(),
                RECORD_DELIMITER
            );
        }
    }

    segments.into_iter().map(str::to_string).collect()
}

fn read_file(path: &Path) -> CorpusResult<String> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ─── CorpusFile ───────────────────────────────────────────────────────────────
/// Corpus records read from a `$$`-delimited file on disk.
pub struct CorpusFile {
    path: PathBuf,
}

impl CorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for CorpusFile {
    fn load_records(&self) -> CorpusResult<Vec<String>> {
        let text    = read_file(&self.path)?;
        let records = split_records(&text);
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

// ─── CorpusText ───────────────────────────────────────────────────────────────
/// Corpus records held in memory, for drivers that already have the text.
pub struct CorpusText {
    text: String,
}

impl CorpusText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CorpusSource for CorpusText {
    fn load_records(&self) -> CorpusResult<Vec<String>> {
        Ok(split_records(&self.text))
    }
}

// ─── StopwordFile ─────────────────────────────────────────────────────────────
/// Whitespace-separated stopwords read from a file on disk.
pub struct StopwordFile {
    path: PathBuf,
}

impl StopwordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StopwordSource for StopwordFile {
    fn load_stopwords(&self) -> CorpusResult<StopWords> {
        let stop_words = StopWords::parse(&read_file(&self.path)?);
        tracing::debug!(
            "Loaded {} stopwords from '{}'",
            stop_words.len(),
            self.path.display()
        );
        Ok(stop_words)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_trailing_segment_is_dropped() {
        let records = split_records("a/DT $$ b/DT $$\n");
        assert_eq!(records, vec!["a/DT ", " b/DT "]);
    }

    #[test]
    fn test_unterminated_last_record_is_discarded() {
        let records = split_records("a/DT interest_1/NN $$ b/DT interest_2/NN");
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("interest_1"));
    }

    #[test]
    fn test_corpus_file_without_final_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "It/PRP interest_5/NN $$\nrate/NN interest_6/NN\n").unwrap();

        let records = CorpusFile::new(file.path()).load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].contains("interest_6"));
    }

    #[test]
    fn test_text_without_delimiter_has_no_records() {
        // everything sits in the discarded trailing segment
        assert!(split_records("a/DT interest_1/NN").is_empty());
        assert!(split_records("").is_empty());
    }

    #[test]
    fn test_corpus_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "It/PRP interest_5/NN $$\nrate/NN interest_6/NN $$\n").unwrap();

        let records = CorpusFile::new(file.path()).load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].contains("interest_6"));
    }

    #[test]
    fn test_empty_stopword_file_is_empty_set() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let stop = StopwordFile::new(file.path()).load_stopwords().unwrap();
        assert!(stop.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CorpusFile::new("/definitely/not/here.txt")
            .load_records()
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
