// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Summarises a corpus without vectorizing it:
//   - how many records carry each sense
//   - the longest record, in tokens
//
// Useful as a sanity check that a corpus file was split and
// labelled the way the annotators intended.

use anyhow::{Context, Result};

use crate::application::pipeline::annotate_records;
use crate::data::loader::CorpusFile;
use crate::domain::stopwords::StopWords;
use crate::domain::traits::CorpusSource;
use crate::infra::report::SenseDistribution;

pub struct StatsUseCase {
    corpus_path: String,
}

impl StatsUseCase {
    pub fn new(corpus_path: impl Into<String>) -> Self {
        Self { corpus_path: corpus_path.into() }
    }

    pub fn execute(&self) -> Result<SenseDistribution> {
        Self::summarise(&CorpusFile::new(&self.corpus_path))
    }

    pub fn summarise(corpus: &dyn CorpusSource) -> Result<SenseDistribution> {
        let raw = corpus.load_records().context("Loading corpus failed")?;
        let records = annotate_records(&raw, &StopWords::new())
            .context("Annotating corpus failed")?;

        let distribution = SenseDistribution::from_records(&records);
        tracing::info!(
            "{} records, longest has {} tokens",
            distribution.total(),
            distribution.longest_record
        );
        Ok(distribution)
    }
}
