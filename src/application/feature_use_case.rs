// ============================================================
// Layer 2 — FeatureUseCase
// ============================================================
// Orchestrates a full feature-extraction run in order:
//
//   Step 1: Load corpus records       (Layer 4 - data)
//   Step 2: Load corpus stopwords     (Layer 4 - data)
//   Step 3: Annotate every record     (Layer 2 - pipeline)
//   Step 4: Window + vectorize + label (Layer 2 - pipeline)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::pipeline::{annotate_records, build_features, MissingTargetPolicy};
use crate::data::{
    dataset::FeatureSet,
    loader::{CorpusFile, StopwordFile},
};
use crate::domain::record::SequenceView;
use crate::domain::traits::{CorpusSource, StopwordSource};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Everything a run depends on. Serialisable so a run can be
// described by a JSON file instead of command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub corpus_path:        String,
    pub stopwords_path:     String,
    pub margin:             usize,
    pub view:               SequenceView,
    pub english_stop_words: bool,
    pub on_missing_target:  MissingTargetPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            corpus_path:        "data/corpus.txt".to_string(),
            stopwords_path:     "data/stopwords.txt".to_string(),
            margin:             3,
            view:               SequenceView::Words,
            english_stop_words: false,
            on_missing_target:  MissingTargetPolicy::Abort,
        }
    }
}

/// Result of a run: the aligned features plus the corpus size they came from.
#[derive(Debug, Clone)]
pub struct FeatureRun {
    pub features:      FeatureSet,
    pub total_records: usize,
}

// ─── FeatureUseCase ───────────────────────────────────────────────────────────
pub struct FeatureUseCase {
    config: PipelineConfig,
}

impl FeatureUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<FeatureRun> {
        self.execute_with(
            &CorpusFile::new(&self.config.corpus_path),
            &StopwordFile::new(&self.config.stopwords_path),
        )
    }

    /// Run against any corpus/stopword source.
    pub fn execute_with(
        &self,
        corpus: &dyn CorpusSource,
        stopwords: &dyn StopwordSource,
    ) -> Result<FeatureRun> {
        let cfg = &self.config;

        // ── Step 1 + 2: Inputs ────────────────────────────────────────────────
        let raw = corpus.load_records().context("Loading corpus failed")?;
        let stop_words = stopwords
            .load_stopwords()
            .context("Loading stopwords failed")?;

        // ── Step 3: Tokens, labels and views per record ───────────────────────
        let records = annotate_records(&raw, &stop_words).context("Annotating corpus failed")?;
        tracing::info!("Annotated {} records", records.len());

        // ── Step 4: Features ──────────────────────────────────────────────────
        tracing::info!(
            "Vectorizing '{}' windows (margin {}, English stopwords {})",
            cfg.view,
            cfg.margin,
            if cfg.english_stop_words { "on" } else { "off" }
        );
        let features = build_features(
            &records,
            cfg.view,
            cfg.margin,
            cfg.english_stop_words,
            cfg.on_missing_target,
        )
        .context("Building features failed")?;

        Ok(FeatureRun {
            features,
            total_records: records.len(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::CorpusText;
    use crate::domain::error::CorpusResult;
    use crate::domain::stopwords::StopWords;

    struct Fixed(&'static str);

    impl StopwordSource for Fixed {
        fn load_stopwords(&self) -> CorpusResult<StopWords> {
            Ok(StopWords::parse(self.0))
        }
    }

    #[test]
    fn test_runs_against_in_memory_sources() {
        let config = PipelineConfig {
            margin: 1,
            view: SequenceView::CategoriesNoStopNoPunct,
            ..PipelineConfig::default()
        };
        let corpus = CorpusText::new("It/PRP is/VBZ interest_5/NN ./. $$\nrate/NN interest_6/NN on/IN $$\n");

        let run = FeatureUseCase::new(config)
            .execute_with(&corpus, &Fixed("is"))
            .unwrap();

        assert_eq!(run.total_records, 2);
        assert_eq!(run.features.label_ids(), vec![5, 6]);
        assert_eq!(run.features.matrix().vocabulary, vec!["in", "nn", "prp"]);
    }

    #[test]
    fn test_error_chain_names_record() {
        let corpus = CorpusText::new("ok/JJ interest_2/NN $$ no_marker/NN $$ bad/JJ interest_3/NN $$\n");
        let err = FeatureUseCase::new(PipelineConfig::default())
            .execute_with(&corpus, &Fixed(""))
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Annotating corpus failed"));
        assert!(message.contains("record 1"));
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let cfg: PipelineConfig = serde_json::from_str(r#"{ "margin": 5, "view": "categories" }"#).unwrap();
        assert_eq!(cfg.margin, 5);
        assert_eq!(cfg.view, SequenceView::Categories);
        assert_eq!(cfg.on_missing_target, MissingTargetPolicy::Abort);
    }
}
