// ============================================================
// Layer 2 — Feature Pipeline
// ============================================================
// The pure part of the workflow. No files, no globals: callers
// hand in corpus text (or already split records) plus the
// stopword set and get results back.
//
//   annotate_corpus   text      → Vec<AnnotatedRecord>
//   build_features    records   → FeatureSet (matrix + labels)
//
// Alignment rule: a record whose chosen view has no marked
// target either aborts the run or is dropped from BOTH the
// matrix and the label vector, depending on the policy.

use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::FeatureSet,
    extractor::record_views,
    label::extract_label,
    loader::split_records,
    tokenizer::AnnotationTokenizer,
    vectorizer::vectorize,
};
use crate::domain::error::{CorpusError, CorpusResult};
use crate::domain::record::{AnnotatedRecord, SequenceView};
use crate::domain::stopwords::StopWords;

/// What to do with a record whose view lost its marked target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTargetPolicy {
    /// Fail the run, naming the record
    #[default]
    Abort,
    /// Drop the record from features and labels alike
    Skip,
}

/// Parse record number `index`: tokens, label and all six views.
pub fn annotate_record(index: usize, raw: &str, stop_words: &StopWords) -> CorpusResult<AnnotatedRecord> {
    let tokens = AnnotationTokenizer::new().tokenize(index, raw)?;
    let label  = extract_label(index, raw)?;
    let views  = record_views(&tokens, stop_words);

    Ok(AnnotatedRecord { index, label, tokens, views })
}

/// Annotate already split records, stopping at the first bad one.
pub fn annotate_records<S: AsRef<str>>(raw: &[S], stop_words: &StopWords) -> CorpusResult<Vec<AnnotatedRecord>> {
    raw.iter()
        .enumerate()
        .map(|(i, r)| annotate_record(i, r.as_ref(), stop_words))
        .collect()
}

/// Split `$$`-delimited corpus text and annotate every record.
pub fn annotate_corpus(text: &str, stop_words: &StopWords) -> CorpusResult<Vec<AnnotatedRecord>> {
    annotate_records(&split_records(text), stop_words)
}

/// Window, vectorize and label `records` using one sequence view.
pub fn build_features(
    records:            &[AnnotatedRecord],
    view:               SequenceView,
    margin:             usize,
    english_stop_words: bool,
    policy:             MissingTargetPolicy,
) -> CorpusResult<FeatureSet> {
    let (matrix, sources) = vectorize(
        margin,
        records.iter().map(|r| r.view(view)),
        english_stop_words,
    );

    if sources.len() != records.len() {
        let mut kept = sources.iter().peekable();
        for (position, record) in records.iter().enumerate() {
            if kept.peek() == Some(&&position) {
                kept.next();
                continue;
            }
            match policy {
                MissingTargetPolicy::Abort => {
                    return Err(CorpusError::MissingTarget { record: record.index, view });
                }
                MissingTargetPolicy::Skip => {
                    tracing::warn!(
                        "Skipping record {}: no marked target in the {} sequence",
                        record.index,
                        view
                    );
                }
            }
        }
    }

    let labels         = sources.iter().map(|&i| records[i].label).collect();
    let record_indices = sources.iter().map(|&i| records[i].index).collect();

    Ok(FeatureSet::new(matrix, labels, record_indices))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sense::Sense;
    use clap::ValueEnum;

    const CORPUS: &str = "\
[ It/PRP ] is/VBZ [ interest_5/NN ] ./. $$
the/DT [ high/JJ interest_6/NN rates/NNS ] ./. $$
[ an/DT interest*/NN ] in/IN [ her/PRP$ interest_1/NN ] ./. $$
";

    fn records(stop: &StopWords) -> Vec<AnnotatedRecord> {
        annotate_corpus(CORPUS, stop).unwrap()
    }

    #[test]
    fn test_annotate_scenario_record() {
        let recs = records(&StopWords::new());
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].label, Sense::Share);
        assert_eq!(recs[0].view(SequenceView::Words), ["It", "is", "interest_5", "."]);
        assert_eq!(recs[2].label, Sense::Attention);
    }

    #[test]
    fn test_labels_and_rows_align() {
        let recs = records(&StopWords::new());
        for &view in SequenceView::value_variants() {
            let set = build_features(&recs, view, 2, false, MissingTargetPolicy::Abort).unwrap();
            assert_eq!(set.len(), set.matrix().rows());
            assert_eq!(set.label_ids(), vec![5, 6, 1]);
            assert_eq!(set.record_indices(), &[0, 1, 2]);
        }
    }

    #[test]
    fn test_scenario_window_features() {
        let recs = records(&StopWords::new());
        let set = build_features(&recs[..1], SequenceView::Words, 1, false, MissingTargetPolicy::Abort)
            .unwrap();
        // window ["is", "."]: "." is not a term
        assert_eq!(set.matrix().vocabulary, vec!["is"]);
        assert_eq!(set.get(0), Some((vec![1], Sense::Share)));
    }

    #[test]
    fn test_stopwords_removed_before_windowing() {
        let stop: StopWords = ["is", "."].into_iter().collect();
        let recs = records(&stop);
        assert_eq!(recs[0].view(SequenceView::CategoriesNoStop), ["PRP", "interest_5/NN"]);

        let set = build_features(&recs[..1], SequenceView::CategoriesNoStop, 1, false, MissingTargetPolicy::Abort)
            .unwrap();
        assert_eq!(set.matrix().vocabulary, vec!["prp"]);
    }

    #[test]
    fn test_secondary_mention_does_not_anchor_window() {
        let recs = records(&StopWords::new());
        let set = build_features(&recs[2..], SequenceView::Words, 1, false, MissingTargetPolicy::Abort)
            .unwrap();
        // target is "interest_1": neighbours "her" and "."
        assert_eq!(set.matrix().vocabulary, vec!["her"]);
    }

    #[test]
    fn test_missing_target_aborts_with_record_index() {
        // the target word listed as a stopword disappears from stopword views
        let stop: StopWords = ["interest_6"].into_iter().collect();
        let recs = records(&stop);
        let err = build_features(&recs, SequenceView::CategoriesNoStop, 1, false, MissingTargetPolicy::Abort)
            .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MissingTarget { record: 1, view: SequenceView::CategoriesNoStop }
        ));
    }

    #[test]
    fn test_missing_target_skip_drops_label_too() {
        let stop: StopWords = ["interest_6"].into_iter().collect();
        let recs = records(&stop);
        let set = build_features(&recs, SequenceView::CategoriesNoStop, 1, false, MissingTargetPolicy::Skip)
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.matrix().rows(), 2);
        assert_eq!(set.label_ids(), vec![5, 1]);
        assert_eq!(set.record_indices(), &[0, 2]);
    }

    #[test]
    fn test_parse_error_names_record() {
        let err = annotate_corpus("a/DT interest_1/NN $$ broken interest_2/NN $$\n", &StopWords::new())
            .unwrap_err();
        assert_eq!(err.record(), Some(1));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let run = || {
            let recs = records(&StopWords::new());
            build_features(&recs, SequenceView::Categories, 3, true, MissingTargetPolicy::Abort).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_corpus_gives_empty_set() {
        let recs = annotate_corpus("", &StopWords::new()).unwrap();
        let set = build_features(&recs, SequenceView::Words, 3, false, MissingTargetPolicy::Abort).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.matrix().rows(), 0);
    }
}
