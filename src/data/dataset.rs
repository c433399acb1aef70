use crate::data::vectorizer::FeatureMatrix;
use crate::domain::sense::Sense;

/// Feature rows with their gold labels, aligned row for row.
///
/// `record_indices[i]` is the corpus record behind row `i` of the
/// matrix and `labels[i]`. The three are only ever built together.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    matrix:         FeatureMatrix,
    labels:         Vec<Sense>,
    record_indices: Vec<usize>,
}

/// Shape summary printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSummary {
    pub rows:     usize,
    pub terms:    usize,
    pub non_zero: usize,
    pub labels:   usize,
    pub skipped:  usize,
}

impl FeatureSet {
    pub(crate) fn new(matrix: FeatureMatrix, labels: Vec<Sense>, record_indices: Vec<usize>) -> Self {
        debug_assert_eq!(matrix.rows(), labels.len());
        debug_assert_eq!(labels.len(), record_indices.len());
        Self { matrix, labels, record_indices }
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    pub fn labels(&self) -> &[Sense] {
        &self.labels
    }

    /// Labels as the plain integers a classifier expects.
    pub fn label_ids(&self) -> Vec<u8> {
        self.labels.iter().map(|s| s.id()).collect()
    }

    pub fn record_indices(&self) -> &[usize] {
        &self.record_indices
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dense feature row and label of sample `index`.
    pub fn get(&self, index: usize) -> Option<(Vec<usize>, Sense)> {
        let label = *self.labels.get(index)?;
        Some((self.matrix.row_dense(index), label))
    }

    pub fn summary(&self, total_records: usize) -> FeatureSummary {
        FeatureSummary {
            rows:     self.matrix.rows(),
            terms:    self.matrix.cols(),
            non_zero: self.matrix.nnz(),
            labels:   self.labels.len(),
            skipped:  total_records.saturating_sub(self.labels.len()),
        }
    }
}
