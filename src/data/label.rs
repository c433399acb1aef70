// ============================================================
// Layer 4 — Label Extractor
// ============================================================
// Reads the gold sense id straight from the raw record:
//
//   "... the/DT interest_6/NN rate/NN ..."
//                       ^ first '_' → next char '6' → Sense::Money
//
// Underscores inside a starred secondary mention (e.g.
// "interest_1*/NN") are skipped; the first underscore of any
// other unit decides the label.

use crate::domain::error::{CorpusError, CorpusResult};
use crate::domain::sense::Sense;
use crate::domain::token::{SECONDARY_MARKER, SENSE_DELIMITER};

/// Extract the sense of the marked occurrence in record number `record`.
pub fn extract_label(record: usize, raw: &str) -> CorpusResult<Sense> {
    let marker = raw
        .split_whitespace()
        .filter(|unit| !unit.contains(SECONDARY_MARKER))
        .find_map(|unit| unit.split_once(SENSE_DELIMITER).map(|(_, rest)| rest))
        .ok_or(CorpusError::MissingLabel { record })?;

    let invalid = || CorpusError::InvalidSense {
        record,
        found: marker.chars().next().map(String::from).unwrap_or_default(),
    };

    let digit = marker
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| invalid())?;

    // to_digit(10) is at most 9, so the cast cannot truncate
    Sense::try_from(digit as u8).map_err(|_| invalid())
}
