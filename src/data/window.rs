// ============================================================
// Layer 4 — Context Window Extractor
// ============================================================
// Cuts a fixed-radius "bag" of neighbours around the marked
// target occurrence of a sequence.
//
// Step 1: locate_target — the first token containing '_' that is
//         not a starred secondary mention.
// Step 2: take `margin` tokens on each side, target excluded.
//
// Example with margin=2:
//   Sequence: [A, B, C, interest_6, D, E, F]
//   Target:   index 3
//   Window:   [B, C, D, E]
//
// Near the edges the window is clipped, never padded:
//   Sequence: [interest_1, D, E, F]   margin=2
//   Window:   [D, E]
//
// Reference: Rust Book §8 (Slices)

use crate::domain::record::TargetPosition;
use crate::domain::token::{SECONDARY_MARKER, SENSE_DELIMITER};

/// A window cut from sequence number `sequence` of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    pub sequence: usize,
    pub tokens:   Vec<String>,
}

impl Bag {
    /// Tokens joined with single spaces, ready for vectorization.
    pub fn document(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Find the marked target occurrence in a sequence.
pub fn locate_target<S: AsRef<str>>(sequence: &[S]) -> TargetPosition {
    sequence
        .iter()
        .position(|token| {
            let token = token.as_ref();
            token.contains(SENSE_DELIMITER) && !token.contains(SECONDARY_MARKER)
        })
        .map_or(TargetPosition::NotFound, TargetPosition::Found)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    /// Tokens kept on each side of the target
    margin: usize,
}

impl ContextWindow {
    pub fn new(margin: usize) -> Self {
        Self { margin }
    }

    /// Slice the window around the target at `index`.
    pub fn around<S: AsRef<str>>(&self, sequence: &[S], index: usize) -> Vec<String> {
        let start = index.saturating_sub(self.margin);
        let end   = index
            .saturating_add(self.margin)
            .saturating_add(1)
            .min(sequence.len());

        sequence[start..index]
            .iter()
            .chain(&sequence[index + 1..end])
            .map(|s| s.as_ref().to_string())
            .collect()
    }

    /// Window of one sequence, or None when it has no marked target.
    pub fn extract<S: AsRef<str>>(&self, sequence: &[S]) -> Option<Vec<String>> {
        locate_target(sequence)
            .index()
            .map(|i| self.around(sequence, i))
    }

    /// Windows of a batch of sequences. Sequences without a target
    /// contribute no bag; each bag records which sequence it came from.
    pub fn bag_of_words<'a, I>(&self, sequences: I) -> Vec<Bag>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        sequences
            .into_iter()
            .enumerate()
            .filter_map(|(i, seq)| {
                let tokens = self.extract(seq);
                if tokens.is_none() {
                    tracing::debug!("Sequence {} has no marked target", i);
                }
                tokens.map(|tokens| Bag { sequence: i, tokens })
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_scenario_window() {
        let w = ContextWindow::new(1);
        let bag = w.extract(&seq("It is interest_5 .")).unwrap();
        assert_eq!(bag, vec!["is", "."]);
    }

    #[test]
    fn test_window_is_at_most_two_margins() {
        let s = seq("a b c d e interest_6 f g h i j");
        for margin in 0..8 {
            let bag = ContextWindow::new(margin).extract(&s).unwrap();
            assert!(bag.len() <= 2 * margin);
            assert!(!bag.iter().any(|t| t == "interest_6"));
        }
        assert_eq!(ContextWindow::new(2).extract(&s).unwrap(), vec!["d", "e", "f", "g"]);
    }

    #[test]
    fn test_target_at_start_is_one_sided() {
        let bag = ContextWindow::new(3).extract(&seq("interest_1 a b c d")).unwrap();
        assert_eq!(bag, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_target_at_end_is_one_sided() {
        let bag = ContextWindow::new(3).extract(&seq("a b c d interest_4")).unwrap();
        assert_eq!(bag, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_margin_larger_than_sequence() {
        let bag = ContextWindow::new(100).extract(&seq("a interest_2 b")).unwrap();
        assert_eq!(bag, vec!["a", "b"]);
    }

    #[test]
    fn test_starred_mention_is_ignored() {
        let s = seq("x interest_1* y interest_3 z");
        assert_eq!(locate_target(&s), TargetPosition::Found(3));
        assert_eq!(ContextWindow::new(1).extract(&s).unwrap(), vec!["y", "z"]);
    }

    #[test]
    fn test_first_marker_wins() {
        let s = seq("interest_5 a interest_6 b");
        assert_eq!(locate_target(&s), TargetPosition::Found(0));
    }

    #[test]
    fn test_bag_of_words_tracks_source_sequence() {
        let batch = vec![seq("a interest_1 b"), seq("no target here"), seq("c interest_2")];
        let bags  = ContextWindow::new(1).bag_of_words(batch.iter().map(Vec::as_slice));

        assert_eq!(bags.len(), 2);
        assert_eq!(bags[0].sequence, 0);
        assert_eq!(bags[1].sequence, 2);
        assert_eq!(bags[1].document(), "c");
    }
}
