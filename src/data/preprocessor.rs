// ============================================================
// Layer 4 — Record Preprocessor
// ============================================================
// Cleans one raw corpus record before tokenisation.
//
// The annotated corpus wraps noun phrases in brackets and
// separates sentences with lines of '=' characters:
//
//   [ the/DT interest_6/NN rate/NN ]  ./.
//   ======================================
//
// None of these characters carry meaning for windowing, so they
// are deleted outright (not replaced with spaces). A unit such as
// "[interest_5/NN]" therefore becomes "interest_5/NN".
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use regex::Regex;
use std::sync::LazyLock;

/// `[`, `]` and `=` anywhere in the record.
static NOISE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]=]").expect("noise pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Remove bracket and '=' noise from a raw record.
    pub fn clean(&self, record: &str) -> String {
        NOISE_REGEX.replace_all(record, "").into_owned()
    }

    /// Clean the record and split it into annotated `word/TAG` units.
    pub fn units(&self, record: &str) -> Vec<String> {
        self.clean(record)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_brackets_and_equals() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("[ the/DT rate/NN ] ===="), " the/DT rate/NN  ");
    }

    #[test]
    fn test_units_split_on_whitespace() {
        let p = Preprocessor::new();
        let units = p.units("[ It/PRP ]\n======\nis/VBZ\t[interest_5/NN] ./.");
        assert_eq!(units, vec!["It/PRP", "is/VBZ", "interest_5/NN", "./."]);
    }

    #[test]
    fn test_empty_record() {
        let p = Preprocessor::new();
        assert!(p.units("").is_empty());
        assert!(p.units("\n=====\n").is_empty());
    }
}
