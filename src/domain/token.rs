// ============================================================
// Layer 3 — Token Domain Type
// ============================================================
// One annotated unit of the corpus, split into its two halves:
//
//   "interest_5/NN"  →  word = "interest_5", tag = "NN"
//   "./."            →  word = ".",          tag = "."
//
// The split happens on the FIRST slash only, so a tag that
// itself contains a slash (e.g. "and/or/CC") keeps everything
// after the first one.
//
// Reference: Rust Book §5 (Structs), §8 (Strings)

/// Substring that identifies the word being disambiguated.
pub const TARGET_WORD: &str = "interest";

/// Separates the word from its sense id: `interest_5`.
pub const SENSE_DELIMITER: char = '_';

/// Marks a secondary mention of the target that is not scored.
pub const SECONDARY_MARKER: char = '*';

/// A (surface word, tag) pair taken from one `word/TAG` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Everything before the first '/'
    pub word: String,

    /// Everything after the first '/'
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag:  tag.into(),
        }
    }

    /// Split a unit on its first '/'.
    /// Returns None when the unit has no slash at all.
    pub fn split_unit(unit: &str) -> Option<Self> {
        let (word, tag) = unit.split_once('/')?;
        Some(Self::new(word, tag))
    }

    /// Rebuild the original `word/tag` unit.
    pub fn unit(&self) -> String {
        format!("{}/{}", self.word, self.tag)
    }

    /// True for a mention of the target word that should be kept whole
    /// in category sequences (i.e. not a starred secondary mention).
    pub fn is_scored_target(&self) -> bool {
        self.word.contains(TARGET_WORD) && !self.is_secondary()
    }

    /// Starred mentions share the surface form but are never scored.
    pub fn is_secondary(&self) -> bool {
        self.word.contains(SECONDARY_MARKER) || self.tag.contains(SECONDARY_MARKER)
    }
}
