// ============================================================
// Layer 3 — Sense Domain Type
// ============================================================
// The six dictionary senses of "interest" used by the corpus.
// The number after the underscore in `interest_k` is the id.
//
//   1  readiness to give attention
//   2  quality of causing attention to be given to
//   3  activity, etc. that one gives attention to
//   4  advantage, advancement or favour
//   5  a share in a company or business
//   6  money paid for the use of money
//
// Reference: Rust Book §6 (Enums), §9 (TryFrom)

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six labelled meanings of the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sense {
    Attention,
    Attractiveness,
    Activity,
    Advantage,
    Share,
    Money,
}

impl Sense {
    /// All senses in id order.
    pub const ALL: [Sense; 6] = [
        Sense::Attention,
        Sense::Attractiveness,
        Sense::Activity,
        Sense::Advantage,
        Sense::Share,
        Sense::Money,
    ];

    /// The numeric label (1..=6) fed to a classifier.
    pub fn id(self) -> u8 {
        match self {
            Sense::Attention      => 1,
            Sense::Attractiveness => 2,
            Sense::Activity       => 3,
            Sense::Advantage      => 4,
            Sense::Share          => 5,
            Sense::Money          => 6,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Sense::Attention      => "readiness to give attention",
            Sense::Attractiveness => "quality of causing attention to be given to",
            Sense::Activity       => "activity, etc. that one gives attention to",
            Sense::Advantage      => "advantage, advancement or favor",
            Sense::Share          => "a share in a company or business",
            Sense::Money          => "money paid for the use of money",
        }
    }
}

impl TryFrom<u8> for Sense {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Sense::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or(id)
    }
}

impl From<Sense> for u8 {
    fn from(sense: Sense) -> Self {
        sense.id()
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
