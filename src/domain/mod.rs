// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// pipeline talks about: tokens, senses, records and views.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI or logging setup
//   - Only plain Rust types, serde/clap derives and thiserror errors
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A (word, tag) pair from one `word/TAG` unit
pub mod token;

// The six senses of "interest"
pub mod sense;

// Per-record structure carrying every derived view plus its label
pub mod record;

// Corpus-specific stopword set
pub mod stopwords;

// Typed pipeline errors
pub mod error;

// Core abstractions (traits) that the data layer implements
pub mod traits;
