//! Context-window bag-of-words features for disambiguating "interest".
//!
//! Layers, top to bottom:
//!
//! - [`cli`] — command line (clap)
//! - [`application`] — use cases and the pure pipeline functions
//! - [`domain`] — tokens, senses, per-record views, errors, traits
//! - [`data`] — loaders, tokenizer, extractor, windows, labels, vectorizer
//! - [`infra`] — JSON config and sense-distribution report
//!
//! ```no_run
//! use interest_wsd::application::pipeline::{annotate_corpus, build_features, MissingTargetPolicy};
//! use interest_wsd::domain::{record::SequenceView, stopwords::StopWords};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus  = std::fs::read_to_string("corpus.txt")?;
//! let stop    = StopWords::parse(&std::fs::read_to_string("stopwords.txt")?);
//! let records = annotate_corpus(&corpus, &stop)?;
//! let set     = build_features(&records, SequenceView::Words, 3, false, MissingTargetPolicy::Abort)?;
//! assert_eq!(set.labels().len(), set.matrix().rows());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
