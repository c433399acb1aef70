// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw corpus text to the aligned feature
// matrix and label vector.
//
// The pipeline flows in this order:
//
//   corpus.txt / stopwords.txt
//       │
//       ▼
//   CorpusFile / StopwordFile → raw records, stopword set
//       │
//       ├──────────────► label      → gold sense per record
//       ▼
//   Preprocessor              → strips "[ ] =" noise
//       │
//       ▼
//   AnnotationTokenizer       → (word, tag) tokens
//       │
//       ▼
//   extractor                 → six sequence views per record
//       │
//       ▼
//   ContextWindow             → n tokens either side of the target
//       │
//       ▼
//   CountVectorizer           → sparse term-count matrix
//       │
//       ▼
//   FeatureSet                → matrix + labels, row-aligned
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the corpus and stopword files
pub mod loader;

/// Strips bracket and '=' noise from raw records
pub mod preprocessor;

/// Splits annotated units into (word, tag) tokens
pub mod tokenizer;

/// Word and category sequences with stopword/punctuation filters
pub mod extractor;

/// Context windows around the marked target
pub mod window;

/// Gold sense label of a raw record
pub mod label;

/// Built-in English stopword list
pub mod english_stop_words;

/// Sparse bag-of-words count vectors
pub mod vectorizer;

/// Row-aligned features and labels
pub mod dataset;
