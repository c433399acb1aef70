// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal per use
// case. No printing here (that's Layer 1) and no parsing logic
// (that's Layer 4), only workflow coordination.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Pure, file-free pipeline functions
pub mod pipeline;

// Corpus → aligned feature matrix and labels
pub mod feature_use_case;

// Corpus → sense distribution report
pub mod stats_use_case;
