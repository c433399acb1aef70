// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file output that doesn't belong to the
// pipeline itself:
//
//   config_store.rs — PipelineConfig ⇄ JSON file
//   report.rs       — sense distribution, printable and as CSV
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pipeline configuration saving and loading
pub mod config_store;

/// Sense distribution report
pub mod report;
