// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads PipelineConfig as pretty-printed JSON so a
// run can be reproduced from a file:
//
//   {
//     "corpus_path": "data/corpus.txt",
//     "stopwords_path": "data/stopwords.txt",
//     "margin": 3,
//     "view": "words",
//     "english_stop_words": false,
//     "on_missing_target": "abort"
//   }
//
// Missing fields fall back to PipelineConfig::default().
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::feature_use_case::PipelineConfig;

pub fn save_config(config: &PipelineConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("Cannot write config '{}'", path.display()))?;

    tracing::debug!("Saved pipeline config to '{}'", path.display());
    Ok(())
}

pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config '{}'", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded pipeline config from '{}'", path.display());
    Ok(config)
}
