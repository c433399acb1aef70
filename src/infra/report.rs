// ============================================================
// Layer 6 — Sense Distribution Report
// ============================================================
// Counts how many records carry each sense and writes the
// result to a CSV file on request.
//
// Example CSV output:
//   sense,count,share,description
//   1,361,0.151000,readiness to give attention
//   2,11,0.004600,quality of causing attention to be given to
//   ...
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fmt,
    fs::{self, File},
    io::Write,
    path::Path,
};

use crate::domain::record::AnnotatedRecord;
use crate::domain::sense::Sense;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseDistribution {
    counts: BTreeMap<Sense, usize>,

    /// Token count of the longest record
    pub longest_record: usize,
}

impl SenseDistribution {
    pub fn from_records(records: &[AnnotatedRecord]) -> Self {
        let mut distribution = Self::default();
        for record in records {
            *distribution.counts.entry(record.label).or_insert(0) += 1;
            distribution.longest_record = distribution.longest_record.max(record.len());
        }
        distribution
    }

    pub fn count(&self, sense: Sense) -> usize {
        self.counts.get(&sense).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Fraction of records with `sense`, 0.0 for an empty corpus.
    pub fn share(&self, sense: Sense) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(sense) as f64 / total as f64,
        }
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut f = File::create(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        writeln!(f, "sense,count,share,description")?;
        for sense in Sense::ALL {
            writeln!(
                f,
                "{},{},{:.6},{}",
                sense.id(),
                self.count(sense),
                self.share(sense),
                sense.description(),
            )?;
        }

        tracing::debug!("Wrote sense distribution to '{}'", path.display());
        Ok(())
    }
}

impl fmt::Display for SenseDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sense in Sense::ALL {
            writeln!(
                f,
                "Sense {} = {:>5} occurrences ({:>5.1}%) - {}",
                sense.id(),
                self.count(sense),
                self.share(sense) * 100.0,
                sense.description(),
            )?;
        }
        write!(f, "Longest record: {} tokens", self.longest_record)
    }
}
