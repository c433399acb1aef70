// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All work is delegated to Layer 2 (application); this layer
// only routes and prints.
//
// Three commands are supported:
//   1. `vectorize`   — build the feature matrix and labels
//   2. `stats`       — sense distribution of a corpus
//   3. `init-config` — write a default JSON config
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InitConfigArgs, StatsArgs, VectorizeArgs};

use crate::application::feature_use_case::{FeatureUseCase, PipelineConfig};
use crate::application::stats_use_case::StatsUseCase;
use crate::infra::config_store::{load_config, save_config};

#[derive(Parser, Debug)]
#[command(
    name = "interest-wsd",
    version,
    about = "Bag-of-words context features for disambiguating \"interest\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Vectorize(args)  => run_vectorize(args),
            Commands::Stats(args)      => run_stats(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

fn run_vectorize(args: VectorizeArgs) -> Result<()> {
    let config = match args.config.clone() {
        Some(path) => load_config(path)?,
        None       => PipelineConfig::from(args),
    };
    tracing::info!("Vectorizing corpus '{}'", config.corpus_path);

    let run     = FeatureUseCase::new(config).execute()?;
    let summary = run.features.summary(run.total_records);

    println!("Records:        {}", run.total_records);
    println!("Feature matrix: {} x {}", summary.rows, summary.terms);
    println!("Non-zero:       {}", summary.non_zero);
    println!("Labels:         {}", summary.labels);
    if summary.skipped > 0 {
        println!("Skipped:        {}", summary.skipped);
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let distribution = StatsUseCase::new(args.corpus).execute()?;
    println!("{distribution}");

    if let Some(csv) = args.csv {
        distribution.write_csv(&csv)?;
        println!("Distribution written to {csv}");
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    save_config(&PipelineConfig::default(), &args.out)?;
    println!("Default config written to {}", args.out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pipeline::MissingTargetPolicy;
    use crate::domain::record::SequenceView;

    #[test]
    fn test_vectorize_flags_become_config() {
        let cli = Cli::try_parse_from([
            "interest-wsd", "vectorize",
            "--corpus", "c.txt",
            "--margin", "5",
            "--view", "categories-no-stop",
            "--skip-missing",
        ])
        .unwrap();

        let Commands::Vectorize(args) = cli.command else {
            panic!("expected vectorize");
        };
        let cfg = PipelineConfig::from(args);
        assert_eq!(cfg.corpus_path, "c.txt");
        assert_eq!(cfg.margin, 5);
        assert_eq!(cfg.view, SequenceView::CategoriesNoStop);
        assert_eq!(cfg.on_missing_target, MissingTargetPolicy::Skip);
        assert!(!cfg.english_stop_words);
    }

    #[test]
    fn test_config_flag_is_parsed() {
        let cli = Cli::try_parse_from([
            "interest-wsd", "vectorize",
            "--config", "runs/pipeline.json",
        ])
        .unwrap();

        let Commands::Vectorize(args) = cli.command else {
            panic!("expected vectorize");
        };
        assert_eq!(args.config.as_deref(), Some("runs/pipeline.json"));
        assert_eq!(args.view, SequenceView::Words);
    }

    #[test]
    fn test_config_file_drives_vectorize() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        let stop   = dir.path().join("stopwords.txt");
        let config = dir.path().join("pipeline.json");
        std::fs::write(&corpus, "It/PRP is/VBZ interest_5/NN ./. $$\n").unwrap();
        std::fs::write(&stop, "is\n").unwrap();
        save_config(
            &PipelineConfig {
                corpus_path:    corpus.display().to_string(),
                stopwords_path: stop.display().to_string(),
                margin:         1,
                ..PipelineConfig::default()
            },
            &config,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "interest-wsd", "vectorize",
            "--config", config.to_str().unwrap(),
            "--corpus", "ignored.txt",
        ])
        .unwrap();
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_view_help_lists_possible_values() {
        use clap::CommandFactory;

        let mut cmd = Cli::command();
        let help    = cmd
            .find_subcommand_mut("vectorize")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.to_lowercase().contains("possible values"));
        assert!(help.contains("categories-no-stop-no-punct"));
        assert!(help.contains("words-no-punct"));
        assert!(help.contains("[default: words]"));
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let res = Cli::try_parse_from(["interest-wsd", "vectorize", "--view", "tags"]);
        assert!(res.is_err());
    }
}
