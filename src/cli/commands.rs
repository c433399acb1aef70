// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `vectorize`, `stats` and
// `init-config` with all their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::feature_use_case::PipelineConfig;
use crate::application::pipeline::MissingTargetPolicy;
use crate::domain::record::SequenceView;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract context windows and build the bag-of-words matrix
    Vectorize(VectorizeArgs),

    /// Print the sense distribution of a corpus
    Stats(StatsArgs),

    /// Write a default pipeline config as JSON
    InitConfig(InitConfigArgs),
}

/// All arguments for the `vectorize` command.
#[derive(Args, Debug)]
pub struct VectorizeArgs {
    /// JSON pipeline config; the flags below are ignored when given
    #[arg(long)]
    pub config: Option<String>,

    /// Corpus file with records separated by "$$"
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: String,

    /// Whitespace-separated corpus stopwords
    #[arg(long, default_value = "data/stopwords.txt")]
    pub stopwords: String,

    /// Tokens kept on each side of the target
    #[arg(long, default_value_t = 3)]
    pub margin: usize,

    /// Sequence view to window
    #[arg(long, value_enum, default_value_t = SequenceView::Words)]
    pub view: SequenceView,

    /// Drop built-in English stopwords from the vocabulary
    #[arg(long)]
    pub english_stop_words: bool,

    /// Drop records whose view has no target instead of failing
    #[arg(long)]
    pub skip_missing: bool,
}

/// Convert CLI args into the application-layer PipelineConfig.
impl From<VectorizeArgs> for PipelineConfig {
    fn from(a: VectorizeArgs) -> Self {
        PipelineConfig {
            corpus_path:        a.corpus,
            stopwords_path:     a.stopwords,
            margin:             a.margin,
            view:               a.view,
            english_stop_words: a.english_stop_words,
            on_missing_target:  if a.skip_missing {
                MissingTargetPolicy::Skip
            } else {
                MissingTargetPolicy::Abort
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: String,

    /// Also write the distribution to this CSV file
    #[arg(long)]
    pub csv: Option<String>,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "pipeline.json")]
    pub out: String,
}
