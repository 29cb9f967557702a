//! Command line argument parsing for the Scour CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Scour - clean text by removing stopword n-grams
#[derive(Parser, Debug, Clone)]
#[command(name = "scour")]
#[command(about = "Clean text by removing stopword n-grams between configurable filters")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ScourArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ScourArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clean text: before filters, stopword removal, after filters
    Clean(CleanArgs),

    /// Show how text is split into tokens
    Tokenize(TokenizeArgs),

    /// Show the stopword index grouped by n-gram length
    Stopwords(StopwordsArgs),
}

/// Where the text to process comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file (reads stdin when neither a file nor --text is given)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Inline text to process
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,
}

/// Options that describe the cleaning pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Cleaner config file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SCOUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stopword phrase; repeat for more
    #[arg(short = 's', long = "stopword", value_name = "PHRASE")]
    pub stopwords: Vec<String>,

    /// File with one stopword phrase per line
    #[arg(long, value_name = "FILE")]
    pub stopwords_file: Option<PathBuf>,

    /// Include the built-in English stopword list
    #[arg(long)]
    pub default_stopwords: bool,

    /// Tokenizer to use (overrides the config file)
    #[arg(long, value_name = "TOKENIZER")]
    pub tokenizer: Option<TokenizerKind>,

    /// Fuzzy stopword matching with the given similarity cutoff (0.0-1.0)
    #[arg(long, value_name = "CUTOFF")]
    pub fuzzy: Option<f64>,
}

/// Arguments for cleaning text
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Clean each input line separately (lines are processed in parallel)
    #[arg(short, long)]
    pub lines: bool,

    /// Show intermediate outputs of every filter
    #[arg(long, conflicts_with = "lines")]
    pub trace: bool,
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Tokenizer to use
    #[arg(long, value_name = "TOKENIZER", default_value = "word-punct")]
    pub tokenizer: TokenizerKind,
}

/// Arguments for showing the stopword index
#[derive(Parser, Debug, Clone)]
pub struct StopwordsArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Tokenizers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Words and punctuation marks
    WordPunct,
    /// Whitespace-separated chunks
    Whitespace,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
