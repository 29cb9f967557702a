//! Command implementations for the Scour CLI.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::stopword::MatchMode;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, WordPunctTokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{CleanerConfig, TokenizerConfig};
use crate::error::{Result, ScourError};

/// Execute a CLI command.
pub fn execute_command(args: ScourArgs) -> Result<()> {
    match &args.command {
        Command::Clean(clean_args) => clean_text(clean_args, &args),
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Stopwords(stopwords_args) => show_stopwords(stopwords_args, &args),
    }
}

/// Clean the input, whole or line by line.
fn clean_text(args: &CleanArgs, cli_args: &ScourArgs) -> Result<()> {
    let config = build_config(&args.pipeline)?;
    let cleaner = config.build()?;
    log::info!("{cleaner:?}");

    let text = read_input(&args.input)?;

    if args.trace {
        let trace = cleaner
            .store_before(true)
            .store_after(true)
            .clean_with_trace(&text)?;
        return output_trace(&trace, cli_args);
    }

    let start_time = Instant::now();
    let outputs = if args.lines {
        let lines: Vec<&str> = text.lines().collect();
        cleaner.clean_batch(&lines)?
    } else {
        vec![cleaner.clean(&text)?]
    };

    output_clean(
        &CleanResult {
            outputs,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the tokens of the input.
fn tokenize_text(args: &TokenizeArgs, cli_args: &ScourArgs) -> Result<()> {
    let tokenizer = tokenizer_for(args.tokenizer);
    let text = read_input(&args.input)?;
    let tokens = tokenizer.tokenize_to_vec(&text)?;

    output_tokens(
        &TokenizeResult {
            tokenizer: tokenizer.name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// Print the stopword index.
fn show_stopwords(args: &StopwordsArgs, cli_args: &ScourArgs) -> Result<()> {
    let cleaner = build_config(&args.pipeline)?.build()?;
    let index = cleaner.index();

    output_stopword_index(
        &StopwordIndexResult {
            tokenizer: cleaner.tokenizer().name().to_string(),
            total_phrases: index.len(),
            max_ngram: index.max_ngram(),
            groups: index.to_groups(),
        },
        cli_args,
    )
}

/// Merge the config file (if any) with command line overrides.
pub fn build_config(args: &PipelineArgs) -> Result<CleanerConfig> {
    let mut config = match &args.config {
        Some(path) => CleanerConfig::from_file(path)?,
        None => CleanerConfig::default(),
    };

    config.stopwords.extend(args.stopwords.iter().cloned());
    if let Some(file) = &args.stopwords_file {
        config.stopwords_file = Some(file.clone());
    }
    if args.default_stopwords {
        config.use_default_stopwords = true;
    }
    if let Some(kind) = args.tokenizer {
        config.tokenizer = match kind {
            TokenizerKind::WordPunct => TokenizerConfig::WordPunct,
            TokenizerKind::Whitespace => TokenizerConfig::Whitespace,
        };
    }
    if let Some(cutoff) = args.fuzzy {
        config.match_mode = MatchMode::Fuzzy { cutoff };
    }

    Ok(config)
}

fn tokenizer_for(kind: TokenizerKind) -> Arc<dyn Tokenizer> {
    match kind {
        TokenizerKind::WordPunct => Arc::new(WordPunctTokenizer::new()),
        TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
    }
}

/// Read the text to process from --text, a file, or stdin.
fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            ScourError::invalid_argument(format!("cannot read {}: {e}", path.display()))
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
