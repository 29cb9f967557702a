//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, ScourArgs};
use crate::cleaner::{CleanTrace, StageOutput};
use crate::error::Result;

/// Result of cleaning a whole input or each of its lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanResult {
    pub outputs: Vec<String>,
    pub duration_ms: u64,
}

/// Result of tokenizing an input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokenizer: String,
    pub tokens: Vec<Token>,
}

/// The stopword index, grouped by n-gram length.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopwordIndexResult {
    pub tokenizer: String,
    pub total_phrases: usize,
    pub max_ngram: usize,
    pub groups: BTreeMap<usize, Vec<String>>,
}

/// Output a clean result.
pub fn output_clean(result: &CleanResult, args: &ScourArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            for line in &result.outputs {
                println!("{line}");
            }
            if args.verbosity() > 1 {
                eprintln!(
                    "Cleaned {} text(s) in {}ms",
                    result.outputs.len(),
                    result.duration_ms
                );
            }
            Ok(())
        }
    }
}

/// Output a trace of every pipeline stage.
pub fn output_trace(trace: &CleanTrace, args: &ScourArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(trace, args),
        OutputFormat::Human => {
            println!("Input:");
            println!("  {}", trace.input);
            print_stages("Before filters:", &trace.before);
            println!("After stopword removal:");
            println!("  {}", trace.after_stopwords);
            print_stages("After filters:", &trace.after);
            println!("Output:");
            println!("  {}", trace.output);
            Ok(())
        }
    }
}

fn print_stages(title: &str, stages: &[StageOutput]) {
    if stages.is_empty() {
        return;
    }
    println!("{title}");
    for (i, stage) in stages.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, stage.filter, stage.text);
    }
}

/// Output tokens.
pub fn output_tokens(result: &TokenizeResult, args: &ScourArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Tokens ({}):", result.tokenizer);
                println!("═══════════");
            }
            for token in &result.tokens {
                println!(
                    "{:>4}  {:>5}..{:<5}  {}",
                    token.position, token.start_offset, token.end_offset, token.text
                );
            }
            Ok(())
        }
    }
}

/// Output the stopword index.
pub fn output_stopword_index(result: &StopwordIndexResult, args: &ScourArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Stopword Index ({}):", result.tokenizer);
            println!("══════════════");
            println!("Total phrases: {}", result.total_phrases);
            println!("Max n-gram: {}", result.max_ngram);
            for (n, phrases) in &result.groups {
                println!();
                println!("{n}-gram ({}):", phrases.len());
                for phrase in phrases {
                    println!("  {phrase}");
                }
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ScourArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
