//! # Scour
//!
//! A configurable text-cleaning pipeline. Text runs through a chain of
//! "before" filters, is tokenized, loses every stopword n-gram, and is joined
//! back together and passed through a chain of "after" filters.
//!
//! ## Features
//!
//! - Multi-word stopword phrases, grouped and matched by token length
//! - Case-insensitive exact or fuzzy (edit distance) matching
//! - Pluggable tokenizers and text filters, including arbitrary closures
//! - Intermediate output capture for debugging filter chains
//! - JSON configuration and a command line tool
//!
//! ## Example
//!
//! ```
//! use scour::cleaner::TextCleaner;
//!
//! let cleaner = TextCleaner::new(["the", "a", "good and bad"]).unwrap();
//! let cleaned = cleaner.clean("This is a sample with good and bad parts.").unwrap();
//! assert_eq!(cleaned, "This is sample with parts .");
//! ```

pub mod analysis;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::char_filter::CharFilter;
    pub use crate::analysis::stopword::{MatchMode, StopwordIndex};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::cleaner::{CleanTrace, TextCleaner};
    pub use crate::config::CleanerConfig;
    pub use crate::error::{Result, ScourError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
