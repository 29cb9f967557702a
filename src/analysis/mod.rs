//! Text analysis building blocks for Scour.
//!
//! Tokenizers split text into tokens, the stopword index finds n-gram spans
//! to drop, token filters apply the index to a token stream, and char filters
//! transform whole texts before and after that step.

pub mod char_filter;
pub mod stopword;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::CharFilter;
pub use stopword::{MatchMode, StopwordIndex};
pub use token::*;
pub use token_filter::{Filter, NgramStopFilter};
pub use tokenizer::Tokenizer;
