//! N-gram stop filter implementation.
//!
//! Removes stopword phrases of any token length from a token stream. A
//! default English list of single-word stopwords is provided; custom lists may
//! mix single words and multi-word phrases.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::token_filter::Filter;
//! use scour::analysis::token_filter::stop::NgramStopFilter;
//! use scour::analysis::tokenizer::{Tokenizer, WordPunctTokenizer};
//!
//! let tokenizer = WordPunctTokenizer::new();
//! let filter = NgramStopFilter::from_phrases(["the", "good and bad"], &tokenizer).unwrap();
//!
//! let tokens = tokenizer.tokenize("The good and bad news").unwrap();
//! let result: Vec<_> = filter.filter(tokens).unwrap().collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "news");
//! ```

use std::sync::Arc;

use crate::analysis::stopword::{MatchMode, StopwordIndex};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{Tokenizer, WordPunctTokenizer};
use crate::error::Result;

/// Default English stop words list.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A filter that removes stopword n-grams from the token stream.
///
/// Matching is case-insensitive. It can either drop matched tokens or mark
/// them as stopped while keeping them in the stream.
#[derive(Clone, Debug)]
pub struct NgramStopFilter {
    index: Arc<StopwordIndex>,
    mode: MatchMode,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl NgramStopFilter {
    /// Create a stop filter with the default English stop words.
    pub fn new() -> Result<Self> {
        Self::from_phrases(DEFAULT_ENGLISH_STOP_WORDS.iter().copied(), &WordPunctTokenizer::new())
    }

    /// Create a stop filter from phrases, measured with `tokenizer`.
    pub fn from_phrases<I, S>(phrases: I, tokenizer: &dyn Tokenizer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_index(StopwordIndex::build(phrases, tokenizer)?))
    }

    /// Create a stop filter over an existing index.
    pub fn with_index(index: StopwordIndex) -> Self {
        NgramStopFilter {
            index: Arc::new(index),
            mode: MatchMode::Exact,
            remove_stopped: true,
        }
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Set how spans are compared with indexed phrases.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get the current match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Get the underlying phrase index.
    pub fn index(&self) -> &StopwordIndex {
        &self.index
    }

    /// Mark matched tokens as stopped, in place.
    ///
    /// Returns the number of newly stopped tokens.
    pub fn mark(&self, tokens: &mut [Token]) -> usize {
        let marked = self.index.find_matches(tokens, self.mode);
        let mut count = 0;
        for (token, hit) in tokens.iter_mut().zip(marked) {
            if hit && !token.stopped {
                token.stopped = true;
                count += 1;
            }
        }
        count
    }
}

impl Filter for NgramStopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut tokens: Vec<Token> = tokens.collect();
        let stopped = self.mark(&mut tokens);
        log::debug!("stop filter marked {stopped} of {} tokens", tokens.len());

        if self.remove_stopped {
            tokens.retain(|token| !token.is_stopped());
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram_stop"
    }
}
