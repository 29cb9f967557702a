//! Tokenizer implementations for the cleaning pipeline.
//!
//! Tokenizers are the collaborators that split raw text into an ordered
//! sequence of tokens. The stopword index tokenizes its phrases with the same
//! tokenizer the cleaner uses for input text, so phrase lengths and input spans
//! are always counted the same way.
//!
//! # Available Tokenizers
//!
//! - [`word_punct::WordPunctTokenizer`] - Words and punctuation marks (default)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//!
//! # Examples
//!
//! ```
//! use scour::analysis::tokenizer::Tokenizer;
//! use scour::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a cleaner can be shared across
/// the threads of a batch run.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use scour::analysis::token::{Token, TokenStream};
/// use scour::analysis::tokenizer::Tokenizer;
/// use scour::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize and collect into a vector.
    fn tokenize_to_vec(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.tokenize(text)?.collect())
    }
}

pub mod regex;
pub mod whitespace;
pub mod word_punct;

pub use regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use word_punct::WordPunctTokenizer;
