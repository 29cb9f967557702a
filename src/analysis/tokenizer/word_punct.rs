//! Word and punctuation tokenizer.
//!
//! Splits text on Unicode word boundaries (UAX #29), drops whitespace and
//! keeps punctuation marks as tokens of their own, so `"space!"` becomes
//! `"space"`, `"!"`. Two refinements keep the output close to conventional
//! English word tokenizers:
//!
//! - hyphenated words stay whole (`"n-grams"`)
//! - runs of one repeated punctuation char stay whole (`"**"`, `"..."`)
//!
//! # Examples
//!
//! ```
//! use scour::analysis::tokenizer::Tokenizer;
//! use scour::analysis::tokenizer::word_punct::WordPunctTokenizer;
//!
//! let tokenizer = WordPunctTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Remove n-grams, please!").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Remove", "n-grams", ",", "please", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits words and punctuation marks.
#[derive(Clone, Debug, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
    /// Create a new word/punctuation tokenizer.
    pub fn new() -> Self {
        WordPunctTokenizer
    }

    fn is_word(segment: &str) -> bool {
        segment.chars().any(|c| c.is_alphanumeric())
    }

    fn single_char(segment: &str) -> bool {
        let mut chars = segment.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let segments: Vec<(usize, &str)> = text
            .split_word_bound_indices()
            .filter(|(_, s)| !s.chars().all(char::is_whitespace))
            .collect();

        let mut tokens = Vec::new();
        let mut i = 0;

        while i < segments.len() {
            let (start, segment) = segments[i];
            let mut end = start + segment.len();
            i += 1;

            if Self::is_word(segment) {
                while i + 1 < segments.len() {
                    let (hyphen_start, hyphen) = segments[i];
                    let (next_start, next) = segments[i + 1];
                    if hyphen == "-"
                        && hyphen_start == end
                        && next_start == hyphen_start + 1
                        && Self::is_word(next)
                    {
                        end = next_start + next.len();
                        i += 2;
                    } else {
                        break;
                    }
                }
            } else if Self::single_char(segment) {
                while i < segments.len() && segments[i].0 == end && segments[i].1 == segment {
                    end += segment.len();
                    i += 1;
                }
            }

            tokens.push(Token::with_offsets(&text[start..end], tokens.len(), start, end));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_punct"
    }
}
