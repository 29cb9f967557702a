//! Text filters applied around stopword removal.
//!
//! A char filter maps text to text. The cleaner runs one ordered chain of them
//! before tokenization ("before filters") and another on the cleaned output
//! ("after filters"). Each filter's output feeds the next.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex replacement, plus the
//!   numeric / special-char / apostrophe / sentence-end / multi-space presets
//! - [`encode::EncodeCharFilter`] - Re-encode to ASCII or Latin-1
//! - [`case::LowercaseCharFilter`] and [`case::TrimCharFilter`]
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - NFC, NFD, NFKC, NFKD
//! - [`func::FnCharFilter`] - Any `Fn(&str) -> String`
//!
//! # Examples
//!
//! ```
//! use scour::analysis::char_filter::CharFilter;
//! use scour::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::multiple_space();
//! assert_eq!(filter.filter("too   many  spaces").unwrap(), "too many spaces");
//! ```

use crate::error::Result;

/// Trait for text-to-text filters.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> Result<String>;

    /// Get the name of this char filter.
    fn name(&self) -> &str;
}

pub mod case;
pub mod encode;
pub mod func;
pub mod pattern_replace;
pub mod presets;
pub mod unicode_normalize;

pub use case::{LowercaseCharFilter, TrimCharFilter};
pub use encode::{EncodeCharFilter, EncodeErrors, Encoding, encode_text, encode_value};
pub use func::FnCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
