//! Serializable cleaner configuration.
//!
//! A [`CleanerConfig`] describes a whole pipeline as JSON: stopwords, the
//! tokenizer, both filter chains, and the matching mode.
//!
//! ```json
//! {
//!   "stopwords": ["the", "a", "good and bad"],
//!   "before_filters": [
//!     { "type": "encode" },
//!     { "type": "special_char" },
//!     { "type": "numeric" },
//!     { "type": "multiple_space" }
//!   ],
//!   "after_filters": [
//!     { "type": "multiple_space" },
//!     { "type": "consecutive_sentence_end" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    CharFilter, EncodeCharFilter, EncodeErrors, Encoding, LowercaseCharFilter, NormalizationForm,
    PatternReplaceCharFilter, TrimCharFilter, UnicodeNormalizationCharFilter,
};
use crate::analysis::stopword::MatchMode;
use crate::analysis::token_filter::DEFAULT_ENGLISH_STOP_WORDS;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer, WordPunctTokenizer};
use crate::cleaner::TextCleaner;
use crate::error::{Result, ScourError};

/// Which tokenizer splits the text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    #[default]
    WordPunct,
    Whitespace,
    Regex {
        pattern: String,
        #[serde(default)]
        gaps: bool,
    },
}

impl TokenizerConfig {
    pub fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self {
            TokenizerConfig::WordPunct => Arc::new(WordPunctTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::Regex { pattern, gaps } => {
                if *gaps {
                    Arc::new(RegexTokenizer::with_gaps(pattern)?)
                } else {
                    Arc::new(RegexTokenizer::with_pattern(pattern)?)
                }
            }
        })
    }
}

/// One text filter in a before/after chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    PatternReplace {
        pattern: String,
        #[serde(default)]
        replacement: String,
    },
    Numeric,
    SpecialChar,
    Apostrophe,
    ConsecutiveSentenceEnd,
    MultipleSpace,
    Encode {
        #[serde(default)]
        encoding: Encoding,
        #[serde(default)]
        errors: EncodeErrors,
    },
    Lowercase,
    Trim,
    UnicodeNormalize {
        #[serde(default)]
        form: NormalizationForm,
    },
}

impl FilterConfig {
    pub fn build(&self) -> Result<Arc<dyn CharFilter>> {
        Ok(match self {
            FilterConfig::PatternReplace {
                pattern,
                replacement,
            } => Arc::new(PatternReplaceCharFilter::new(pattern, replacement)?),
            FilterConfig::Numeric => Arc::new(PatternReplaceCharFilter::numeric()),
            FilterConfig::SpecialChar => Arc::new(PatternReplaceCharFilter::special_char()),
            FilterConfig::Apostrophe => Arc::new(PatternReplaceCharFilter::apostrophe()),
            FilterConfig::ConsecutiveSentenceEnd => {
                Arc::new(PatternReplaceCharFilter::consecutive_sentence_end())
            }
            FilterConfig::MultipleSpace => Arc::new(PatternReplaceCharFilter::multiple_space()),
            FilterConfig::Encode { encoding, errors } => {
                Arc::new(EncodeCharFilter::new(*encoding, *errors))
            }
            FilterConfig::Lowercase => Arc::new(LowercaseCharFilter::new()),
            FilterConfig::Trim => Arc::new(TrimCharFilter::new()),
            FilterConfig::UnicodeNormalize { form } => {
                Arc::new(UnicodeNormalizationCharFilter::new(*form))
            }
        })
    }
}

/// Complete description of a [`TextCleaner`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Stopword phrases
    pub stopwords: Vec<String>,
    /// File with one stopword phrase per line; `#` starts a comment line
    pub stopwords_file: Option<PathBuf>,
    /// Include the built-in English stopword list
    pub use_default_stopwords: bool,
    pub tokenizer: TokenizerConfig,
    pub before_filters: Vec<FilterConfig>,
    pub after_filters: Vec<FilterConfig>,
    pub store_before: bool,
    pub store_after: bool,
    pub match_mode: MatchMode,
}

impl CleanerConfig {
    /// Load a config from a JSON file.
    ///
    /// A relative `stopwords_file` is resolved against the config file's
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: CleanerConfig = serde_json::from_str(&content)?;

        if let (Some(file), Some(dir)) = (&config.stopwords_file, path.parent()) {
            if file.is_relative() {
                config.stopwords_file = Some(dir.join(file));
            }
        }

        log::debug!("loaded cleaner config from {}", path.display());
        Ok(config)
    }

    /// Every stopword phrase this config names, in order: defaults, inline
    /// list, then file contents.
    pub fn resolve_stopwords(&self) -> Result<Vec<String>> {
        let mut stopwords = Vec::new();

        if self.use_default_stopwords {
            stopwords.extend(DEFAULT_ENGLISH_STOP_WORDS.iter().map(|s| s.to_string()));
        }
        stopwords.extend(self.stopwords.iter().cloned());

        if let Some(file) = &self.stopwords_file {
            let content = fs::read_to_string(file).map_err(|e| {
                ScourError::config(format!(
                    "cannot read stopwords file {}: {e}",
                    file.display()
                ))
            })?;
            stopwords.extend(parse_stopwords(&content));
        }

        Ok(stopwords)
    }

    /// Build the cleaner this config describes.
    pub fn build(&self) -> Result<TextCleaner> {
        if let MatchMode::Fuzzy { cutoff } = self.match_mode {
            if !(0.0..=1.0).contains(&cutoff) {
                return Err(ScourError::config(format!(
                    "fuzzy cutoff must be within 0.0..=1.0, got {cutoff}"
                )));
            }
        }

        let mut cleaner = TextCleaner::new(self.resolve_stopwords()?)?
            .with_tokenizer(self.tokenizer.build()?)?
            .match_mode(self.match_mode)
            .store_before(self.store_before)
            .store_after(self.store_after);

        for filter in &self.before_filters {
            cleaner = cleaner.add_before_filter(filter.build()?);
        }
        for filter in &self.after_filters {
            cleaner = cleaner.add_after_filter(filter.build()?);
        }

        Ok(cleaner)
    }
}

/// Parse a stopword list: one phrase per line, blank lines and lines
/// starting with `#` ignored.
pub fn parse_stopwords(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}
