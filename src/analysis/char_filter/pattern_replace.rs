//! Regex replacement filter.

use regex::Regex;

use super::CharFilter;
use super::presets::{
    RE_APOSTROPHE, RE_CONSECUTIVE_SENTENCE_END, RE_MULTIPLE_SPACE, RE_NUMERIC, RE_SPECIAL_CHAR,
    strip_pattern,
};
use crate::error::{Result, ScourError};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement may reference capture groups as `$1` or `${name}`.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ScourError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self::from_regex(pattern, replacement))
    }

    /// Create a filter from an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        }
    }

    fn preset(pattern: &Regex, replacement: &str, name: &'static str) -> Self {
        Self {
            pattern: pattern.clone(),
            replacement: replacement.to_string(),
            name,
        }
    }

    /// Remove digit runs.
    pub fn numeric() -> Self {
        Self::preset(&RE_NUMERIC, "", "numeric")
    }

    /// Remove `@#&$*([` runs and the spaces following them.
    pub fn special_char() -> Self {
        Self::preset(&RE_SPECIAL_CHAR, "", "special_char")
    }

    /// Remove apostrophe suffixes such as `'s`.
    pub fn apostrophe() -> Self {
        Self::preset(&RE_APOSTROPHE, "", "apostrophe")
    }

    /// Remove runs of two or more sentence ends.
    pub fn consecutive_sentence_end() -> Self {
        Self::preset(&RE_CONSECUTIVE_SENTENCE_END, "", "consecutive_sentence_end")
    }

    /// Collapse whitespace runs into a single space.
    pub fn multiple_space() -> Self {
        Self::preset(&RE_MULTIPLE_SPACE, " ", "multiple_space")
    }

    /// Get the regex pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Get the replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok(strip_pattern(input, &self.pattern, &self.replacement))
    }

    fn name(&self) -> &str {
        self.name
    }
}
