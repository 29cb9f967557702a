//! Span matching against a [`StopwordIndex`](super::StopwordIndex).

use serde::{Deserialize, Serialize};

use crate::analysis::stopword::StopwordIndex;
use crate::analysis::token::Token;
use crate::util::levenshtein;

/// Similarity required by [`MatchMode::Fuzzy`] when none is configured.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.9;

fn default_cutoff() -> f64 {
    DEFAULT_FUZZY_CUTOFF
}

/// How a token span is compared with indexed phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchMode {
    /// The lower-cased span must equal an indexed phrase.
    #[default]
    Exact,
    /// The span must have a similarity ratio of at least `cutoff` with some
    /// phrase of the same token length.
    Fuzzy {
        #[serde(default = "default_cutoff")]
        cutoff: f64,
    },
}

impl MatchMode {
    /// Fuzzy matching with the default cutoff.
    pub fn fuzzy() -> Self {
        MatchMode::Fuzzy {
            cutoff: DEFAULT_FUZZY_CUTOFF,
        }
    }
}

/// Join a token span the way phrases are keyed in the index.
pub fn span_key(tokens: &[Token]) -> String {
    let mut key = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            key.push(' ');
        }
        key.push_str(&token.text);
    }
    key.to_lowercase()
}

impl StopwordIndex {
    /// Check whether a span key of `n` tokens is a stopword.
    ///
    /// The key is lower-cased before lookup.
    pub fn is_stop_word(&self, span: &str, n: usize, mode: MatchMode) -> bool {
        let Some(phrases) = self.phrases(n) else {
            return false;
        };
        let span = span.to_lowercase();

        if phrases.contains(&span) {
            return true;
        }

        match mode {
            MatchMode::Exact => false,
            MatchMode::Fuzzy { cutoff } => phrases
                .iter()
                .any(|phrase| levenshtein::is_similar(&span, phrase, cutoff)),
        }
    }

    /// Mark every token that belongs to a matched stopword span.
    ///
    /// Every position is tried with every indexed n-gram length that still
    /// fits in the input. Overlapping matches are all honoured: a token is
    /// marked if any matched span covers it.
    pub fn find_matches(&self, tokens: &[Token], mode: MatchMode) -> Vec<bool> {
        let mut marked = vec![false; tokens.len()];
        if self.is_empty() {
            return marked;
        }

        let lengths = self.lengths();
        for start in 0..tokens.len() {
            for &n in &lengths {
                let end = start + n;
                if end > tokens.len() {
                    break;
                }
                let key = span_key(&tokens[start..end]);
                if self.is_stop_word(&key, n, mode) {
                    log::trace!("stopword match {key:?} at {start}..{end}");
                    marked[start..end].fill(true);
                }
            }
        }

        marked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{Tokenizer, WordPunctTokenizer};

    fn tokens(text: &str) -> Vec<Token> {
        WordPunctTokenizer::new().tokenize_to_vec(text).unwrap()
    }

    fn index(phrases: &[&str]) -> StopwordIndex {
        StopwordIndex::build(phrases.iter().copied(), &WordPunctTokenizer::new()).unwrap()
    }

    #[test]
    fn test_span_key_lowercases_and_joins() {
        assert_eq!(span_key(&tokens("Good AND Bad")), "good and bad");
        assert_eq!(span_key(&[]), "");
    }

    #[test]
    fn test_single_and_multi_token_matches() {
        let index = index(&["the", "good and bad"]);
        let marked = index.find_matches(&tokens("The good and bad parts"), MatchMode::Exact);
        assert_eq!(marked, vec![true, true, true, true, false]);
    }

    #[test]
    fn test_overlapping_matches_union() {
        let index = index(&["a b", "b c"]);
        let marked = index.find_matches(&tokens("a b c d"), MatchMode::Exact);
        assert_eq!(marked, vec![true, true, true, false]);
    }

    #[test]
    fn test_span_longer_than_remaining_input_is_skipped() {
        let index = index(&["x y z"]);
        let marked = index.find_matches(&tokens("w x y"), MatchMode::Exact);
        assert_eq!(marked, vec![false, false, false]);
    }

    #[test]
    fn test_partial_phrase_does_not_match() {
        let index = index(&["good and bad"]);
        let marked = index.find_matches(&tokens("good and fine"), MatchMode::Exact);
        assert!(marked.iter().all(|m| !m));
    }

    #[test]
    fn test_fuzzy_match() {
        let index = index(&["good and bad"]);
        let input = tokens("good and bat");

        assert!(index.find_matches(&input, MatchMode::Exact).iter().all(|m| !m));
        assert!(index.find_matches(&input, MatchMode::fuzzy()).iter().all(|m| *m));
        assert!(
            index
                .find_matches(&input, MatchMode::Fuzzy { cutoff: 0.95 })
                .iter()
                .all(|m| !m)
        );
    }

    #[test]
    fn test_is_stop_word_unknown_length() {
        let index = index(&["the"]);
        assert!(index.is_stop_word("THE", 1, MatchMode::Exact));
        assert!(!index.is_stop_word("the", 2, MatchMode::Exact));
    }

    #[test]
    fn test_match_mode_serde() {
        let mode: MatchMode = serde_json::from_str(r#"{"mode":"fuzzy"}"#).unwrap();
        assert_eq!(mode, MatchMode::fuzzy());
        let mode: MatchMode = serde_json::from_str(r#"{"mode":"exact"}"#).unwrap();
        assert_eq!(mode, MatchMode::Exact);
    }
}
