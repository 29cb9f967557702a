//! Length-keyed stopword phrase index.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};

use crate::analysis::stopword::matcher::span_key;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Stopword phrases grouped by token length.
///
/// Each phrase is tokenized with the tokenizer that will later split the
/// input, then keyed as its tokens joined by single spaces and lower-cased.
/// Keying on the joined tokens rather than the raw phrase means `"space!"`
/// is stored as `"space !"`, which is what a span of input tokens joins to.
///
/// # Examples
///
/// ```
/// use scour::analysis::stopword::StopwordIndex;
/// use scour::analysis::tokenizer::WordPunctTokenizer;
///
/// let index = StopwordIndex::build(["The", "a", "good and bad"], &WordPunctTokenizer::new()).unwrap();
///
/// assert_eq!(index.max_ngram(), 3);
/// assert_eq!(index.lengths(), vec![1, 3]);
/// assert!(index.contains(1, "the"));
/// assert!(index.contains(3, "good and bad"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopwordIndex {
    grams: AHashMap<usize, AHashSet<String>>,
    max_ngram: usize,
}

impl StopwordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from stopword phrases.
    pub fn build<I, S>(phrases: I, tokenizer: &dyn Tokenizer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for phrase in phrases {
            index.insert(phrase.as_ref(), tokenizer)?;
        }

        log::debug!(
            "built stopword index: {} phrases, lengths {:?}, tokenizer {}",
            index.len(),
            index.lengths(),
            tokenizer.name()
        );
        Ok(index)
    }

    /// Add one phrase. Returns `false` if it produced no tokens or was
    /// already present.
    pub fn insert(&mut self, phrase: &str, tokenizer: &dyn Tokenizer) -> Result<bool> {
        let tokens = tokenizer.tokenize_to_vec(phrase)?;
        if tokens.is_empty() {
            log::debug!("skipping stopword {phrase:?}: no tokens");
            return Ok(false);
        }

        let n = tokens.len();
        let inserted = self.grams.entry(n).or_default().insert(span_key(&tokens));
        self.max_ngram = self.max_ngram.max(n);
        Ok(inserted)
    }

    /// Largest phrase length in tokens, or 0 when empty.
    pub fn max_ngram(&self) -> usize {
        self.max_ngram
    }

    /// Phrase lengths present in the index, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.grams.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Phrases that are `n` tokens long.
    pub fn phrases(&self, n: usize) -> Option<&AHashSet<String>> {
        self.grams.get(&n)
    }

    /// Check for an already-normalized key of `n` tokens.
    pub fn contains(&self, n: usize, key: &str) -> bool {
        self.grams.get(&n).is_some_and(|set| set.contains(key))
    }

    /// Total number of phrases.
    pub fn len(&self) -> usize {
        self.grams.values().map(|set| set.len()).sum()
    }

    /// Check if the index holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Sorted view of the index, for display.
    pub fn to_groups(&self) -> BTreeMap<usize, Vec<String>> {
        self.grams
            .iter()
            .map(|(&n, set)| {
                let mut phrases: Vec<String> = set.iter().cloned().collect();
                phrases.sort();
                (n, phrases)
            })
            .collect()
    }
}
