//! The text cleaning pipeline.
//!
//! A [`TextCleaner`] applies processing in this order:
//! 1. Before filters: text-to-text transformations, in the order added
//! 2. Tokenizer: splits the filtered text into tokens
//! 3. Stopword removal: drops every token covered by a matched stopword n-gram
//!    and joins the survivors with single spaces
//! 4. After filters: text-to-text transformations on the joined output
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use scour::analysis::char_filter::PatternReplaceCharFilter;
//! use scour::cleaner::TextCleaner;
//!
//! let cleaner = TextCleaner::new(["the", "a", "good and bad"])
//!     .unwrap()
//!     .add_before_filter(Arc::new(PatternReplaceCharFilter::numeric()))
//!     .add_after_filter(Arc::new(PatternReplaceCharFilter::multiple_space()));
//!
//! let cleaned = cleaner.clean("The 3 good and BAD ideas!").unwrap();
//! assert_eq!(cleaned, "ideas !");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::stopword::{MatchMode, StopwordIndex};
use crate::analysis::token::join_tokens;
use crate::analysis::token_filter::{Filter, NgramStopFilter};
use crate::analysis::tokenizer::{Tokenizer, WordPunctTokenizer};
use crate::error::Result;

/// The output of one filter in a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    /// Name of the filter that produced `text`
    pub filter: String,
    pub text: String,
}

/// Result of running a filter chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRun {
    /// Output of the last filter, or the input if the chain is empty
    pub text: String,
    /// Output of every filter, in order, when intermediates were requested
    pub stages: Vec<StageOutput>,
}

/// Every intermediate text of one [`TextCleaner::clean_with_trace`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTrace {
    pub input: String,
    /// Before-filter outputs; empty unless the cleaner stores them
    pub before: Vec<StageOutput>,
    /// Text right after stopword removal
    pub after_stopwords: String,
    /// After-filter outputs; empty unless the cleaner stores them
    pub after: Vec<StageOutput>,
    pub output: String,
}

/// Removes stopword n-grams from text, between two chains of text filters.
#[derive(Clone)]
pub struct TextCleaner {
    tokenizer: Arc<dyn Tokenizer>,
    stopwords: Vec<String>,
    stop_filter: NgramStopFilter,
    before_filters: Vec<Arc<dyn CharFilter>>,
    after_filters: Vec<Arc<dyn CharFilter>>,
    store_before: bool,
    store_after: bool,
}

impl TextCleaner {
    /// Create a cleaner for the given stopword phrases using the default
    /// word/punctuation tokenizer.
    pub fn new<I, S>(stopwords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(WordPunctTokenizer::new());
        let stopwords: Vec<String> = stopwords.into_iter().map(Into::into).collect();
        let stop_filter = NgramStopFilter::from_phrases(&stopwords, tokenizer.as_ref())?;

        Ok(TextCleaner {
            tokenizer,
            stopwords,
            stop_filter,
            before_filters: Vec::new(),
            after_filters: Vec::new(),
            store_before: false,
            store_after: false,
        })
    }

    /// Use a different tokenizer. The stopword index is rebuilt with it so
    /// phrase lengths are measured the same way as input spans.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        let mode = self.stop_filter.mode();
        self.stop_filter =
            NgramStopFilter::from_phrases(&self.stopwords, tokenizer.as_ref())?.match_mode(mode);
        self.tokenizer = tokenizer;
        Ok(self)
    }

    /// Set how token spans are compared with stopword phrases.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.stop_filter = self.stop_filter.match_mode(mode);
        self
    }

    /// Append a filter to the chain run before stopword removal.
    pub fn add_before_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.before_filters.push(filter);
        self
    }

    /// Append a filter to the chain run after stopword removal.
    pub fn add_after_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.after_filters.push(filter);
        self
    }

    /// Capture every before-filter output in [`clean_with_trace`](Self::clean_with_trace).
    pub fn store_before(mut self, store: bool) -> Self {
        self.store_before = store;
        self
    }

    /// Capture every after-filter output in [`clean_with_trace`](Self::clean_with_trace).
    pub fn store_after(mut self, store: bool) -> Self {
        self.store_after = store;
        self
    }

    /// Get the tokenizer used by this cleaner.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the stopword phrases as given.
    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    /// Get the length-keyed stopword index.
    pub fn index(&self) -> &StopwordIndex {
        self.stop_filter.index()
    }

    pub fn before_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.before_filters
    }

    pub fn after_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.after_filters
    }

    /// Check whether `phrase` as a whole is a stopword.
    pub fn is_stop_word(&self, phrase: &str) -> Result<bool> {
        let tokens = self.tokenizer.tokenize_to_vec(phrase)?;
        let key = crate::analysis::stopword::matcher::span_key(&tokens);
        Ok(self
            .index()
            .is_stop_word(&key, tokens.len(), self.stop_filter.mode()))
    }

    /// Tokenize `text`, drop every stopword n-gram, and join the remaining
    /// tokens with single spaces.
    pub fn remove_stop_words(&self, text: &str) -> Result<String> {
        let tokens = self.tokenizer.tokenize(text)?;
        let kept: Vec<_> = self.stop_filter.filter(tokens)?.collect();
        Ok(join_tokens(&kept))
    }

    /// Feed `text` through `filters` left to right.
    ///
    /// With `store_intermediate` every filter's output is kept in
    /// [`FilterRun::stages`].
    pub fn apply_filters(
        text: &str,
        filters: &[Arc<dyn CharFilter>],
        store_intermediate: bool,
    ) -> Result<FilterRun> {
        let mut current = text.to_string();
        let mut stages = Vec::new();

        for filter in filters {
            current = filter.filter(&current)?;
            if store_intermediate {
                stages.push(StageOutput {
                    filter: filter.name().to_string(),
                    text: current.clone(),
                });
            }
        }

        Ok(FilterRun {
            text: current,
            stages,
        })
    }

    /// Run the full pipeline.
    pub fn clean(&self, text: &str) -> Result<String> {
        Ok(self.run(text, false, false)?.output)
    }

    /// Run the full pipeline; a missing text cleans to the empty string.
    pub fn clean_opt(&self, text: Option<&str>) -> Result<String> {
        match text {
            Some(text) => self.clean(text),
            None => Ok(String::new()),
        }
    }

    /// Run the full pipeline, keeping intermediate outputs for the stages
    /// configured with [`store_before`](Self::store_before) and
    /// [`store_after`](Self::store_after).
    pub fn clean_with_trace(&self, text: &str) -> Result<CleanTrace> {
        self.run(text, self.store_before, self.store_after)
    }

    /// Clean many texts in parallel. Output order matches input order.
    pub fn clean_batch<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.clean(text.as_ref())).collect()
    }

    fn run(&self, text: &str, store_before: bool, store_after: bool) -> Result<CleanTrace> {
        let before = Self::apply_filters(text, &self.before_filters, store_before)?;
        let after_stopwords = self.remove_stop_words(&before.text)?;
        let after = Self::apply_filters(&after_stopwords, &self.after_filters, store_after)?;

        log::debug!(
            "cleaned {} bytes into {} bytes",
            text.len(),
            after.text.len()
        );

        Ok(CleanTrace {
            input: text.to_string(),
            before: before.stages,
            after_stopwords,
            after: after.stages,
            output: after.text,
        })
    }
}

impl std::fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCleaner")
            .field("tokenizer", &self.tokenizer.name())
            .field("stopwords", &self.stopwords.len())
            .field("match_mode", &self.stop_filter.mode())
            .field(
                "before_filters",
                &self
                    .before_filters
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .field(
                "after_filters",
                &self
                    .after_filters
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .field("store_before", &self.store_before)
            .field("store_after", &self.store_after)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::{
        EncodeCharFilter, FnCharFilter, LowercaseCharFilter, PatternReplaceCharFilter,
    };
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_remove_stop_words() {
        let cleaner = TextCleaner::new(["the", "a", "good and bad"]).unwrap();
        let out = cleaner
            .remove_stop_words("The plan was a Good and Bad one")
            .unwrap();
        assert_eq!(out, "plan was one");
    }

    #[test]
    fn test_punctuation_is_space_separated() {
        let cleaner = TextCleaner::new(Vec::<String>::new()).unwrap();
        assert_eq!(cleaner.clean("using space!").unwrap(), "using space !");
    }

    #[test]
    fn test_clean_opt_none() {
        let cleaner = TextCleaner::new(["x"]).unwrap();
        assert_eq!(cleaner.clean_opt(None).unwrap(), "");
        assert_eq!(cleaner.clean_opt(Some("x y")).unwrap(), "y");
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::new(["the"]).unwrap();
        assert_eq!(cleaner.clean("").unwrap(), "");
        assert_eq!(cleaner.clean("the THE").unwrap(), "");
    }

    #[test]
    fn test_filter_order() {
        let cleaner = TextCleaner::new(["ab"])
            .unwrap()
            .add_before_filter(Arc::new(FnCharFilter::new("append_b", |t| format!("{t}b"))))
            .add_before_filter(Arc::new(LowercaseCharFilter::new()));

        // "A" -> "Ab" -> "ab" -> removed
        assert_eq!(cleaner.clean("A").unwrap(), "");
    }

    #[test]
    fn test_apply_filters_intermediate() {
        let filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(PatternReplaceCharFilter::numeric()),
            Arc::new(PatternReplaceCharFilter::multiple_space()),
        ];

        let run = TextCleaner::apply_filters("a 1 2 b", &filters, true).unwrap();
        assert_eq!(run.text, "a b");
        assert_eq!(run.stages.len(), 2);
        assert_eq!(run.stages[0].filter, "numeric");
        assert_eq!(run.stages[0].text, "a   b");
        assert_eq!(run.stages[1].text, "a b");

        let run = TextCleaner::apply_filters("a 1 2 b", &filters, false).unwrap();
        assert_eq!(run.text, "a b");
        assert!(run.stages.is_empty());

        let run = TextCleaner::apply_filters("same", &[], true).unwrap();
        assert_eq!(run.text, "same");
    }

    #[test]
    fn test_clean_with_trace() {
        let cleaner = TextCleaner::new(["the"])
            .unwrap()
            .add_before_filter(Arc::new(EncodeCharFilter::ascii()))
            .add_after_filter(Arc::new(PatternReplaceCharFilter::consecutive_sentence_end()))
            .store_before(true);

        let trace = cleaner.clean_with_trace("the café..").unwrap();
        assert_eq!(trace.input, "the café..");
        assert_eq!(trace.before.len(), 1);
        assert_eq!(trace.before[0].text, "the caf..");
        assert_eq!(trace.after_stopwords, "caf ..");
        assert!(trace.after.is_empty());
        assert_eq!(trace.output, "caf ");
        assert_eq!(cleaner.clean("the café..").unwrap(), trace.output);
    }

    #[test]
    fn test_with_tokenizer_rebuilds_index() {
        let cleaner = TextCleaner::new(["space!"]).unwrap();
        assert_eq!(cleaner.index().lengths(), vec![2]);

        let cleaner = cleaner
            .with_tokenizer(Arc::new(WhitespaceTokenizer::new()))
            .unwrap();
        assert_eq!(cleaner.index().lengths(), vec![1]);
        assert_eq!(cleaner.clean("use space! now").unwrap(), "use now");
    }

    #[test]
    fn test_is_stop_word() {
        let cleaner = TextCleaner::new(["good and bad"]).unwrap();
        assert!(cleaner.is_stop_word("GOOD and bad").unwrap());
        assert!(!cleaner.is_stop_word("good").unwrap());

        let fuzzy = cleaner.match_mode(MatchMode::fuzzy());
        assert!(fuzzy.is_stop_word("good and bat").unwrap());
    }

    #[test]
    fn test_clean_batch_keeps_order() {
        let cleaner = TextCleaner::new(["the"]).unwrap();
        let texts: Vec<String> = (0..50).map(|i| format!("the item {i}")).collect();

        let cleaned = cleaner.clean_batch(&texts).unwrap();
        assert_eq!(cleaned.len(), 50);
        assert_eq!(cleaned[0], "item 0");
        assert_eq!(cleaned[49], "item 49");
    }

    #[test]
    fn test_strict_encoding_error_propagates() {
        use crate::analysis::char_filter::{EncodeErrors, Encoding};
        use crate::error::ScourError;

        let cleaner = TextCleaner::new(["the"]).unwrap().add_before_filter(Arc::new(
            EncodeCharFilter::new(Encoding::Ascii, EncodeErrors::Strict),
        ));
        assert!(matches!(
            cleaner.clean("naïve").unwrap_err(),
            ScourError::Encoding(_)
        ));
    }
}
