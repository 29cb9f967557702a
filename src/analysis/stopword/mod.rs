//! N-gram stopword indexing and matching.
//!
//! Stopwords here are phrases of one or more tokens. They are grouped by how
//! many tokens they contain, so matching only ever compares a span of `n`
//! input tokens against the phrases that are `n` tokens long.
//!
//! ```text
//! ["the", "a", "good and bad"]
//!        │ tokenize + lower-case
//!        ▼
//! 1 → {"the", "a"}
//! 3 → {"good and bad"}
//! ```

pub mod index;
pub mod matcher;

pub use index::StopwordIndex;
pub use matcher::{DEFAULT_FUZZY_CUTOFF, MatchMode};
