//! Shared utility modules used across Scour components.

pub mod levenshtein;
