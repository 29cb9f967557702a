//! Levenshtein edit distance and similarity.
//!
//! Used by fuzzy stopword matching, where a token span counts as a stopword
//! when it is close enough to one of the indexed phrases.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one string into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2_chars.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.len().abs_diff(s2_chars.len()) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[s2_chars.len()];
    (distance <= threshold).then_some(distance)
}

/// Similarity ratio between 0.0 and 1.0; 1.0 means identical strings.
pub fn levenshtein_ratio(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(s1, s2);
    1.0 - (distance as f64 / max_len as f64)
}

/// Check whether two strings have a similarity ratio of at least `cutoff`.
pub fn is_similar(s1: &str, s2: &str, cutoff: f64) -> bool {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return true;
    }

    // ratio >= cutoff  <=>  distance <= (1 - cutoff) * max_len
    let allowed = ((1.0 - cutoff).max(0.0) * max_len as f64 + 1e-9).floor() as usize;
    levenshtein_distance_threshold(s1, s2, allowed).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "", 0), Some(0));
    }

    #[test]
    fn test_levenshtein_ratio() {
        assert!((levenshtein_ratio("", "") - 1.0).abs() < 1e-6);
        assert!((levenshtein_ratio("abc", "abc") - 1.0).abs() < 1e-6);
        assert!((levenshtein_ratio("abc", "def") - 0.0).abs() < 1e-6);
        assert!((levenshtein_ratio("good and bad", "good and bat") - 11.0 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_similar_matches_ratio() {
        // 1 edit over 10 chars is exactly 0.9
        assert!(is_similar("abcdefghij", "abcdefghiX", 0.9));
        assert!(!is_similar("abcdefghij", "abcdefghXX", 0.9));
        assert!(is_similar("the", "the", 1.0));
        assert!(!is_similar("the", "thy", 1.0));
        assert!(is_similar("anything", "else", 0.0));
    }
}
