//! Regexes commonly used to scrub text around stopword removal.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of ASCII digits.
pub static RE_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("numeric pattern should be valid"));

/// Special characters and the spaces after them. `!?.;` are left alone since
/// they delimit sentences.
pub static RE_SPECIAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@#&$*(\[]+ *").expect("special char pattern should be valid"));

/// An apostrophe and the word character after it (`'s`, `'t`).
pub static RE_APOSTROPHE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"('\w)").expect("apostrophe pattern should be valid"));

/// Two or more consecutive sentence ends, left behind when a whole sentence
/// was removed.
pub static RE_CONSECUTIVE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\.|!|\?\s*){2,}").expect("sentence end pattern should be valid")
});

/// Two or more whitespace characters.
pub static RE_MULTIPLE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("multiple space pattern should be valid"));

/// Replace every match of `re` in `s` with `substitute`.
///
/// `substitute` may reference capture groups as `$1` or `${name}`.
pub fn strip_pattern(s: &str, re: &Regex, substitute: &str) -> String {
    re.replace_all(s, substitute).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        assert_eq!(strip_pattern("python 2 and 3.10", &RE_NUMERIC, ""), "python  and .");
    }

    #[test]
    fn test_special_char() {
        assert_eq!(
            strip_pattern("mail @ home #tag (note) [x]", &RE_SPECIAL_CHAR, ""),
            "mail home tag note) x]"
        );
        assert_eq!(strip_pattern("stop. go! why?", &RE_SPECIAL_CHAR, ""), "stop. go! why?");
    }

    #[test]
    fn test_apostrophe() {
        assert_eq!(strip_pattern("it's John's", &RE_APOSTROPHE, ""), "it John");
    }

    #[test]
    fn test_consecutive_sentence_end() {
        assert_eq!(strip_pattern("end . . next", &RE_CONSECUTIVE_SENTENCE_END, ""), "end . . next");
        assert_eq!(strip_pattern("end.. next", &RE_CONSECUTIVE_SENTENCE_END, ""), "end next");
        assert_eq!(strip_pattern("what?! now", &RE_CONSECUTIVE_SENTENCE_END, ""), "what now");
        assert_eq!(strip_pattern("one. two", &RE_CONSECUTIVE_SENTENCE_END, ""), "one. two");
    }

    #[test]
    fn test_multiple_space() {
        assert_eq!(strip_pattern("a  b \t\n c d", &RE_MULTIPLE_SPACE, " "), "a b c d");
    }

    #[test]
    fn test_capture_group_substitute() {
        let re = Regex::new(r"(\w+)@(\w+)").unwrap();
        assert_eq!(strip_pattern("user@host", &re, "$2"), "host");
    }
}
