//! Case and whitespace trimming filters.

use super::CharFilter;
use crate::error::Result;

/// Lower-cases the whole text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok(input.to_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

/// Strips leading and trailing whitespace.
#[derive(Clone, Debug, Default)]
pub struct TrimCharFilter;

impl TrimCharFilter {
    pub fn new() -> Self {
        TrimCharFilter
    }
}

impl CharFilter for TrimCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok(input.trim().to_string())
    }

    fn name(&self) -> &str {
        "trim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(LowercaseCharFilter::new().filter("ÀB c").unwrap(), "àb c");
    }

    #[test]
    fn test_trim() {
        assert_eq!(TrimCharFilter::new().filter("\n  text \t").unwrap(), "text");
    }
}
