//! Closure-backed filter for arbitrary user transformations.

use std::fmt;
use std::sync::Arc;

use super::CharFilter;
use crate::error::Result;

type TextFn = dyn Fn(&str) -> String + Send + Sync;

/// Wraps any `Fn(&str) -> String` as a [`CharFilter`].
///
/// # Examples
///
/// ```
/// use scour::analysis::char_filter::{CharFilter, FnCharFilter};
///
/// let shout = FnCharFilter::new("shout", |text| text.to_uppercase());
/// assert_eq!(shout.filter("hey").unwrap(), "HEY");
/// assert_eq!(shout.name(), "shout");
/// ```
#[derive(Clone)]
pub struct FnCharFilter {
    name: String,
    func: Arc<TextFn>,
}

impl FnCharFilter {
    pub fn new<S, F>(name: S, func: F) -> Self
    where
        S: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        FnCharFilter {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl CharFilter for FnCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok((self.func)(input))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for FnCharFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCharFilter").field("name", &self.name).finish()
    }
}
