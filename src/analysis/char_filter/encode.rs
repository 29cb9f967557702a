//! Re-encoding text into a narrower character set.
//!
//! Characters the target encoding cannot represent are dropped, replaced with
//! `?`, or rejected, depending on [`EncodeErrors`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::CharFilter;
use crate::error::{Result, ScourError};

/// Target character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// U+0000..=U+007F
    #[default]
    Ascii,
    /// U+0000..=U+00FF
    Latin1,
}

impl Encoding {
    fn can_encode(self, c: char) -> bool {
        match self {
            Encoding::Ascii => c.is_ascii(),
            Encoding::Latin1 => (c as u32) <= 0xFF,
        }
    }
}

/// What to do with characters the target encoding cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodeErrors {
    /// Drop them.
    #[default]
    Ignore,
    /// Substitute `?`.
    Replace,
    /// Fail with [`ScourError::Encoding`].
    Strict,
}

/// Re-encode `text` into `encoding`.
///
/// # Examples
///
/// ```
/// use scour::analysis::char_filter::{EncodeErrors, Encoding, encode_text};
///
/// let text = encode_text("python 2´7¡", Encoding::Ascii, EncodeErrors::Ignore).unwrap();
/// assert_eq!(text, "python 27");
/// ```
pub fn encode_text(text: &str, encoding: Encoding, errors: EncodeErrors) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        if encoding.can_encode(c) {
            out.push(c);
            continue;
        }
        match errors {
            EncodeErrors::Ignore => {}
            EncodeErrors::Replace => out.push('?'),
            EncodeErrors::Strict => {
                return Err(ScourError::encoding(format!(
                    "character {c:?} at byte {offset} cannot be encoded as {encoding:?}"
                )));
            }
        }
    }
    Ok(out)
}

/// Render any displayable value (numbers included) and re-encode it.
pub fn encode_value<T: Display>(value: T, encoding: Encoding, errors: EncodeErrors) -> Result<String> {
    encode_text(&value.to_string(), encoding, errors)
}

/// A char filter wrapping [`encode_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeCharFilter {
    encoding: Encoding,
    errors: EncodeErrors,
}

impl EncodeCharFilter {
    pub fn new(encoding: Encoding, errors: EncodeErrors) -> Self {
        Self { encoding, errors }
    }

    /// ASCII, dropping everything else.
    pub fn ascii() -> Self {
        Self::default()
    }
}

impl CharFilter for EncodeCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        encode_text(input, self.encoding, self.errors)
    }

    fn name(&self) -> &str {
        "encode"
    }
}
