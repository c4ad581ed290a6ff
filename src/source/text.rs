//! Delimited text word source.

use super::WordSource;

use crate::error::{HikariError, Result};
use crate::kanji::is_japanese;

/// A source that splits plain text into words.
///
/// Without a delimiter the text is split on any run of Unicode whitespace
/// (including the ideographic space U+3000). With a delimiter it is split on
/// that exact string and line breaks at either end of a piece are trimmed.
/// Empty pieces are dropped either way.
#[derive(Clone, Debug, Default)]
pub struct DelimitedTextSource {
    delimiter: Option<String>,
}

impl DelimitedTextSource {
    /// Create a source that splits on whitespace.
    pub fn new() -> Self {
        DelimitedTextSource { delimiter: None }
    }

    /// Create a source that splits on `delimiter`.
    ///
    /// The delimiter must be non-empty and must not contain kanji or kana,
    /// since that would cut vocabulary words apart.
    pub fn with_delimiter<S: Into<String>>(delimiter: S) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(HikariError::invalid_argument("delimiter cannot be empty"));
        }
        if delimiter.chars().any(is_japanese) {
            return Err(HikariError::invalid_argument(format!(
                "delimiter（{delimiter}）cannot be a japanese character"
            )));
        }
        Ok(DelimitedTextSource {
            delimiter: Some(delimiter),
        })
    }

    /// Create a source from an optional delimiter.
    pub fn from_option(delimiter: Option<&str>) -> Result<Self> {
        match delimiter {
            Some(delimiter) => Self::with_delimiter(delimiter),
            None => Ok(Self::new()),
        }
    }

    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }
}

impl WordSource for DelimitedTextSource {
    fn read_words(&self, input: &str) -> Result<Vec<String>> {
        let words = match &self.delimiter {
            Some(delimiter) => input
                .split(delimiter.as_str())
                .map(|word| word.trim_matches(['\r', '\n']))
                .filter(|word| !word.is_empty())
                .map(str::to_string)
                .collect(),
            None => input.split_whitespace().map(str::to_string).collect(),
        };
        Ok(words)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
