//! Word sources for building kanji indexes.
//!
//! A [`WordSource`] turns raw input (a plain word list or a vocabulary export)
//! into the ordered list of words handed to the
//! [`Indexer`](crate::index::Indexer). Sources keep every non-empty word,
//! including kana-only ones; filtering happens during indexing.
//!
//! # Available Sources
//!
//! - [`text::DelimitedTextSource`] - Splits text on whitespace or a custom delimiter
//! - [`jpdb::JpdbExportSource`] - Reads vocabulary spellings from a jpdb review export

use std::fs;
use std::path::Path;

use crate::error::Result;

pub mod jpdb;
pub mod text;

pub use jpdb::JpdbExportSource;
pub use text::DelimitedTextSource;

/// Trait for sources that yield an ordered list of vocabulary words.
pub trait WordSource: Send + Sync {
    /// Extract words from already loaded input, in input order.
    fn read_words(&self, input: &str) -> Result<Vec<String>>;

    /// Get the name of this source (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Read a UTF-8 file and extract its words.
    fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        let input = fs::read_to_string(path)?;
        self.read_words(&input)
    }
}
