//! # Hikari
//!
//! Link the words of a Japanese vocabulary list through the kanji they share.
//!
//! ## Features
//!
//! - Codepoint-range kanji classification, no dictionary needed
//! - Kanji -> words index and word -> related words index
//! - Insertion-ordered, deterministic output
//! - Plain text word lists and jpdb review exports as input

pub mod cli;
pub mod error;
pub mod index;
pub mod kanji;
pub mod source;

pub mod prelude {
    pub use crate::error::{HikariError, Result};
    pub use crate::index::{Indexer, KanjiIndex, build};
    pub use crate::kanji::{extract_components, is_kanji};
    pub use crate::source::{DelimitedTextSource, JpdbExportSource, WordSource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
