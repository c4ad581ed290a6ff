//! Index module for Hikari.
//!
//! This module provides the kanji indexer and the insertion-ordered
//! containers its output is built from.

pub mod indexer;
pub mod ordered;

// Re-export commonly used types
pub use indexer::{ComponentsIndex, IndexStats, Indexer, KanjiIndex, RelatedWordsIndex, build};
pub use ordered::{OrderedMap, OrderedSet};
