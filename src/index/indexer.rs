//! Kanji component and related-word indexing.
//!
//! The [`Indexer`] turns an ordered list of vocabulary words into two lookup
//! tables:
//!
//! - `components`: kanji -> every word containing that kanji
//! - `related_words`: word -> every other word sharing at least one kanji
//!
//! Words without any kanji are ignored entirely. Words mixing kanji and kana
//! (e.g. 楽しい) are indexed through their kanji only. Keys and values keep
//! the order in which they were first seen in the input.
//!
//! # Examples
//!
//! ```
//! use hikari::index::indexer::Indexer;
//!
//! let index = Indexer::new().build(["今朝", "朝食", "かな"]);
//!
//! assert_eq!(index.components.get(&'朝').unwrap().as_slice(), &["今朝", "朝食"]);
//! assert_eq!(index.related_words.get("朝食").unwrap().as_slice(), &["今朝"]);
//! assert!(!index.related_words.contains_key("かな"));
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::index::ordered::{OrderedMap, OrderedSet};
use crate::kanji::{KanjiSet, extract_components};

/// Kanji -> words containing it.
pub type ComponentsIndex = OrderedMap<char, OrderedSet<String>>;

/// Word -> other words sharing at least one kanji with it.
pub type RelatedWordsIndex = OrderedMap<String, OrderedSet<String>>;

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Input words consumed, duplicates and non-kanji words included.
    pub words_read: usize,
    /// Distinct words with at least one kanji.
    pub indexed_words: usize,
    /// Occurrences dropped because they contain no kanji.
    pub skipped_words: usize,
    /// Repeated occurrences of an already indexed word.
    pub duplicate_words: usize,
    /// Distinct kanji keys.
    pub components: usize,
    /// Unordered word pairs sharing a kanji.
    pub related_pairs: usize,
}

/// The result of a build: both lookup tables.
///
/// Serializes to `{"components": {...}, "related_words": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KanjiIndex {
    pub components: ComponentsIndex,
    pub related_words: RelatedWordsIndex,
    #[serde(skip)]
    stats: IndexStats,
}

impl KanjiIndex {
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Split into the `(components, related_words)` pair.
    pub fn into_parts(self) -> (ComponentsIndex, RelatedWordsIndex) {
        (self.components, self.related_words)
    }
}

/// Builds [`KanjiIndex`]es from word lists.
///
/// Building is a pure batch transform: the whole input is consumed before
/// anything is returned and no state survives between calls.
#[derive(Clone, Debug, Default)]
pub struct Indexer;

impl Indexer {
    /// Create a new indexer.
    pub fn new() -> Self {
        Indexer
    }

    /// Index `words`, preserving input order for keys and values.
    pub fn build<I, S>(&self, words: I) -> KanjiIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = IndexStats::default();
        let entries = Self::collect_entries(words, &mut stats);

        let components = Self::build_components(&entries);
        let related_words = Self::build_related_words(&entries, &mut stats);

        stats.indexed_words = entries.len();
        stats.components = components.len();

        info!(
            "Indexed {} of {} words: {} components, {} related pairs",
            stats.indexed_words, stats.words_read, stats.components, stats.related_pairs
        );
        debug!(
            "components (first 5): {:?}",
            components.iter().take(5).collect::<Vec<_>>()
        );
        debug!(
            "related_words (first 5): {:?}",
            related_words.iter().take(5).collect::<Vec<_>>()
        );

        KanjiIndex {
            components,
            related_words,
            stats,
        }
    }

    /// Extract the kanji set of every distinct word, dropping non-kanji words.
    fn collect_entries<I, S>(words: I, stats: &mut IndexStats) -> OrderedMap<String, KanjiSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: OrderedMap<String, KanjiSet> = OrderedMap::new();

        for word in words {
            let word = word.as_ref();
            stats.words_read += 1;

            if entries.contains_key(word) {
                stats.duplicate_words += 1;
                continue;
            }

            let components = extract_components(word);
            if components.is_empty() {
                stats.skipped_words += 1;
                continue;
            }

            entries.insert(word.to_string(), components);
        }

        entries
    }

    fn build_components(entries: &OrderedMap<String, KanjiSet>) -> ComponentsIndex {
        let mut components = ComponentsIndex::new();

        for (word, kanji) in entries.iter() {
            for &component in kanji {
                components.entry_or_default(component).insert(word.clone());
            }
        }

        components
    }

    fn build_related_words(
        entries: &OrderedMap<String, KanjiSet>,
        stats: &mut IndexStats,
    ) -> RelatedWordsIndex {
        let mut related_words = RelatedWordsIndex::new();

        // Every indexed word is a key, even with no relations.
        for word in entries.keys() {
            related_words.entry_or_default(word.clone());
        }

        let entries: Vec<(&String, &KanjiSet)> = entries.iter().collect();
        for (i, &(word, kanji)) in entries.iter().enumerate() {
            for &(other, other_kanji) in &entries[i + 1..] {
                if kanji.is_disjoint(other_kanji) {
                    continue;
                }

                stats.related_pairs += 1;
                if let Some(related) = related_words.get_mut(word.as_str()) {
                    related.insert(other.clone());
                }
                if let Some(related) = related_words.get_mut(other.as_str()) {
                    related.insert(word.clone());
                }
            }
        }

        related_words
    }
}

/// Build both indexes from `words`.
///
/// Equivalent to `Indexer::new().build(words).into_parts()`.
pub fn build<I, S>(words: I) -> (ComponentsIndex, RelatedWordsIndex)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Indexer::new().build(words).into_parts()
}
