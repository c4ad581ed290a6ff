//! jpdb review export word source.
//!
//! Reads the JSON produced by jpdb's data export:
//! ```json
//! {
//!   "cards_vocabulary_jp_en": [
//!     { "vid": 1, "spelling": "今朝", "reading": "けさ", "reviews": [] }
//!   ],
//!   "cards_vocabulary_en_jp": [],
//!   "cards_kanji_keyword_char": [],
//!   "cards_kanji_char_keyword": []
//! }
//! ```
//! Only the Japanese-to-English vocabulary cards are used; each card's
//! spelling becomes one word.

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::WordSource;

use crate::error::{HikariError, Result};

/// Key of the Japanese-to-English vocabulary deck in the export.
pub const VOCABULARY_CARDS_KEY: &str = "cards_vocabulary_jp_en";

/// A single vocabulary card from the export.
///
/// Only the spelling is read; ids, readings and review history are ignored
/// whatever their type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyCard {
    /// Kanji or kana spelling of the word.
    #[serde(default)]
    pub spelling: Option<String>,
}

/// A source that extracts vocabulary spellings from a jpdb export.
#[derive(Clone, Debug, Default)]
pub struct JpdbExportSource;

impl JpdbExportSource {
    /// Create a new jpdb export source.
    pub fn new() -> Self {
        JpdbExportSource
    }

    /// Parse the vocabulary cards out of an export document.
    pub fn parse_cards(&self, input: &str) -> Result<Vec<VocabularyCard>> {
        let mut export: Map<String, Value> = serde_json::from_str(input)?;

        let cards = export.remove(VOCABULARY_CARDS_KEY).ok_or_else(|| {
            let keys: Vec<&str> = export.keys().map(String::as_str).collect();
            HikariError::export(format!(
                "key '{VOCABULARY_CARDS_KEY}' not found (available keys: {keys:?})"
            ))
        })?;

        Ok(serde_json::from_value(cards)?)
    }
}

impl WordSource for JpdbExportSource {
    fn read_words(&self, input: &str) -> Result<Vec<String>> {
        let cards = self.parse_cards(input)?;
        let total = cards.len();

        let words: Vec<String> = cards
            .into_iter()
            .filter_map(|card| card.spelling)
            .filter(|spelling| !spelling.is_empty())
            .collect();

        debug!("Read {} spellings from {} vocabulary cards", words.len(), total);
        Ok(words)
    }

    fn name(&self) -> &'static str {
        "jpdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_spellings() {
        let export = r#"{
            "cards_vocabulary_jp_en": [
                {"vid": 1, "spelling": "今朝", "reading": "けさ", "reviews": [{"timestamp": 1, "grade": "okay", "from_anki": false}]},
                {"vid": 2, "spelling": "かな", "reading": "かな", "reviews": []},
                {"vid": 3, "spelling": "食べる", "reading": "たべる", "reviews": []}
            ],
            "cards_vocabulary_en_jp": [],
            "cards_kanji_keyword_char": [],
            "cards_kanji_char_keyword": []
        }"#;

        let words = JpdbExportSource::new().read_words(export).unwrap();
        assert_eq!(words, vec!["今朝", "かな", "食べる"]);
    }

    #[test]
    fn test_missing_or_empty_spelling_skipped() {
        let export = r#"{
            "cards_vocabulary_jp_en": [
                {"vid": 1},
                {"vid": 2, "spelling": null},
                {"vid": 3, "spelling": ""},
                {"vid": 4, "spelling": "山"}
            ]
        }"#;

        let words = JpdbExportSource::new().read_words(export).unwrap();
        assert_eq!(words, vec!["山"]);
    }

    #[test]
    fn test_other_card_fields_ignored() {
        let export = r#"{
            "cards_vocabulary_jp_en": [
                {"vid": "1", "spelling": "山", "reading": 7},
                {"vid": 2, "spelling": "火山", "reading": null, "reviews": "none"}
            ]
        }"#;

        let words = JpdbExportSource::new().read_words(export).unwrap();
        assert_eq!(words, vec!["山", "火山"]);
    }

    #[test]
    fn test_missing_vocabulary_key() {
        let export = r#"{"cards_kanji_keyword_char": []}"#;
        let error = JpdbExportSource::new().read_words(export).unwrap_err();

        match error {
            HikariError::Export(msg) => {
                assert!(msg.contains(VOCABULARY_CARDS_KEY));
                assert!(msg.contains("cards_kanji_keyword_char"));
            }
            other => panic!("Expected Export error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let error = JpdbExportSource::new().read_words("{not json").unwrap_err();
        assert!(matches!(error, HikariError::Json(_)));

        let error = JpdbExportSource::new().read_words("[1, 2]").unwrap_err();
        assert!(matches!(error, HikariError::Json(_)));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(JpdbExportSource::new().name(), "jpdb");
    }
}
