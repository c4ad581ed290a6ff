//! Character classification for Japanese vocabulary.
//!
//! Kanji are detected purely by Unicode codepoint ranges; no dictionary or
//! locale data is consulted. Every character classifies to either kanji or
//! not kanji, so nothing in this module can fail.
//!
//! # Examples
//!
//! ```
//! use hikari::kanji::{extract_components, is_kanji};
//!
//! assert!(is_kanji('食'));
//! assert!(!is_kanji('べ'));
//!
//! let components = extract_components("食べ物");
//! assert_eq!(components.as_slice(), &['食', '物']);
//! ```

use crate::index::ordered::OrderedSet;

/// The distinct kanji of a word, in order of first occurrence.
pub type KanjiSet = OrderedSet<char>;

/// Returns `true` iff `c` is a CJK ideograph.
pub fn is_kanji(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}' | // CJK Extension E
        '\u{2CEB0}'..='\u{2EBEF}' | // CJK Extension F
        '\u{2F800}'..='\u{2FA1F}' | // CJK Compatibility Ideographs Supplement
        '\u{30000}'..='\u{3134F}'   // CJK Extension G
    )
}

/// Returns `true` iff `c` is hiragana or katakana.
pub fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{309F}' | // Hiragana
        '\u{30A0}'..='\u{30FF}'   // Katakana
    )
}

/// Returns `true` iff `c` is kanji, hiragana or katakana.
pub fn is_japanese(c: char) -> bool {
    is_kanji(c) || is_kana(c)
}

/// Returns `true` iff `word` contains at least one kanji.
pub fn has_kanji(word: &str) -> bool {
    word.chars().any(is_kanji)
}

/// Collect the distinct kanji of `word`.
///
/// Non-kanji characters (kana, Latin letters, digits, punctuation) are
/// ignored. An empty result marks the word as non-kanji.
pub fn extract_components(word: &str) -> KanjiSet {
    word.chars().filter(|&c| is_kanji(c)).collect()
}
