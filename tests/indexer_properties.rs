//! Integration tests for the invariants of the kanji indexes.

use hikari::index::{ComponentsIndex, Indexer, RelatedWordsIndex, build};
use hikari::kanji::{extract_components, has_kanji};

fn vocabulary() -> Vec<&'static str> {
    vec![
        "今朝", "今晩", "朝食", "食べる", "楽しい", "かな", "english!", "大学", "学生", "先生",
        "生きる", "大きい", "小さい", "山", "山", "富士山", "火山", "火曜日", "日本", "本日",
        "ありがとう", "コーヒー", "123", "勉強", "強い", "音楽", "楽器", "食器", "人", "日本人",
    ]
}

fn build_vocabulary() -> (ComponentsIndex, RelatedWordsIndex) {
    build(vocabulary())
}

#[test]
fn test_non_kanji_words_absent_everywhere() {
    let (components, related_words) = build_vocabulary();

    for word in vocabulary().into_iter().filter(|w| !has_kanji(w)) {
        assert!(!related_words.contains_key(word), "{word} is a key");
        for related in related_words.values() {
            assert!(!related.contains(word), "{word} is a related value");
        }
        for words in components.values() {
            assert!(!words.contains(word), "{word} is a component value");
        }
    }
}

#[test]
fn test_every_kanji_word_is_a_key() {
    let (_, related_words) = build_vocabulary();

    for word in vocabulary().into_iter().filter(|w| has_kanji(w)) {
        assert!(related_words.contains_key(word), "{word} missing");
    }
}

#[test]
fn test_relation_is_symmetric_without_self_links() {
    let (_, related_words) = build_vocabulary();

    for (word, related) in related_words.iter() {
        assert!(!related.contains(word.as_str()), "{word} relates to itself");
        for other in related {
            let back = related_words.get(other.as_str()).unwrap();
            assert!(back.contains(word.as_str()), "{other} -> {word} missing");
        }
    }
}

#[test]
fn test_related_iff_sharing_kanji() {
    let (_, related_words) = build_vocabulary();

    for (word, related) in related_words.iter() {
        let kanji = extract_components(word);
        for (other, _) in related_words.iter().filter(|(other, _)| *other != word) {
            let shares = !kanji.is_disjoint(&extract_components(other));
            assert_eq!(related.contains(other.as_str()), shares, "{word} / {other}");
        }
    }
}

#[test]
fn test_components_are_exact() {
    let (components, related_words) = build_vocabulary();

    for (kanji, words) in components.iter() {
        let expected: Vec<&String> = related_words
            .keys()
            .filter(|word| word.contains(*kanji))
            .collect();
        let actual: Vec<&String> = words.iter().collect();
        assert_eq!(actual, expected, "component {kanji}");
    }
}

#[test]
fn test_no_duplicate_values() {
    let (components, related_words) = build_vocabulary();

    for words in components.values().chain(related_words.values()) {
        let mut seen = std::collections::HashSet::new();
        for word in words {
            assert!(seen.insert(word), "duplicate {word}");
        }
    }
}

#[test]
fn test_builds_are_independent_and_deterministic() {
    let indexer = Indexer::new();
    let first = indexer.build(vocabulary());
    let second = indexer.build(vocabulary());
    assert_eq!(first, second);

    let json_first = serde_json::to_string(&first).unwrap();
    let json_second = serde_json::to_string(&second).unwrap();
    assert_eq!(json_first, json_second);
}
