use five_letters::{load_words, parse_words, Error, Language};
use std::path::Path;

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/nouns.txt"))
}

#[test]
fn test_parse_word_normalizes() {
    let word = Language::Russian.parse_word("  КовЁр ").unwrap();
    assert_eq!(word.to_string(), "ковер");
    assert_eq!(word[3], 'е');
}

#[test]
fn test_parse_word_rejects_wrong_length() {
    for bad in ["кот", "ёлочка", ""] {
        assert!(
            matches!(
                Language::Russian.parse_word(bad),
                Err(Error::InvalidWord { .. })
            ),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_parse_word_rejects_foreign_letters() {
    assert!(Language::Russian.parse_word("ёж-ик").is_err());
    assert!(Language::Russian.parse_word("crane").is_err());
    assert!(Language::English.parse_word("лотос").is_err());
    assert!(Language::English.parse_word("CRANE").is_ok());
}

#[test]
fn test_word_letter_counts() {
    let word = Language::Russian.parse_word("казак").unwrap();
    assert_eq!(word.letter_counts(), vec![('к', 2), ('а', 2), ('з', 1)]);
    assert_eq!(word.count('а'), 2);
    assert!(word.contains('з'));
    assert!(!word.contains('о'));
}

#[test]
fn test_parse_words_filters_and_keeps_order() {
    let text = "лотос\nёж-ик\n\nКОВЁР\nкот\nберёза\nлотос\n";
    let words: Vec<String> = parse_words(text, Language::Russian)
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(words, ["лотос", "ковер", "лотос"]);
}

#[test]
fn test_load_fixture() {
    let words = load_words(fixture_path(), Language::Russian).unwrap();
    assert_eq!(words.len(), 215);
    assert_eq!(words[0].to_string(), "абзац");
    let rendered: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    assert!(rendered.contains(&"ерник".to_string()));
    assert!(rendered.iter().all(|w| !w.contains('ё')));
}

#[test]
fn test_load_missing_file() {
    let err = load_words("/nonexistent/words.txt", Language::Russian).unwrap_err();
    assert!(matches!(err, Error::Dictionary { .. }));
}
