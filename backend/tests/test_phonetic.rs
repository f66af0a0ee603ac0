mod helpers;
use helpers as h;

use kosha_backend::phonetic::{generate_phonetic, PhoneticOptions};
use kosha_backend::stop_words::is_stop_word;
use kosha_backend::types::{LanguageValue, ScriptCode};

fn phonetic(word: &[LanguageValue], description: &[LanguageValue]) -> String {
    generate_phonetic(Some(word), Some(description), &PhoneticOptions::default())
}

#[test]
fn test_english_function_words_are_dropped() {
    h::test_setup();
    let out = phonetic(&[h::lv(ScriptCode::Eng, "the meditation and yoga")], &[]);
    let tokens: Vec<&str> = out.split(' ').collect();
    assert!(tokens.contains(&"meditation"));
    assert!(tokens.contains(&"yoga"));
    assert!(!tokens.contains(&"the"));
    assert!(!tokens.contains(&"and"));
}

#[test]
fn test_golden_survivors() {
    h::test_setup();
    // First spelling seen wins; later duplicates are dropped.
    let word = [h::lv(ScriptCode::San, "योग"), h::lv(ScriptCode::Iast, "yoga")];
    let description = [h::lv(ScriptCode::Eng, "Yoga: union of the self")];
    assert_eq!(phonetic(&word, &description), "योग yoga union self");

    let word = [h::lv(ScriptCode::Tel, "గాయత్రీ")];
    assert_eq!(phonetic(&word, &[]), "గాయత్రీ gayatri");

    let word = [h::lv(ScriptCode::Iast, "Kṛṣṇa"), h::lv(ScriptCode::Eng, "KRISHNA krishna")];
    assert_eq!(phonetic(&word, &[]), "kṛṣṇa krrishna kfzra krishna");
}

#[test]
fn test_markup_and_entities_are_cleaned() {
    h::test_setup();
    let description = [h::lv(ScriptCode::Eng, "**fire**, <i>flame</i> &amp; [light](http://x)")];
    assert_eq!(phonetic(&[], &description), "fire flame light http");
}

#[test]
fn test_filtering_invariants() {
    h::test_setup();
    let samples = [
        h::lv(ScriptCode::Eng, "a 12 345 of is it the and an union x1 yo"),
        h::lv(ScriptCode::San, "इति च वा एव धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ॥१॥"),
        h::lv(ScriptCode::Tel, "మరియు అని గాయత్రీ మంత్రం ౧౨"),
        h::lv(ScriptCode::Iast, "tathā iti ca dharma 2024"),
        h::lv(ScriptCode::Eng, &"z".repeat(60)),
    ];
    let out = phonetic(&samples, &samples);
    assert!(!out.is_empty());

    for token in out.split(' ') {
        assert!(token.chars().count() >= 3, "{:?}", token);
        assert!(token.chars().count() <= 50, "{:?}", token);
        assert!(!token.chars().all(char::is_numeric), "{:?}", token);
        assert!(!is_stop_word(token), "{:?}", token);
        assert_eq!(token, token.to_lowercase());
    }

    let tokens: Vec<&str> = out.split(' ').collect();
    let mut unique = tokens.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), tokens.len());
}

#[test]
fn test_deterministic() {
    h::test_setup();
    let word = [h::lv(ScriptCode::San, "अग्निमीळे पुरोहितं"), h::lv(ScriptCode::Iast, "agnim īḷe")];
    let description = [h::lv(ScriptCode::Eng, "I praise Agni, the household priest")];
    assert_eq!(phonetic(&word, &description), phonetic(&word, &description));
}

#[test]
fn test_max_source_length() {
    h::test_setup();
    let opts = PhoneticOptions { max_source_length: 12 };
    let word = [h::lv(ScriptCode::Eng, "meditation concentration")];
    assert_eq!(generate_phonetic(Some(&word), None, &opts), "meditation");
}

#[test]
fn test_absent_inputs() {
    h::test_setup();
    assert_eq!(generate_phonetic(None, None, &PhoneticOptions::default()), "");
}
