mod helpers;
use helpers as h;

use kosha_backend::lipi::{convert, transliterate, try_convert, Scheme, TransliterationError};

#[test]
fn test_round_trip_through_every_scheme() {
    h::test_setup();
    for fixture in h::ROUND_TRIP_FIXTURES {
        for scheme in Scheme::ALL {
            let there = transliterate(fixture, Scheme::Iast, scheme);
            let back = transliterate(&there, scheme, Scheme::Iast);
            assert_eq!(&back, fixture, "via {} ({})", scheme, there);
        }
    }
}

#[test]
fn test_round_trip_between_brahmic_scripts() {
    h::test_setup();
    for fixture in h::ROUND_TRIP_FIXTURES {
        let deva = transliterate(fixture, Scheme::Iast, Scheme::Devanagari);
        let telu = transliterate(&deva, Scheme::Devanagari, Scheme::Telugu);
        assert_eq!(transliterate(&telu, Scheme::Telugu, Scheme::Devanagari), deva);
    }
}

#[test]
fn test_known_spellings() {
    h::test_setup();
    assert_eq!(transliterate("kṛṣṇa", Scheme::Iast, Scheme::Devanagari), "कृष्ण");
    assert_eq!(transliterate("kṛṣṇa", Scheme::Iast, Scheme::Telugu), "కృష్ణ");
    assert_eq!(transliterate("kRRiShNa", Scheme::Itrans, Scheme::Iast), "kṛṣṇa");
    assert_eq!(transliterate("kfzRa", Scheme::Slp1, Scheme::Iast), "kṛṣṇa");
    assert_eq!(transliterate("kRSNa", Scheme::HarvardKyoto, Scheme::Iast), "kṛṣṇa");
}

#[test]
fn test_unknown_characters_pass_through() {
    h::test_setup();
    assert_eq!(transliterate("agni, (1)", Scheme::Iast, Scheme::Devanagari), "अग्नि, (१)");
    assert_eq!(transliterate("x — y", Scheme::Slp1, Scheme::Iast), "ḷ — y");
}

#[test]
fn test_deterministic() {
    h::test_setup();
    let a = transliterate("धर्मक्षेत्रे कुरुक्षेत्रे", Scheme::Devanagari, Scheme::Telugu);
    let b = transliterate("धर्मक्षेत्रे कुरुक्षेत्रे", Scheme::Devanagari, Scheme::Telugu);
    assert_eq!(a, b);
}

#[test]
fn test_convert_never_fails() {
    h::test_setup();
    assert_eq!(convert("yoga", "iast", "devanagari"), "योग");
    assert_eq!(convert("yoga", "iast", "tamil"), "yoga");
    assert_eq!(convert("", "iast", "telugu"), "");
    assert_eq!(
        try_convert("yoga", "pinyin", "iast"),
        Err(TransliterationError::UnknownScheme("pinyin".to_string()))
    );
}
