use dotenvy::dotenv;

use kosha_backend::dictionaries::DictionaryId;
use kosha_backend::lipi::Scheme;
use kosha_backend::markup::MarkupParser;
use kosha_backend::types::{LanguageValue, ScriptCode};

pub fn test_setup() {
    dotenv().ok();
    kosha_backend::init_engine().expect("dictionary table is valid");
}

#[allow(dead_code)]
pub fn lv(language: ScriptCode, value: &str) -> LanguageValue {
    LanguageValue::new(language, value)
}

#[allow(dead_code)]
pub fn render(dictionary: DictionaryId, markup: &str, to: Scheme, headword: Option<&str>) -> String {
    MarkupParser::for_dictionary(dictionary)
        .parse(markup, to, headword)
        .markdown
}

/// Canonical IAST strings known to survive a round trip through every scheme.
#[allow(dead_code)]
pub const ROUND_TRIP_FIXTURES: &[&str] = &[
    "saṃskṛtam",
    "dharmakṣetre kurukṣetre",
    "gāyatrī",
    "oṃ gaṇeśāya namaḥ",
    "jñānam",
    "ṛṣiḥ",
    "vāyuḥ",
    "aiśvaryam",
    "kauśalyā",
    "buddhiḥ",
    "pañcatantram",
];
