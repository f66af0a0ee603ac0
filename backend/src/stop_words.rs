use std::collections::HashSet;

use lazy_static::lazy_static;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "may", "me", "might", "more", "most", "much", "must", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "thus", "to", "too", "under", "until", "up",
    "upon", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
    // Abbreviations common in dictionary glosses.
    "cf", "comp", "esp", "lit", "ibid", "viz", "see",
];

const SANSKRIT_DEVANAGARI: &[&str] = &[
    "च", "वा", "एव", "हि", "तु", "अपि", "इति", "न", "सह", "तथा", "यथा", "इव", "किम्", "तत्",
    "यत्", "सः", "सा", "ते", "तस्य", "तस्मात्", "अथ", "एवम्", "पुनः", "खलु", "ननु", "यदि",
    "तदा", "यदा", "कदा", "अत्र", "तत्र", "यत्र", "इह", "अतः", "अहम्", "त्वम्", "वयम्", "एतत्",
    "इदम्", "अयम्", "इयम्", "सर्व", "किंचित्", "चैव", "नाम", "स्म",
];

const SANSKRIT_ROMAN: &[&str] = &[
    // IAST
    "ca", "vā", "eva", "hi", "tu", "api", "iti", "na", "saha", "tathā", "yathā", "iva",
    "kim", "tat", "yat", "saḥ", "sā", "te", "tasya", "tasmāt", "atha", "evam", "punaḥ",
    "khalu", "nanu", "yadi", "tadā", "yadā", "kadā", "atra", "tatra", "yatra", "iha", "ataḥ",
    "aham", "tvam", "vayam", "etat", "idam", "ayam", "iyam", "sarva", "kiṃcit", "caiva",
    "nāma", "sma",
    // ITRANS / Harvard-Kyoto / SLP1 spellings, lowercased
    "cha", "chaiva", "vaa", "va", "tathaa", "tatha", "yathaa", "yatha", "sah", "saa", "tasmaat", "tasmat",
    "punah", "tadaa", "tada", "yadaa", "yada", "kadaa", "kada", "atah", "kiMchit", "kimcit",
    "kiMcit", "kinchit", "naama", "nama",
];

const TELUGU: &[&str] = &[
    "మరియు", "ఒక", "ఈ", "ఆ", "అని", "కూడా", "లో", "కు", "నుండి", "తో", "వరకు", "మీద", "గురించి",
    "కాని", "కానీ", "లేదా", "అది", "ఇది", "అవి", "ఇవి", "వారు", "నేను", "మేము", "మీరు", "అతను",
    "ఆమె", "చేసి", "ఉంది", "ఉన్న", "అయిన", "అనగా", "అంటే",
    // Transliterated
    "mariyu", "oka", "ani", "kuuda", "kooda", "kuda", "nundi", "varaku", "miida", "meeda",
    "gurinchi", "kaani", "kani", "leda", "ledaa", "adi", "idi", "avi", "ivi", "vaaru", "varu",
    "nenu", "memu", "meeru", "miiru", "atanu", "aame", "chesi", "undi", "unna", "ayina",
    "anagaa", "anaga", "ante", "aMTe",
];

lazy_static! {
    pub static ref STOP_WORDS: HashSet<String> = ENGLISH
        .iter()
        .chain(SANSKRIT_DEVANAGARI)
        .chain(SANSKRIT_ROMAN)
        .chain(TELUGU)
        .map(|w| w.to_lowercase())
        .collect();
}

/// Expects an already lowercased token.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
