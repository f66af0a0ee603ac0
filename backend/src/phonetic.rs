//! Search tokens across scripts.
//!
//! Every word and description value contributes its own tokens, and non-ASCII
//! text also contributes its ITRANS and SLP1 spellings, so that a query typed
//! in any of these finds the entry.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::helpers::{compact_whitespace, strip_html, truncate_chars};
use crate::lipi::{transliterate, Scheme};
use crate::stop_words::is_stop_word;
use crate::types::{LanguageValue, ScriptCode};

pub const DEFAULT_MAX_SOURCE_LENGTH: usize = 1000;
pub const MIN_TOKEN_LENGTH: usize = 3;
pub const MAX_TOKEN_LENGTH: usize = 50;

lazy_static! {
    static ref RE_PUNCT: Regex = Regex::new(r"[\p{P}\p{S}]+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticOptions {
    /// Longer source values are cut to this many characters before they are
    /// split into tokens.
    pub max_source_length: usize,
}

impl Default for PhoneticOptions {
    fn default() -> Self {
        PhoneticOptions {
            max_source_length: DEFAULT_MAX_SOURCE_LENGTH,
        }
    }
}

/// Letters, digits, combining diacritics and the Devanagari and Telugu blocks.
fn is_allowed_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(c,
            '\u{0300}'..='\u{036F}'
            | '\u{0900}'..='\u{097F}'
            | '\u{0C00}'..='\u{0C7F}'
            | '\u{1CD0}'..='\u{1CFF}'
            | '\u{A8E0}'..='\u{A8FF}')
}

fn is_plain_token(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Strip markup and entities, punctuation and symbols, then lowercase.
pub fn clean_text(text: &str) -> String {
    let s = strip_html(text);
    let s = RE_PUNCT.replace_all(&s, " ");
    compact_whitespace(&s).to_lowercase()
}

fn keep_token(token: &str) -> bool {
    let len = token.chars().count();
    if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&len) {
        return false;
    }
    if token.chars().all(char::is_numeric) {
        return false;
    }
    if is_stop_word(token) {
        return false;
    }
    let disallowed = token.chars().filter(|c| !is_allowed_char(*c)).count();
    disallowed * 2 <= len
}

/// The strings one value contributes, before cleaning.
fn value_strings(value: &LanguageValue, opts: &PhoneticOptions) -> Vec<String> {
    let text = truncate_chars(&value.value, opts.max_source_length);
    if text.trim().is_empty() {
        return Vec::new();
    }

    let Some(scheme) = value.language.scheme() else {
        // English and other unscripted text.
        return vec![text.to_string()];
    };

    let text = strip_html(text);
    let mut plain: Vec<&str> = Vec::new();
    let mut foreign: Vec<&str> = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation()) {
        if token.is_empty() {
            continue;
        }
        if is_plain_token(token) {
            plain.push(token);
        } else {
            foreign.push(token);
        }
    }

    let mut out: Vec<String> = plain.into_iter().map(str::to_string).collect();
    if !foreign.is_empty() {
        let mut joined = foreign.join(" ");
        // IAST letters are lowercase only; a capital would pass through raw.
        if scheme == Scheme::Iast {
            joined = joined.to_lowercase();
        }
        let spellings: Vec<String> = [Scheme::Itrans, Scheme::Slp1]
            .into_iter()
            .filter(|target| *target != scheme)
            .map(|target| transliterate(&joined, scheme, target))
            .collect();
        out.push(joined);
        out.extend(spellings);
    }
    out
}

/// Builds the phonetic index string for an entry.
///
/// Word values come first, so their spellings win when the same token also
/// appears in a description.
pub fn generate_phonetic(
    word: Option<&[LanguageValue]>,
    description: Option<&[LanguageValue]>,
    opts: &PhoneticOptions,
) -> String {
    let values = word.unwrap_or_default().iter().chain(description.unwrap_or_default());

    let mut tokens: IndexSet<String> = IndexSet::new();
    for value in values {
        for s in value_strings(value, opts) {
            for token in clean_text(&s).split_whitespace() {
                if keep_token(token) {
                    tokens.insert(token.to_string());
                }
            }
        }
    }

    tokens.into_iter().collect::<Vec<String>>().join(" ")
}

/// Convenience for callers holding a single language's text.
pub fn phonetic_for_text(language: ScriptCode, text: &str, opts: &PhoneticOptions) -> String {
    let value = [LanguageValue::new(language, text)];
    generate_phonetic(Some(&value), None, opts)
}
