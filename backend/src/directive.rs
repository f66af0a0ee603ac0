//! Transliteration directives in multi-script fields.
//!
//! A value such as `$transliterateFrom=SAN|IAST` asks for the entry's text to
//! be derived from another language of the same field. Candidates are tried
//! left to right, and only entries that were present in the input and are not
//! themselves directives can serve as sources.

use std::str::FromStr;

use crate::lipi::transliterate;
use crate::logger::debug;
use crate::types::{LanguageValue, ScriptCode};

pub const DIRECTIVE_PREFIX: &str = "$transliterateFrom";

/// Source order for filling in missing languages. Independent of the
/// candidate order written in a directive.
pub const FILL_PRIORITY: [ScriptCode; 5] = [
    ScriptCode::Iast,
    ScriptCode::Slp1,
    ScriptCode::Itrans,
    ScriptCode::San,
    ScriptCode::Tel,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    None,
    TransliterateFrom(Vec<ScriptCode>),
}

impl Directive {
    /// Parses a field value. Anything that is not a well-formed directive
    /// with at least one known language code is `Directive::None`.
    pub fn parse(value: &str) -> Directive {
        let Some(rest) = value.strip_prefix(DIRECTIVE_PREFIX) else {
            return Directive::None;
        };
        let Some(list) = rest.trim_start().strip_prefix('=') else {
            return Directive::None;
        };

        let candidates: Vec<ScriptCode> = list
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| ScriptCode::from_str(s).ok())
            .collect();

        if candidates.is_empty() {
            Directive::None
        } else {
            Directive::TransliterateFrom(candidates)
        }
    }

    pub fn to_directive_string(&self) -> Option<String> {
        match self {
            Directive::None => None,
            Directive::TransliterateFrom(codes) => {
                let list: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
                Some(format!("{}={}", DIRECTIVE_PREFIX, list.join("|")))
            }
        }
    }
}

/// True for any value carrying the prefix, well-formed or not.
pub fn is_directive_value(value: &str) -> bool {
    value.starts_with(DIRECTIVE_PREFIX)
}

pub fn has_unresolved_directives(values: &[LanguageValue]) -> bool {
    values.iter().any(|v| is_directive_value(&v.value))
}

fn is_source(v: &LanguageValue) -> bool {
    !is_directive_value(&v.value) && !v.value.trim().is_empty()
}

/// Converts `source` into `target`'s script, if both have one.
fn derive(source: &LanguageValue, target: ScriptCode) -> Option<String> {
    let from = source.language.scheme()?;
    let to = target.scheme()?;
    Some(transliterate(&source.value, from, to))
}

fn resolve_candidates(
    candidates: &[ScriptCode],
    target: ScriptCode,
    sources: &[&LanguageValue],
) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        sources
            .iter()
            .find(|s| s.language == *candidate)
            .and_then(|s| derive(s, target))
    })
}

fn fill_value(target: ScriptCode, sources: &[&LanguageValue]) -> Option<String> {
    target.scheme()?;

    let source = FILL_PRIORITY
        .iter()
        .find_map(|lang| sources.iter().find(|s| s.language == *lang))
        .or_else(|| sources.iter().find(|s| s.language.scheme().is_some()))?;

    derive(source, target)
}

/// Resolves every directive in `values` and appends the requested
/// `fill_languages` that are not present yet.
///
/// Directives that cannot be resolved are kept verbatim, so a later call
/// with more data can try again.
pub fn resolve_language_values(
    values: &[LanguageValue],
    fill_languages: Option<&[ScriptCode]>,
) -> Vec<LanguageValue> {
    let sources: Vec<&LanguageValue> = values.iter().filter(|v| is_source(v)).collect();

    let mut out: Vec<LanguageValue> = values
        .iter()
        .map(|entry| match Directive::parse(&entry.value) {
            Directive::None => entry.clone(),
            Directive::TransliterateFrom(candidates) => {
                match resolve_candidates(&candidates, entry.language, &sources) {
                    Some(value) => LanguageValue::new(entry.language, value),
                    None => {
                        debug(&format!(
                            "Unresolved directive for {}: {}",
                            entry.language, entry.value
                        ));
                        entry.clone()
                    }
                }
            }
        })
        .collect();

    if let Some(fill) = fill_languages {
        for lang in fill {
            if out.iter().any(|v| v.language == *lang) {
                continue;
            }
            if let Some(value) = fill_value(*lang, &sources) {
                out.push(LanguageValue::new(*lang, value));
            }
        }
    }

    out
}

/// An absent field stays absent.
pub fn resolve_directives(
    values: Option<&[LanguageValue]>,
    fill_languages: Option<&[ScriptCode]>,
) -> Option<Vec<LanguageValue>> {
    values.map(|v| resolve_language_values(v, fill_languages))
}
