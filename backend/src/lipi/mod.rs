//! Script conversion between Devanagari, Telugu and the Roman schemes
//! (IAST, ITRANS, Harvard-Kyoto, SLP1).
//!
//! Text is decoded into scheme-independent letters and encoded again, so any
//! pair of schemes can be converted. Characters a scheme does not know pass
//! through unchanged.

mod engine;
mod schemes;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use crate::logger::warn;

use schemes::SchemeTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Devanagari,
    Telugu,
    Iast,
    Itrans,
    Slp1,
    #[serde(rename = "hk")]
    HarvardKyoto,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Devanagari,
        Scheme::Telugu,
        Scheme::Iast,
        Scheme::Itrans,
        Scheme::Slp1,
        Scheme::HarvardKyoto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Devanagari => "devanagari",
            Scheme::Telugu => "telugu",
            Scheme::Iast => "iast",
            Scheme::Itrans => "itrans",
            Scheme::Slp1 => "slp1",
            Scheme::HarvardKyoto => "hk",
        }
    }

    pub fn is_brahmic(&self) -> bool {
        self.table().is_brahmic()
    }

    pub(crate) fn table(&self) -> &'static SchemeTable {
        match self {
            Scheme::Devanagari => &schemes::DEVANAGARI,
            Scheme::Telugu => &schemes::TELUGU,
            Scheme::Iast => &schemes::IAST,
            Scheme::Itrans => &schemes::ITRANS,
            Scheme::Slp1 => &schemes::SLP1,
            Scheme::HarvardKyoto => &schemes::HARVARD_KYOTO,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransliterationError {
    #[error("Unknown transliteration scheme: {0}")]
    UnknownScheme(String),
}

impl FromStr for Scheme {
    type Err = TransliterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "devanagari" | "deva" | "sanskrit" => Ok(Scheme::Devanagari),
            "telugu" | "telu" => Ok(Scheme::Telugu),
            "iast" => Ok(Scheme::Iast),
            "itrans" => Ok(Scheme::Itrans),
            "slp1" => Ok(Scheme::Slp1),
            "hk" | "harvard-kyoto" | "harvard_kyoto" => Ok(Scheme::HarvardKyoto),
            _ => Err(TransliterationError::UnknownScheme(s.to_string())),
        }
    }
}

/// Converts `text` from one scheme to another.
pub fn transliterate(text: &str, from: Scheme, to: Scheme) -> String {
    if from == to || text.is_empty() {
        return text.to_string();
    }
    let normalized: String = text.nfc().collect();
    let units = engine::codec(from).decode(&normalized);
    engine::codec(to).encode(&units)
}

/// Like `convert`, but reports unknown scheme names to the caller.
pub fn try_convert(text: &str, from: &str, to: &str) -> Result<String, TransliterationError> {
    let from: Scheme = from.parse()?;
    let to: Scheme = to.parse()?;
    Ok(transliterate(text, from, to))
}

/// Converts between schemes named by identifier. On failure the original
/// text is returned and a warning is logged.
pub fn convert(text: &str, from: &str, to: &str) -> String {
    match try_convert(text, from, to) {
        Ok(s) => s,
        Err(e) => {
            warn(&format!("convert(): {}, returning input unchanged", e));
            text.to_string()
        }
    }
}
