use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::lipi::Scheme;

/// Language tag of a multi-script text value.
///
/// Every code except `ENG` names a writing system the transliterator can read
/// and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScriptCode {
    #[serde(rename = "SAN")]
    San,
    #[serde(rename = "TEL")]
    Tel,
    #[serde(rename = "IAST")]
    Iast,
    #[serde(rename = "ITRANS")]
    Itrans,
    #[serde(rename = "SLP1")]
    Slp1,
    #[serde(rename = "HK")]
    Hk,
    #[serde(rename = "ENG")]
    Eng,
}

impl ScriptCode {
    pub const ALL: [ScriptCode; 7] = [
        ScriptCode::San,
        ScriptCode::Tel,
        ScriptCode::Iast,
        ScriptCode::Itrans,
        ScriptCode::Slp1,
        ScriptCode::Hk,
        ScriptCode::Eng,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptCode::San => "SAN",
            ScriptCode::Tel => "TEL",
            ScriptCode::Iast => "IAST",
            ScriptCode::Itrans => "ITRANS",
            ScriptCode::Slp1 => "SLP1",
            ScriptCode::Hk => "HK",
            ScriptCode::Eng => "ENG",
        }
    }

    /// The transliteration scheme the language's text is written in.
    pub fn scheme(&self) -> Option<Scheme> {
        match self {
            ScriptCode::San => Some(Scheme::Devanagari),
            ScriptCode::Tel => Some(Scheme::Telugu),
            ScriptCode::Iast => Some(Scheme::Iast),
            ScriptCode::Itrans => Some(Scheme::Itrans),
            ScriptCode::Slp1 => Some(Scheme::Slp1),
            ScriptCode::Hk => Some(Scheme::HarvardKyoto),
            ScriptCode::Eng => None,
        }
    }
}

impl fmt::Display for ScriptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid ScriptCode value: {0}")]
pub struct ParseScriptCodeError(pub String);

impl FromStr for ScriptCode {
    type Err = ParseScriptCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAN" => Ok(ScriptCode::San),
            "TEL" => Ok(ScriptCode::Tel),
            "IAST" => Ok(ScriptCode::Iast),
            "ITRANS" => Ok(ScriptCode::Itrans),
            "SLP1" => Ok(ScriptCode::Slp1),
            "HK" => Ok(ScriptCode::Hk),
            "ENG" => Ok(ScriptCode::Eng),
            _ => Err(ParseScriptCodeError(s.to_string())),
        }
    }
}

/// Parses a comma-separated list such as `"SAN, TEL,iast"`.
/// Blank items are skipped, the first invalid code is an error.
pub fn parse_script_code_list(s: &str) -> Result<Vec<ScriptCode>, ParseScriptCodeError> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ScriptCode::from_str)
        .collect()
}

/// One language's text in a multi-script field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageValue {
    pub language: ScriptCode,
    pub value: String,
}

impl LanguageValue {
    pub fn new(language: ScriptCode, value: impl Into<String>) -> Self {
        LanguageValue {
            language,
            value: value.into(),
        }
    }
}
