//! Static per-dictionary configuration.
//!
//! Each source dictionary marks its headwords with a different tag and writes
//! them in a different scheme. The table is keyed by the closed
//! `DictionaryId` set, so a known dictionary can never be missing a config.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::helpers::split_field_list;
use crate::lipi::Scheme;
use crate::types::ScriptCode;

/// The markup family a dictionary's entries are written in. Each family adds
/// its own tag handlers on top of the HTML defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupDialect {
    Html,
    Cologne,
    Telugu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionaryId {
    Mw,
    Mw72,
    Ap90,
    Ap,
    Pw,
    Pwg,
    Cae,
    Ccs,
    Ben,
    Bhs,
    Bop,
    Bur,
    Gra,
    Gst,
    Inm,
    Md,
    Shs,
    Skd,
    Vcp,
    Wil,
    Yat,
    Stc,
    Lan,
    Ieg,
    Pe,
    Vei,
    Ae,
    Mwe,
    Bor,
    Brown,
    Sankaranarayana,
    AndhraBharati,
    Amara,
    Dcs,
}

impl DictionaryId {
    pub const ALL: [DictionaryId; 34] = [
        DictionaryId::Mw,
        DictionaryId::Mw72,
        DictionaryId::Ap90,
        DictionaryId::Ap,
        DictionaryId::Pw,
        DictionaryId::Pwg,
        DictionaryId::Cae,
        DictionaryId::Ccs,
        DictionaryId::Ben,
        DictionaryId::Bhs,
        DictionaryId::Bop,
        DictionaryId::Bur,
        DictionaryId::Gra,
        DictionaryId::Gst,
        DictionaryId::Inm,
        DictionaryId::Md,
        DictionaryId::Shs,
        DictionaryId::Skd,
        DictionaryId::Vcp,
        DictionaryId::Wil,
        DictionaryId::Yat,
        DictionaryId::Stc,
        DictionaryId::Lan,
        DictionaryId::Ieg,
        DictionaryId::Pe,
        DictionaryId::Vei,
        DictionaryId::Ae,
        DictionaryId::Mwe,
        DictionaryId::Bor,
        DictionaryId::Brown,
        DictionaryId::Sankaranarayana,
        DictionaryId::AndhraBharati,
        DictionaryId::Amara,
        DictionaryId::Dcs,
    ];

    pub fn config(&self) -> &'static DictionaryConfig {
        &DICTIONARIES[*self as usize]
    }

    pub fn code(&self) -> &'static str {
        self.config().code
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryConfigError {
    #[error("Unknown dictionary: {0}")]
    UnknownDictionary(String),
    #[error("Invalid configuration for dictionary '{code}': {reason}")]
    InvalidConfig { code: &'static str, reason: String },
}

impl FromStr for DictionaryId {
    type Err = DictionaryConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        DictionaryId::ALL
            .iter()
            .find(|id| id.code() == code)
            .copied()
            .ok_or_else(|| DictionaryConfigError::UnknownDictionary(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub id: DictionaryId,
    pub code: &'static str,
    pub title: &'static str,
    pub dialect: MarkupDialect,
    /// Tag whose content is the lookup term, transliterated on output.
    pub headword_tag: &'static str,
    pub headword_scheme: Scheme,
    pub word_field: &'static str,
    /// Comma-joined list of description columns, combined in order.
    pub description_field: &'static str,
    pub word_languages: &'static [ScriptCode],
    pub description_languages: &'static [ScriptCode],
}

impl DictionaryConfig {
    pub fn description_fields(&self) -> Vec<&'static str> {
        split_field_list(self.description_field)
    }
}

const SANSKRIT_WORDS: &[ScriptCode] = &[
    ScriptCode::San,
    ScriptCode::Tel,
    ScriptCode::Iast,
    ScriptCode::Itrans,
    ScriptCode::Slp1,
];
const ENGLISH_WORDS: &[ScriptCode] = &[ScriptCode::Eng];
const TELUGU_WORDS: &[ScriptCode] = &[
    ScriptCode::Tel,
    ScriptCode::San,
    ScriptCode::Iast,
    ScriptCode::Itrans,
];

const SCRIPT_DESCRIPTIONS: &[ScriptCode] = &[ScriptCode::San, ScriptCode::Tel, ScriptCode::Iast];
const NATIVE_DESCRIPTIONS: &[ScriptCode] = &[ScriptCode::San, ScriptCode::Tel];
const TELUGU_DESCRIPTIONS: &[ScriptCode] = &[ScriptCode::Eng, ScriptCode::Tel];

/// An SLP1-keyed dictionary from the Cologne digitizations.
const fn cologne(id: DictionaryId, code: &'static str, title: &'static str) -> DictionaryConfig {
    DictionaryConfig {
        id,
        code,
        title,
        dialect: MarkupDialect::Cologne,
        headword_tag: "s",
        headword_scheme: Scheme::Slp1,
        word_field: "key1",
        description_field: "data",
        word_languages: SANSKRIT_WORDS,
        description_languages: SCRIPT_DESCRIPTIONS,
    }
}

/// A Cologne dictionary with English headwords and Sanskrit in the body.
const fn cologne_english(id: DictionaryId, code: &'static str, title: &'static str) -> DictionaryConfig {
    DictionaryConfig {
        word_languages: ENGLISH_WORDS,
        ..cologne(id, code, title)
    }
}

/// A Cologne dictionary whose definitions are themselves Sanskrit.
const fn cologne_sanskrit(id: DictionaryId, code: &'static str, title: &'static str) -> DictionaryConfig {
    DictionaryConfig {
        description_languages: NATIVE_DESCRIPTIONS,
        ..cologne(id, code, title)
    }
}

const fn telugu(id: DictionaryId, code: &'static str, title: &'static str, description_field: &'static str) -> DictionaryConfig {
    DictionaryConfig {
        id,
        code,
        title,
        dialect: MarkupDialect::Telugu,
        headword_tag: "b",
        headword_scheme: Scheme::Telugu,
        word_field: "word",
        description_field,
        word_languages: TELUGU_WORDS,
        description_languages: TELUGU_DESCRIPTIONS,
    }
}

/// Ordered like `DictionaryId::ALL`; `validate_dictionary_table` checks this.
static DICTIONARIES: [DictionaryConfig; 34] = [
    cologne(DictionaryId::Mw, "mw", "Monier-Williams Sanskrit-English Dictionary"),
    cologne(DictionaryId::Mw72, "mw72", "Monier-Williams Sanskrit-English Dictionary (1872)"),
    DictionaryConfig {
        headword_tag: "b",
        ..cologne(DictionaryId::Ap90, "ap90", "Apte Practical Sanskrit-English Dictionary (1890)")
    },
    DictionaryConfig {
        headword_tag: "b",
        ..cologne(DictionaryId::Ap, "ap", "Apte Practical Sanskrit-English Dictionary, revised")
    },
    cologne(DictionaryId::Pw, "pw", "Böhtlingk Sanskrit-Wörterbuch in kürzerer Fassung"),
    cologne(DictionaryId::Pwg, "pwg", "Böhtlingk and Roth Grosses Petersburger Wörterbuch"),
    cologne(DictionaryId::Cae, "cae", "Cappeller Sanskrit-English Dictionary"),
    cologne(DictionaryId::Ccs, "ccs", "Cappeller Sanskrit Wörterbuch"),
    cologne(DictionaryId::Ben, "ben", "Benfey Sanskrit-English Dictionary"),
    DictionaryConfig {
        headword_tag: "b",
        headword_scheme: Scheme::Iast,
        ..cologne(DictionaryId::Bhs, "bhs", "Edgerton Buddhist Hybrid Sanskrit Dictionary")
    },
    cologne(DictionaryId::Bop, "bop", "Bopp Glossarium Sanscritum"),
    cologne(DictionaryId::Bur, "bur", "Burnouf Dictionnaire Sanscrit-Français"),
    cologne(DictionaryId::Gra, "gra", "Grassmann Wörterbuch zum Rig Veda"),
    cologne(DictionaryId::Gst, "gst", "Goldstücker Sanskrit-English Dictionary"),
    DictionaryConfig {
        headword_tag: "i",
        ..cologne(DictionaryId::Inm, "inm", "Index to the Names in the Mahabharata")
    },
    cologne(DictionaryId::Md, "md", "Macdonell Sanskrit-English Dictionary"),
    cologne(DictionaryId::Shs, "shs", "Shabda-Sagara Sanskrit-English Dictionary"),
    cologne_sanskrit(DictionaryId::Skd, "skd", "Shabda-kalpadruma"),
    cologne_sanskrit(DictionaryId::Vcp, "vcp", "Vachaspatyam"),
    cologne(DictionaryId::Wil, "wil", "Wilson Sanskrit-English Dictionary"),
    cologne(DictionaryId::Yat, "yat", "Yates Sanskrit-English Dictionary"),
    cologne(DictionaryId::Stc, "stc", "Stchoupak Dictionnaire Sanscrit-Français"),
    cologne(DictionaryId::Lan, "lan", "Lanman Sanskrit Reader Vocabulary"),
    DictionaryConfig {
        headword_tag: "b",
        headword_scheme: Scheme::Iast,
        ..cologne(DictionaryId::Ieg, "ieg", "Indian Epigraphical Glossary")
    },
    DictionaryConfig {
        headword_tag: "b",
        ..cologne(DictionaryId::Pe, "pe", "Puranic Encyclopedia")
    },
    cologne(DictionaryId::Vei, "vei", "Vedic Index of Names and Subjects"),
    cologne_english(DictionaryId::Ae, "ae", "Apte Student's English-Sanskrit Dictionary"),
    cologne_english(DictionaryId::Mwe, "mwe", "Monier-Williams English-Sanskrit Dictionary"),
    cologne_english(DictionaryId::Bor, "bor", "Borooah English-Sanskrit Dictionary"),
    telugu(DictionaryId::Brown, "brown", "Brown Telugu-English Dictionary", "meaning,notes"),
    telugu(DictionaryId::Sankaranarayana, "snkr", "Sankaranarayana Telugu-English Dictionary", "meaning"),
    DictionaryConfig {
        description_languages: &[ScriptCode::Tel],
        ..telugu(DictionaryId::AndhraBharati, "abt", "Andhra Bharati Telugu Nighantuvu", "artham")
    },
    DictionaryConfig {
        id: DictionaryId::Amara,
        code: "amara",
        title: "Amarakosha",
        dialect: MarkupDialect::Html,
        headword_tag: "strong",
        headword_scheme: Scheme::Devanagari,
        word_field: "word",
        description_field: "synonyms,notes",
        word_languages: SANSKRIT_WORDS,
        description_languages: NATIVE_DESCRIPTIONS,
    },
    DictionaryConfig {
        id: DictionaryId::Dcs,
        code: "dcs",
        title: "Digital Corpus of Sanskrit Glossary",
        dialect: MarkupDialect::Html,
        headword_tag: "em",
        headword_scheme: Scheme::Iast,
        word_field: "lemma",
        description_field: "gloss",
        word_languages: SANSKRIT_WORDS,
        description_languages: SCRIPT_DESCRIPTIONS,
    },
];

/// Checks the static table once at start-up.
pub fn validate_dictionary_table() -> Result<(), DictionaryConfigError> {
    for (idx, id) in DictionaryId::ALL.iter().enumerate() {
        let c = &DICTIONARIES[idx];
        let invalid = |reason: &str| DictionaryConfigError::InvalidConfig {
            code: c.code,
            reason: reason.to_string(),
        };

        if c.id != *id {
            return Err(invalid(&format!("table position {} holds {:?}, expected {:?}", idx, c.id, id)));
        }
        if c.code.is_empty() || c.code != c.code.to_lowercase() {
            return Err(invalid("code must be non-empty lowercase"));
        }
        if c.headword_tag.is_empty() || c.headword_tag != c.headword_tag.to_lowercase() {
            return Err(invalid("headword tag must be non-empty lowercase"));
        }
        if c.word_field.trim().is_empty() {
            return Err(invalid("word field is empty"));
        }
        if c.description_fields().is_empty() {
            return Err(invalid("no description fields"));
        }
        if c.word_languages.is_empty() || c.description_languages.is_empty() {
            return Err(invalid("no declared languages"));
        }
        if DictionaryId::ALL[..idx].iter().any(|other| other.code() == c.code) {
            return Err(invalid("duplicate code"));
        }
    }

    tracing::debug!("Validated {} dictionary configs", DictionaryId::ALL.len());
    Ok(())
}
