use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::{Serialize, Deserialize};

use crate::phonetic::{PhoneticOptions, DEFAULT_MAX_SOURCE_LENGTH};
use crate::types::{parse_script_code_list, ScriptCode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub phonetic_max_length: usize,
    pub batch_size: usize,
    /// Languages added to every word field when a source text allows it.
    pub fill_languages: Vec<ScriptCode>,
    /// Stop an import after this many rows.
    pub import_limit: Option<usize>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            phonetic_max_length: DEFAULT_MAX_SOURCE_LENGTH,
            batch_size: 500,
            fill_languages: Vec::new(),
            import_limit: None,
        }
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{} must be a non-negative integer, got '{}'", key, value))
}

impl EngineSettings {
    /// Reads `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from a key lookup. Unset or empty keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = EngineSettings::default();

        if let Some(v) = get("KOSHA_PHONETIC_MAX_LENGTH") {
            settings.phonetic_max_length = parse_usize("KOSHA_PHONETIC_MAX_LENGTH", &v)?;
        }

        if let Some(v) = get("KOSHA_BATCH_SIZE") {
            let n = parse_usize("KOSHA_BATCH_SIZE", &v)?;
            if n == 0 {
                anyhow::bail!("KOSHA_BATCH_SIZE must be at least 1");
            }
            settings.batch_size = n;
        }

        if let Some(v) = get("KOSHA_FILL_LANGUAGES") {
            settings.fill_languages = parse_script_code_list(&v)
                .with_context(|| format!("Invalid KOSHA_FILL_LANGUAGES: '{}'", v))?;
        }

        if let Some(v) = get("KOSHA_IMPORT_LIMIT") {
            settings.import_limit = Some(parse_usize("KOSHA_IMPORT_LIMIT", &v)?);
        }

        Ok(settings)
    }

    pub fn phonetic_options(&self) -> PhoneticOptions {
        PhoneticOptions {
            max_source_length: self.phonetic_max_length,
        }
    }
}
