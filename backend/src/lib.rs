pub mod types;
pub mod helpers;
pub mod logger;
pub mod settings;

pub mod lipi;
pub mod directive;
pub mod dictionaries;
pub mod markup;
pub mod stop_words;
pub mod phonetic;
pub mod import_task;

use std::sync::OnceLock;

pub use dictionaries::{DictionaryConfig, DictionaryConfigError, DictionaryId, validate_dictionary_table};
pub use directive::{resolve_directives, resolve_language_values, Directive};
pub use lipi::{convert, transliterate, Scheme};
pub use markup::{MarkupParser, ParsedMarkdown};
pub use phonetic::{generate_phonetic, PhoneticOptions};
pub use settings::EngineSettings;
pub use types::{LanguageValue, ScriptCode};

pub static APP_NAME: &str = "kosha";

static ENGINE_CHECKED: OnceLock<Result<(), DictionaryConfigError>> = OnceLock::new();

/// Validates the static tables once per process. Later calls return the
/// first result.
pub fn init_engine() -> Result<(), DictionaryConfigError> {
    ENGINE_CHECKED
        .get_or_init(|| {
            let res = validate_dictionary_table();
            match &res {
                Ok(()) => logger::info(&format!(
                    "{} engine ready: {} dictionaries, {} schemes",
                    APP_NAME,
                    DictionaryId::ALL.len(),
                    Scheme::ALL.len()
                )),
                Err(e) => logger::error(&format!("Dictionary table is invalid: {}", e)),
            }
            res
        })
        .clone()
}
