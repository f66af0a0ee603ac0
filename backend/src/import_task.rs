//! Turns raw dictionary rows into lexicon entries.
//!
//! Reading the rows and storing the entries belong to the caller. Rows are
//! independent: a bad row is recorded in the summary and the import moves on.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::dictionaries::DictionaryId;
use crate::directive::resolve_language_values;
use crate::lipi::{transliterate, Scheme};
use crate::logger;
use crate::markup::MarkupParser;
use crate::phonetic::generate_phonetic;
use crate::settings::EngineSettings;
use crate::types::LanguageValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntryRow {
    pub row_id: u64,
    /// Column name to raw value, in source column order.
    #[serde(default)]
    pub fields: IndexMap<String, String>,
    /// Headword as the source spells it, for suppressing its repetition at
    /// the start of the entry. Defaults to the word field.
    #[serde(default)]
    pub headword: Option<String>,
}

impl RawEntryRow {
    pub fn new(row_id: u64) -> Self {
        RawEntryRow {
            row_id,
            ..Default::default()
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub row_id: u64,
    pub dictionary: DictionaryId,
    pub word: Vec<LanguageValue>,
    pub description: Vec<LanguageValue>,
    pub phonetic: String,
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub unknown_tags: BTreeSet<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowError {
    #[error("Row {row_id}: missing or empty word field '{field}'")]
    MissingWord { row_id: u64, field: String },
    #[error("Row {row_id}: none of the description fields '{fields}' are present")]
    MissingDescription { row_id: u64, fields: String },
}

/// Builds one entry: word spellings per declared language, markdown per
/// description language, filled-in languages and the phonetic string.
pub fn process_row(
    parser: &MarkupParser,
    row: &RawEntryRow,
    settings: &EngineSettings,
) -> Result<LexiconEntry, RowError> {
    let config = parser.config();

    let word = row
        .fields
        .get(config.word_field)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RowError::MissingWord {
            row_id: row.row_id,
            field: config.word_field.to_string(),
        })?;

    let parts: Vec<&str> = config
        .description_fields()
        .into_iter()
        .filter_map(|f| row.fields.get(f))
        .map(|s| s.as_str())
        .collect();
    if parts.is_empty() {
        return Err(RowError::MissingDescription {
            row_id: row.row_id,
            fields: config.description_field.to_string(),
        });
    }
    let markup = parts
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<&str>>()
        .join("\n\n");

    let word_values: Vec<LanguageValue> = config
        .word_languages
        .iter()
        .map(|lang| {
            let value = match lang.scheme() {
                Some(to) => transliterate(word, config.headword_scheme, to),
                None => word.to_string(),
            };
            LanguageValue::new(*lang, value)
        })
        .collect();
    let word_values = resolve_language_values(&word_values, Some(&settings.fill_languages));

    let headword = row.headword.as_deref().unwrap_or(word);
    let mut unknown_tags = BTreeSet::new();
    let description: Vec<LanguageValue> = config
        .description_languages
        .iter()
        .map(|lang| {
            let to = lang.scheme().unwrap_or(Scheme::Iast);
            let parsed = parser.parse(&markup, to, Some(headword));
            unknown_tags.extend(parsed.unknown_tags);
            LanguageValue::new(*lang, parsed.markdown)
        })
        .collect();

    let phonetic = generate_phonetic(
        Some(&word_values),
        Some(&description),
        &settings.phonetic_options(),
    );

    Ok(LexiconEntry {
        row_id: row.row_id,
        dictionary: config.id,
        word: word_values,
        description,
        phonetic,
        unknown_tags,
    })
}

/// Progress after each batch. Counts are totals since the start of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    pub batch_index: usize,
    pub rows_seen: usize,
    pub imported: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub dictionary: String,
    pub rows_seen: usize,
    pub imported: usize,
    pub failed: usize,
    pub batches: usize,
    pub cancelled: bool,
    pub errors: Vec<RowError>,
    pub unknown_tags: BTreeSet<String>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl ImportSummary {
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.failed == 0
    }
}

pub struct ImportTask {
    parser: MarkupParser,
    settings: EngineSettings,
    cancel: Option<Arc<AtomicBool>>,
}

impl ImportTask {
    pub fn new(dictionary: DictionaryId, settings: EngineSettings) -> Self {
        ImportTask {
            parser: MarkupParser::for_dictionary(dictionary),
            settings,
            cancel: None,
        }
    }

    /// The run stops before the next row once the flag is set. The batch
    /// in progress is still handed to the callback.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn dictionary(&self) -> DictionaryId {
        self.parser.config().id
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|f| f.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// Processes `rows`, handing each full batch of entries to `on_batch`.
    pub fn run<I, F>(&self, rows: I, mut on_batch: F) -> ImportSummary
    where
        I: IntoIterator<Item = RawEntryRow>,
        F: FnMut(&BatchProgress, Vec<LexiconEntry>),
    {
        let start = Instant::now();
        let code = self.parser.config().code;
        let batch_size = self.settings.batch_size.max(1);
        let limit = self.settings.import_limit.unwrap_or(usize::MAX);

        logger::info(&format!(
            "Importing {} (batch size {}, limit {})",
            code,
            batch_size,
            self.settings.import_limit.map(|n| n.to_string()).unwrap_or_else(|| "none".to_string())
        ));

        let mut summary = ImportSummary {
            dictionary: code.to_string(),
            ..Default::default()
        };
        let mut batch: Vec<LexiconEntry> = Vec::with_capacity(batch_size);
        let mut rows_in_batch = 0;

        for row in rows.into_iter().take(limit) {
            if self.is_cancelled() {
                summary.cancelled = true;
                logger::warn(&format!("Import of {} cancelled after {} rows", code, summary.rows_seen));
                break;
            }

            summary.rows_seen += 1;
            rows_in_batch += 1;

            match process_row(&self.parser, &row, &self.settings) {
                Ok(entry) => {
                    summary.imported += 1;
                    summary.unknown_tags.extend(entry.unknown_tags.iter().cloned());
                    batch.push(entry);
                }
                Err(e) => {
                    logger::warn(&e.to_string());
                    summary.failed += 1;
                    summary.errors.push(e);
                }
            }

            if rows_in_batch == batch_size {
                self.flush(&mut summary, &mut batch, &mut on_batch);
                rows_in_batch = 0;
            }
        }

        if rows_in_batch > 0 {
            self.flush(&mut summary, &mut batch, &mut on_batch);
        }

        summary.elapsed = start.elapsed();
        logger::info(&format!(
            "Imported {}: {} entries, {} failed rows, {} batches in {}",
            code,
            summary.imported,
            summary.failed,
            summary.batches,
            logger::format_duration(summary.elapsed)
        ));

        if !summary.unknown_tags.is_empty() {
            logger::debug(&format!("{}: unrecognized tags {:?}", code, summary.unknown_tags));
        }

        summary
    }

    fn flush<F>(&self, summary: &mut ImportSummary, batch: &mut Vec<LexiconEntry>, on_batch: &mut F)
    where
        F: FnMut(&BatchProgress, Vec<LexiconEntry>),
    {
        let progress = BatchProgress {
            batch_index: summary.batches,
            rows_seen: summary.rows_seen,
            imported: summary.imported,
            failed: summary.failed,
        };
        summary.batches += 1;
        on_batch(&progress, std::mem::take(batch));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScriptCode;

    fn mw_row(row_id: u64, key: &str, data: &str) -> RawEntryRow {
        RawEntryRow::new(row_id).with_field("key1", key).with_field("data", data)
    }

    #[test]
    fn test_process_row_mw() {
        let parser = MarkupParser::for_dictionary(DictionaryId::Mw);
        let row = mw_row(1, "agni", "<s>agni</s> m. fire");
        let entry = process_row(&parser, &row, &EngineSettings::default()).unwrap();

        assert_eq!(entry.word[0], LanguageValue::new(ScriptCode::San, "अग्नि"));
        assert_eq!(entry.word[2], LanguageValue::new(ScriptCode::Iast, "agni"));
        // The leading headword repeats the key and is dropped.
        assert_eq!(entry.description[2], LanguageValue::new(ScriptCode::Iast, "m. fire"));
        assert!(entry.phonetic.contains("अग्नि"));
        assert!(entry.phonetic.contains("fire"));
    }

    #[test]
    fn test_missing_word_is_row_error() {
        let parser = MarkupParser::for_dictionary(DictionaryId::Mw);
        let row = RawEntryRow::new(7).with_field("data", "x");
        assert_eq!(
            process_row(&parser, &row, &EngineSettings::default()),
            Err(RowError::MissingWord { row_id: 7, field: "key1".to_string() })
        );
    }

    #[test]
    fn test_multiple_description_fields_in_order() {
        let parser = MarkupParser::for_dictionary(DictionaryId::Brown);
        let row = RawEntryRow::new(1)
            .with_field("notes", "second")
            .with_field("word", "అగ్ని")
            .with_field("meaning", "first");
        let entry = process_row(&parser, &row, &EngineSettings::default()).unwrap();
        assert_eq!(entry.description[0], LanguageValue::new(ScriptCode::Eng, "first\n\nsecond"));
    }

    #[test]
    fn test_run_batches_and_collects_errors() {
        let settings = EngineSettings {
            batch_size: 2,
            ..Default::default()
        };
        let task = ImportTask::new(DictionaryId::Mw, settings);
        let rows = vec![
            mw_row(1, "agni", "fire"),
            RawEntryRow::new(2),
            mw_row(3, "deva", "god"),
            mw_row(4, "yoga", "union"),
            mw_row(5, "vAyu", "wind"),
        ];

        let mut progress = Vec::new();
        let mut sizes = Vec::new();
        let summary = task.run(rows, |p, entries| {
            progress.push(*p);
            sizes.push(entries.len());
        });

        assert_eq!(summary.rows_seen, 5);
        assert_eq!(summary.imported, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.batches, 3);
        assert_eq!(sizes, vec![1, 2, 1]);
        assert_eq!(progress[1], BatchProgress { batch_index: 1, rows_seen: 4, imported: 3, failed: 1 });
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_run_respects_limit_and_cancel() {
        let settings = EngineSettings {
            import_limit: Some(2),
            ..Default::default()
        };
        let rows: Vec<RawEntryRow> = (0..10).map(|i| mw_row(i, "agni", "fire")).collect();
        let summary = ImportTask::new(DictionaryId::Mw, settings).run(rows.clone(), |_, _| {});
        assert_eq!(summary.rows_seen, 2);
        assert!(summary.is_complete());

        let flag = Arc::new(AtomicBool::new(true));
        let task = ImportTask::new(DictionaryId::Mw, EngineSettings::default()).with_cancel_flag(flag);
        let summary = task.run(rows, |_, _| {});
        assert!(summary.cancelled);
        assert_eq!(summary.rows_seen, 0);
        assert_eq!(summary.batches, 0);
    }
}
