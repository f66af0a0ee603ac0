mod helpers;
use helpers as h;

use kosha_backend::dictionaries::DictionaryId;
use kosha_backend::import_task::{process_row, ImportTask, RawEntryRow, RowError};
use kosha_backend::markup::MarkupParser;
use kosha_backend::settings::EngineSettings;
use kosha_backend::types::ScriptCode;

fn mw_row(row_id: u64, key: &str, data: &str) -> RawEntryRow {
    RawEntryRow::new(row_id).with_field("key1", key).with_field("data", data)
}

#[test]
fn test_row_from_json() {
    h::test_setup();
    let json = r#"{"row_id": 3, "fields": {"key1": "deva", "data": "<s>deva</s> m. a god"}}"#;
    let row: RawEntryRow = serde_json::from_str(json).unwrap();
    assert_eq!(row.headword, None);

    let parser = MarkupParser::for_dictionary(DictionaryId::Mw);
    let entry = process_row(&parser, &row, &EngineSettings::default()).unwrap();
    assert_eq!(entry.dictionary, DictionaryId::Mw);
    assert_eq!(entry.word[0], h::lv(ScriptCode::San, "देव"));
    assert_eq!(entry.description[0], h::lv(ScriptCode::San, "m. a god"));
    assert_eq!(entry.phonetic, "देव deva దేవ god");
}

#[test]
fn test_fill_languages_from_settings() {
    h::test_setup();
    let settings = EngineSettings {
        fill_languages: vec![ScriptCode::Hk, ScriptCode::San],
        ..Default::default()
    };
    let parser = MarkupParser::for_dictionary(DictionaryId::Mw);
    let entry = process_row(&parser, &mw_row(1, "kfzRa", "black"), &settings).unwrap();

    let langs: Vec<ScriptCode> = entry.word.iter().map(|v| v.language).collect();
    assert_eq!(
        langs,
        vec![ScriptCode::San, ScriptCode::Tel, ScriptCode::Iast, ScriptCode::Itrans, ScriptCode::Slp1, ScriptCode::Hk]
    );
    assert_eq!(entry.word[5].value, "kRSNa");
}

#[test]
fn test_english_headword_dictionary() {
    h::test_setup();
    let parser = MarkupParser::for_dictionary(DictionaryId::Ae);
    let row = RawEntryRow::new(1)
        .with_field("key1", "fire")
        .with_field("data", "s. <s>agniH</s>, <s>vahniH</s>");
    let entry = process_row(&parser, &row, &EngineSettings::default()).unwrap();
    assert_eq!(entry.word, vec![h::lv(ScriptCode::Eng, "fire")]);
    assert_eq!(entry.description[2], h::lv(ScriptCode::Iast, "s. agniḥ, vahniḥ"));
}

#[test]
fn test_row_errors_do_not_stop_the_import() {
    h::test_setup();
    let rows = vec![
        mw_row(1, "agni", "fire"),
        mw_row(2, "  ", "nothing"),
        RawEntryRow::new(3).with_field("key1", "vAyu"),
        mw_row(4, "soma", "<b>unclosed"),
    ];
    let task = ImportTask::new(DictionaryId::Mw, EngineSettings::default());

    let mut imported_ids = Vec::new();
    let summary = task.run(rows, |_, entries| {
        imported_ids.extend(entries.iter().map(|e| e.row_id));
    });

    assert_eq!(imported_ids, vec![1, 4]);
    assert_eq!(summary.failed, 2);
    assert_eq!(
        summary.errors,
        vec![
            RowError::MissingWord { row_id: 2, field: "key1".to_string() },
            RowError::MissingDescription { row_id: 3, fields: "data".to_string() },
        ]
    );
    assert_eq!(summary.batches, 1);
}

#[test]
fn test_settings_drive_batches() {
    h::test_setup();
    let settings = EngineSettings::from_lookup(|key| match key {
        "KOSHA_BATCH_SIZE" => Some("3".to_string()),
        "KOSHA_IMPORT_LIMIT" => Some("7".to_string()),
        _ => None,
    })
    .unwrap();
    let rows: Vec<RawEntryRow> = (0..20).map(|i| mw_row(i, "agni", "fire")).collect();

    let mut seen = Vec::new();
    let summary = ImportTask::new(DictionaryId::Mw, settings).run(rows, |p, entries| {
        seen.push((p.batch_index, p.rows_seen, entries.len()));
    });

    assert_eq!(seen, vec![(0, 3, 3), (1, 6, 3), (2, 7, 1)]);
    assert_eq!(summary.imported, 7);
    assert!(summary.is_complete());
}
