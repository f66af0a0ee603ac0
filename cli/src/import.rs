use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use kosha_backend::import_task::{ImportTask, RawEntryRow};
use kosha_backend::settings::EngineSettings;
use kosha_backend::types::parse_script_code_list;
use kosha_backend::{logger, DictionaryId};

pub struct ImportArgs {
    pub dictionary: DictionaryId,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub limit: Option<usize>,
    pub fill: Option<String>,
}

/// Reads JSON-lines rows. Lines that don't parse are logged and skipped.
fn read_rows(input: &Path) -> Result<Vec<RawEntryRow>> {
    let file = File::open(input).with_context(|| format!("Failed to open {:?}", input))?;
    let mut rows = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawEntryRow>(&line) {
            Ok(row) => rows.push(row),
            Err(e) => logger::warn(&format!("Skipping line {}: {}", idx + 1, e)),
        }
    }

    Ok(rows)
}

pub fn import_rows(args: ImportArgs) -> Result<()> {
    // Flags override the environment, which overrides the defaults.
    let mut settings = EngineSettings::from_env()?;
    if let Some(n) = args.batch_size {
        if n == 0 {
            anyhow::bail!("Batch size must be at least 1");
        }
        settings.batch_size = n;
    }
    if args.limit.is_some() {
        settings.import_limit = args.limit;
    }
    if let Some(fill) = &args.fill {
        settings.fill_languages = parse_script_code_list(fill)?;
    }

    let rows = read_rows(&args.input)?;
    let total = match settings.import_limit {
        Some(n) => rows.len().min(n),
        None => rows.len(),
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Box::new(BufWriter::new(File::create(path).with_context(|| format!("Failed to create {:?}", path))?))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let task = ImportTask::new(args.dictionary, settings);
    let mut write_error: Option<io::Error> = None;

    let summary = task.run(rows, |progress, entries| {
        for entry in entries {
            if write_error.is_some() {
                break;
            }
            let line = match serde_json::to_string(&entry) {
                Ok(s) => s,
                Err(e) => {
                    logger::error(&format!("Row {}: failed to serialize: {}", entry.row_id, e));
                    continue;
                }
            };
            if let Err(e) = writeln!(out, "{}", line) {
                write_error = Some(e);
            }
        }
        pb.set_position(progress.rows_seen as u64);
        pb.set_message(format!("{} imported, {} failed", progress.imported, progress.failed));
    });

    pb.finish_with_message(format!(
        "Completed: {} imported, {} failed",
        summary.imported, summary.failed
    ));

    if let Some(e) = write_error {
        return Err(e).context("Failed to write entries");
    }
    out.flush()?;

    for e in &summary.errors {
        eprintln!("{}", e);
    }

    if summary.failed > 0 {
        anyhow::bail!(
            "Import of {} completed with {} error(s). Check the logs for details.",
            summary.dictionary,
            summary.failed
        );
    }

    Ok(())
}
