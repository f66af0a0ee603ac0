use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use tracing_subscriber::EnvFilter;

/// Archived log files kept next to `log.txt`.
pub const KEEP_LOG_FILES: usize = 5;

/// Log levels in increasing verbosity.
///
/// A level enables itself and every less verbose one, e.g. `Level::Info`
/// enables Info, Warn and Error. Read from `LOG_LEVEL`, changed with
/// `set_log_level()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Silent = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /// Case insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Some(Level::Silent),
            "error" => Some(Level::Error),
            "warn" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Silent => "SILENT",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Directory for log files, from `KOSHA_LOG_DIR`. File logging is off when unset.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("KOSHA_LOG_DIR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

fn is_archived_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("log.") && n.ends_with(".txt") && n != "log.txt")
        .unwrap_or(false)
}

/// Moves `dir/log.txt` aside as `log.<modified time>.txt` and deletes the
/// oldest archives beyond `keep`.
pub fn rotate_log_files(dir: &Path, keep: usize) -> io::Result<()> {
    let log_file = dir.join("log.txt");
    if log_file.try_exists()? {
        let modified: DateTime<Local> = fs::metadata(&log_file)?.modified()?.into();
        let archived = dir.join(format!("log.{}.txt", modified.format("%Y-%m-%dT%H-%M-%S")));
        fs::rename(&log_file, archived)?;
    }

    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_archived_log(path))
        .collect();

    // Timestamped names sort oldest first.
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for file in &archives[..excess] {
        if let Err(e) = fs::remove_file(file) {
            eprintln!("Failed to remove old log file {:?}: {}", file, e);
        }
    }

    Ok(())
}

pub struct Logger {
    log_file: Option<PathBuf>,
    print_log: bool,
    level: Mutex<Level>,
}

impl Logger {
    /// A logger that only mirrors messages to tracing.
    pub fn printing(level: Level) -> Self {
        Logger {
            log_file: None,
            print_log: true,
            level: Mutex::new(level),
        }
    }

    /// A logger appending to `dir/log.txt`, after rotating earlier logs.
    pub fn to_dir(dir: &Path, level: Level, print_log: bool) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        if let Err(e) = rotate_log_files(dir, KEEP_LOG_FILES) {
            eprintln!("Failed to rotate log files: {}", e);
        }
        Ok(Logger {
            log_file: Some(dir.join("log.txt")),
            print_log,
            level: Mutex::new(level),
        })
    }

    /// Configured by `LOG_LEVEL`, `KOSHA_LOG_DIR`, `DISABLE_LOG` and
    /// `ENABLE_PRINT_LOG`. Without a log file, messages are printed.
    pub fn from_env() -> io::Result<Self> {
        let level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|v| Level::from_str(&v))
            .unwrap_or(Level::Info);

        let log_dir = get_log_dir().filter(|_| !env_flag("DISABLE_LOG").unwrap_or(false));
        match log_dir {
            Some(dir) => Logger::to_dir(&dir, level, env_flag("ENABLE_PRINT_LOG").unwrap_or(false)),
            None => Ok(Logger::printing(level)),
        }
    }

    pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_writer(io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }

    fn write_to_file(&self, log_file: &Path, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(log_file)?;
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3fZ");
        writeln!(file, "[{}] {}", timestamp, line)
    }

    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Silent && self.get_level() >= level
    }

    pub fn log(&self, level: Level, msg: &str) {
        if !self.enabled(level) {
            return;
        }

        if self.print_log {
            match level {
                Level::Error => tracing::error!("{}", msg),
                Level::Warn => tracing::warn!("{}", msg),
                Level::Info => tracing::info!("{}", msg),
                Level::Debug => tracing::debug!("{}", msg),
                Level::Silent => {}
            }
        }

        if let Some(log_file) = &self.log_file {
            if let Err(e) = self.write_to_file(log_file, &format!("{}: {}", level.label(), msg)) {
                eprintln!("Failed to write to log file: {}", e);
            }
        }
    }

    /// Level::Info if the lock is poisoned.
    pub fn get_level(&self) -> Level {
        self.level.lock().map(|l| *l).unwrap_or(Level::Info)
    }

    pub fn set_level(&self, new_level: Level) {
        if let Ok(mut level) = self.level.lock() {
            *level = new_level;
        }
    }
}

pub static LOGGER: OnceLock<Logger> = OnceLock::new();
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

fn with_logger<F, R>(f: F) -> R
where
    F: FnOnce(&Logger) -> R,
{
    TRACING_INITIALIZED.get_or_init(|| {
        // A test harness may already have installed a subscriber.
        if let Err(e) = Logger::init_tracing() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });

    let logger = LOGGER.get_or_init(|| {
        Logger::from_env().unwrap_or_else(|e| {
            eprintln!("Failed to create log file, printing instead: {}", e);
            Logger::printing(Level::Info)
        })
    });

    f(logger)
}

pub fn info(msg: &str) {
    with_logger(|logger| logger.log(Level::Info, msg));
}

pub fn warn(msg: &str) {
    with_logger(|logger| logger.log(Level::Warn, msg));
}

pub fn error(msg: &str) {
    with_logger(|logger| logger.log(Level::Error, msg));
}

pub fn debug(msg: &str) {
    with_logger(|logger| logger.log(Level::Debug, msg));
}

pub fn set_log_level(level: Level) {
    with_logger(|logger| logger.set_level(level));
}

/// Returns false if the string is not a valid level.
pub fn set_log_level_str(level_str: &str) -> bool {
    match Level::from_str(level_str) {
        Some(level) => {
            set_log_level(level);
            true
        }
        None => false,
    }
}

/// Formats a duration as `HH:MM:SS`.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}
