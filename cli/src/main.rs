mod import;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use kosha_backend::directive::resolve_directives;
use kosha_backend::lipi::try_convert;
use kosha_backend::phonetic::{phonetic_for_text, PhoneticOptions};
use kosha_backend::types::{parse_script_code_list, LanguageValue, ScriptCode};
use kosha_backend::{init_engine, logger, DictionaryId, MarkupParser, Scheme};

/// Reads a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        Ok(s)
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))
    }
}

fn transliterate_text(text: &str, from: &str, to: &str) -> Result<(), String> {
    let out = try_convert(text, from, to).map_err(|e| e.to_string())?;
    println!("{}", out);
    Ok(())
}

fn resolve_file(path: &Path, fill: Option<&str>) -> Result<(), String> {
    let json = read_input(path)?;
    let values: Vec<LanguageValue> =
        serde_json::from_str(&json).map_err(|e| format!("Invalid language values: {}", e))?;

    let fill_languages = match fill {
        Some(s) => Some(parse_script_code_list(s).map_err(|e| e.to_string())?),
        None => None,
    };

    let resolved = resolve_directives(Some(&values), fill_languages.as_deref()).unwrap_or_default();
    let out = serde_json::to_string_pretty(&resolved).map_err(|e| e.to_string())?;
    println!("{}", out);
    Ok(())
}

fn render_markup(
    dictionary: DictionaryId,
    path: &Path,
    to: Scheme,
    headword: Option<&str>,
    show_unknown: bool,
) -> Result<(), String> {
    let markup = read_input(path)?;
    let parser = MarkupParser::for_dictionary(dictionary);
    let parsed = parser.parse(&markup, to, headword);

    println!("{}", parsed.markdown);
    if show_unknown && !parsed.unknown_tags.is_empty() {
        let tags: Vec<&str> = parsed.unknown_tags.iter().map(|s| s.as_str()).collect();
        eprintln!("Unknown tags: {}", tags.join(", "));
    }
    Ok(())
}

fn list_dictionaries() -> Result<(), String> {
    for id in DictionaryId::ALL {
        let c = id.config();
        println!("{:<6} {:<10} {}", c.code, c.headword_scheme.as_str(), c.title);
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Kosha lexicon and transliteration CLI", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level: silent, error, warn, info or debug.
    #[arg(long, global = true, env = "LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert text between schemes (devanagari, telugu, iast, itrans, slp1, hk)
    #[command(arg_required_else_help = true)]
    Transliterate {
        text: String,

        #[arg(long, default_value = "iast")]
        from: String,

        #[arg(long, default_value = "devanagari")]
        to: String,
    },

    /// Resolve $transliterateFrom directives in a JSON array of language values
    #[command(arg_required_else_help = true)]
    Resolve {
        /// JSON file, or - for stdin
        #[arg(value_name = "FILE_PATH")]
        path: PathBuf,

        /// Comma-separated languages to add when missing, e.g. "SAN,TEL"
        #[arg(long, env = "KOSHA_FILL_LANGUAGES")]
        fill: Option<String>,
    },

    /// Render one entry's markup to markdown
    #[command(arg_required_else_help = true)]
    Render {
        /// Dictionary code, e.g. mw, ap90, brown
        dictionary: DictionaryId,

        /// Markup file, or - for stdin
        #[arg(value_name = "FILE_PATH")]
        path: PathBuf,

        /// Scheme for headword text
        #[arg(long, default_value = "iast")]
        to: Scheme,

        #[arg(long)]
        headword: Option<String>,

        /// Print unrecognized tag names to stderr
        #[arg(long, default_value_t = false)]
        show_unknown: bool,
    },

    /// Print the phonetic index string for a text
    #[command(arg_required_else_help = true)]
    Phonetic {
        /// Language code of the text: SAN, TEL, IAST, ITRANS, SLP1, HK or ENG
        language: ScriptCode,

        text: String,

        #[arg(long, env = "KOSHA_PHONETIC_MAX_LENGTH", default_value_t = 1000)]
        max_length: usize,
    },

    /// Convert dictionary rows (JSON lines) into lexicon entries (JSON lines)
    #[command(arg_required_else_help = true)]
    Import {
        dictionary: DictionaryId,

        /// Input rows, one JSON object per line
        #[arg(value_name = "FILE_PATH")]
        input: PathBuf,

        /// Output file. Entries are printed to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, env = "KOSHA_BATCH_SIZE")]
        batch_size: Option<usize>,

        /// Stop after this many rows
        #[arg(long, env = "KOSHA_IMPORT_LIMIT")]
        limit: Option<usize>,

        #[arg(long, env = "KOSHA_FILL_LANGUAGES")]
        fill: Option<String>,
    },

    /// List the known dictionaries
    ListDictionaries,
}

fn main() {
    if dotenv().is_err() {
        logger::debug("No .env file found or failed to load.");
    }

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        if !logger::set_log_level_str(level) {
            eprintln!("Error: Invalid log level: {}", level);
            exit(1);
        }
    }

    if let Err(e) = init_engine() {
        eprintln!("Error: {}", e);
        exit(1);
    }

    let command_result = match cli.command {
        Commands::Transliterate { text, from, to } => transliterate_text(&text, &from, &to),

        Commands::Resolve { path, fill } => resolve_file(&path, fill.as_deref()),

        Commands::Render { dictionary, path, to, headword, show_unknown } => {
            render_markup(dictionary, &path, to, headword.as_deref(), show_unknown)
        }

        Commands::Phonetic { language, text, max_length } => {
            let opts = PhoneticOptions { max_source_length: max_length };
            println!("{}", phonetic_for_text(language, &text, &opts));
            Ok(())
        }

        Commands::Import { dictionary, input, output, batch_size, limit, fill } => {
            if !input.exists() {
                Err(format!("Input path does not exist: {:?}", input))
            } else {
                let args = import::ImportArgs { dictionary, input, output, batch_size, limit, fill };
                import::import_rows(args).map_err(|e| format!("{:#}", e))
            }
        }

        Commands::ListDictionaries => list_dictionaries(),
    };

    match command_result {
        Ok(_) => exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
