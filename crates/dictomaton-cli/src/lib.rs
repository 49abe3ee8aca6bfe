// dictomaton-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use dictomaton::{DictionaryBuilder, Numbering, PerfectHashDictionary, format};

/// Environment variable naming the default dictionary file.
pub const DICT_ENV: &str = "DICTOMATON_DICT";

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Resolve the dictionary path: the explicit argument first, then
/// `DICTOMATON_DICT`.
pub fn resolve_dict_path(dict_path: Option<&str>) -> Result<PathBuf, String> {
    if let Some(path) = dict_path {
        return Ok(PathBuf::from(path));
    }
    match std::env::var(DICT_ENV) {
        Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(format!("no dictionary given (use -d PATH or set {DICT_ENV})")),
    }
}

/// Load a dictionary file.
///
/// Compiled dictionaries are recognized by their header and loaded directly,
/// keeping the numbering they were written with. Anything else is read as a
/// UTF-8 word list, one word per line, in any order.
pub fn load_dictionary(path: &Path, numbering: Numbering) -> Result<PerfectHashDictionary, String> {
    let data =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    if format::is_dictionary(&data) {
        log::info!("loading compiled dictionary {}", path.display());
        return PerfectHashDictionary::from_bytes(&data)
            .map_err(|e| format!("failed to load {}: {e}", path.display()));
    }

    let text = String::from_utf8(data)
        .map_err(|e| format!("{} is neither a dictionary nor UTF-8 text: {e}", path.display()))?;
    let words = parse_word_list(&text);
    log::info!("building dictionary from {} words in {}", words.len(), path.display());

    let mut builder = DictionaryBuilder::new();
    builder
        .add_all(&words)
        .map_err(|e| format!("failed to build dictionary: {e}"))?;
    Ok(builder.build_perfect_hash(numbering))
}

/// Split a word list into sorted, unique, non-empty trimmed lines.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Parse a `--name=VALUE`, `--name VALUE` or `-s VALUE` option from command
/// line args.
///
/// Returns `(value, remaining_args)`.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let long_eq = format!("{long}=");

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse the `--numbering` option value.
pub fn parse_numbering(value: Option<&str>) -> Result<Numbering, String> {
    match value {
        None | Some("state") => Ok(Numbering::StateCardinality),
        Some("transition") => Ok(Numbering::TransitionCardinality),
        Some(other) => Err(format!(
            "unknown numbering {other:?} (expected \"state\" or \"transition\")"
        )),
    }
}

/// Positional arguments, or the non-empty lines of stdin if there are none.
pub fn input_words(args: &[String]) -> Vec<String> {
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();
    if !words.is_empty() {
        return words;
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                let word = line.trim();
                if !word.is_empty() {
                    lines.push(word.to_string());
                }
            }
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
