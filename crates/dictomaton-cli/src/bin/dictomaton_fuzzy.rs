// dictomaton-fuzzy: Find dictionary words within a small edit distance.
//
// For each query word prints all dictionary words within Levenshtein
// distance k (1 or 2), sorted.
//
// Usage:
//   dictomaton-fuzzy [-d DICT] [-k 1|2] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word list or compiled dictionary
//   -k, --distance K         Maximum edit distance (default 1)
//   -h, --help               Print help

use std::io::{self, Write};

use dictomaton::{LevenshteinAutomaton, Numbering};

fn main() {
    dictomaton_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = dictomaton_cli::parse_option(&args, "--dict-path", "-d")
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let (distance, args) = dictomaton_cli::parse_option(&args, "--distance", "-k")
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    if dictomaton_cli::wants_help(&args) {
        println!("dictomaton-fuzzy: Approximate dictionary lookup.");
        println!();
        println!("Usage: dictomaton-fuzzy [-d DICT] [-k 1|2] [WORD...]");
        println!();
        println!("If WORD arguments are given, searches for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list or compiled dictionary");
        println!("                         (default: ${})", dictomaton_cli::DICT_ENV);
        println!("  -k, --distance K       Maximum edit distance, 1 or 2 (default 1)");
        println!("  -h, --help             Print this help");
        return;
    }

    let distance = match distance.as_deref() {
        None => 1,
        Some(value) => value
            .parse::<u8>()
            .unwrap_or_else(|_| dictomaton_cli::fatal(&format!("invalid distance {value:?}"))),
    };
    let path = dictomaton_cli::resolve_dict_path(dict_path.as_deref())
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let dict = dictomaton_cli::load_dictionary(&path, Numbering::default())
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in dictomaton_cli::input_words(&args) {
        let automaton = LevenshteinAutomaton::new(&word, distance)
            .unwrap_or_else(|e| dictomaton_cli::fatal(&e.to_string()));
        let mut matches: Vec<String> = automaton.intersection_language(&dict).into_iter().collect();
        matches.sort();

        if matches.is_empty() {
            let _ = writeln!(out, "{word}: (no matches)");
        } else {
            let _ = writeln!(out, "{word}: {}", matches.join(", "));
        }
    }
}
