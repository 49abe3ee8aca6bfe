// dictomaton-lookup: Look up words (or ranks) in a dictionary.
//
// Prints the perfect-hash rank of each word, or "-" for words that are not
// in the dictionary. With --reverse, reads ranks and prints the words.
//
// Usage:
//   dictomaton-lookup [-d DICT] [-n state|transition] [--reverse] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word list or compiled dictionary
//   -n, --numbering NAME     Numbering for word lists (state, transition)
//   -r, --reverse            Map ranks to words
//   -h, --help               Print help

use std::io::{self, Write};

fn main() {
    dictomaton_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = dictomaton_cli::parse_option(&args, "--dict-path", "-d")
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let (numbering, args) = dictomaton_cli::parse_option(&args, "--numbering", "-n")
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    if dictomaton_cli::wants_help(&args) {
        println!("dictomaton-lookup: Perfect-hash lookup of words in a dictionary.");
        println!();
        println!("Usage: dictomaton-lookup [-d DICT] [-n state|transition] [--reverse] [WORD...]");
        println!();
        println!("If WORD arguments are given, looks up each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list or compiled dictionary");
        println!("                         (default: ${})", dictomaton_cli::DICT_ENV);
        println!("  -n, --numbering NAME   Numbering for word lists: state (default), transition");
        println!("  -r, --reverse          Read ranks and print the words they number");
        println!("  -h, --help             Print this help");
        return;
    }

    let reverse = args.iter().any(|a| a == "--reverse" || a == "-r");
    let numbering = dictomaton_cli::parse_numbering(numbering.as_deref())
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let path = dictomaton_cli::resolve_dict_path(dict_path.as_deref())
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let dict = dictomaton_cli::load_dictionary(&path, numbering)
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for input in dictomaton_cli::input_words(&args) {
        if reverse {
            match input.parse::<u32>().ok().and_then(|rank| dict.sequence(rank)) {
                Some(word) => {
                    let _ = writeln!(out, "{input}: {word}");
                }
                None => {
                    let _ = writeln!(out, "{input}: -");
                }
            }
        } else {
            match dict.number(&input) {
                Some(rank) => {
                    let _ = writeln!(out, "{rank}: {input}");
                }
                None => {
                    let _ = writeln!(out, "-: {input}");
                }
            }
        }
    }
}
