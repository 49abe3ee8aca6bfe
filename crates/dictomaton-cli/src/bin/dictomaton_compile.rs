// dictomaton-compile: Compile a word list into a binary dictionary.
//
// Reads a UTF-8 word list (one word per line, any order, duplicates allowed)
// and writes the compiled perfect-hash dictionary.
//
// Usage:
//   dictomaton-compile [-n state|transition] INPUT OUTPUT
//
// Options:
//   -n, --numbering NAME     Numbering to record (state, transition)
//   -h, --help               Print help

fn main() {
    dictomaton_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (numbering, args) = dictomaton_cli::parse_option(&args, "--numbering", "-n")
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    if dictomaton_cli::wants_help(&args) || args.len() != 2 {
        println!("dictomaton-compile: Compile a word list into a binary dictionary.");
        println!();
        println!("Usage: dictomaton-compile [-n state|transition] INPUT OUTPUT");
        println!();
        println!("Options:");
        println!("  -n, --numbering NAME   Numbering to record: state (default), transition");
        println!("  -h, --help             Print this help");
        if !dictomaton_cli::wants_help(&args) {
            std::process::exit(2);
        }
        return;
    }

    let numbering = dictomaton_cli::parse_numbering(numbering.as_deref())
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));
    let dict = dictomaton_cli::load_dictionary(std::path::Path::new(&args[0]), numbering)
        .unwrap_or_else(|e| dictomaton_cli::fatal(&e));

    let bytes = dict.to_bytes();
    std::fs::write(&args[1], &bytes)
        .unwrap_or_else(|e| dictomaton_cli::fatal(&format!("failed to write {}: {e}", args[1])));

    log::info!(
        "wrote {} sequences ({} states, {} transitions, {} bytes) to {}",
        dict.len(),
        dict.dictionary().state_count(),
        dict.dictionary().transition_count(),
        bytes.len(),
        args[1]
    );
}
