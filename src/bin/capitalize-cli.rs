use clap::Parser;

use capitalize::transform::capitalize_words;

#[derive(Parser)]
#[command(name = "capitalize-cli")]
#[command(about = "Capitalize each word of the given text", long_about = None)]
struct Cli {
    /// Text to capitalize; arguments are joined with single spaces
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.words.is_empty() {
        // Intentionally exits 0; missing input is a usage nudge, not a failure.
        eprintln!("Must pass in a string to capitalize.");
        return;
    }

    println!("{}", capitalize_words(&cli.words.join(" ")));
}
