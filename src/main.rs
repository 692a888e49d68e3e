use std::fs;
use std::io;

use clap::Parser;
use pyrite::interpreter::lexer::Lexer;

/// pyrite interprets a small, indentation-structured, dynamically typed
/// object-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pyrite to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Dumps the token stream instead of executing the script.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                &args.contents
            );
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        match Lexer::new(&script) {
            Ok(lexer) => {
                for token in lexer.tokens() {
                    println!("{token}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut stdout = io::stdout();
    if let Err(e) = pyrite::run(&script, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
