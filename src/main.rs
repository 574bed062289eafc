use std::{fs, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, warn};
use mate::{
    check_nesting, evaluate,
    interpreter::token::{render_expression, render_tree},
    tokenize,
};

/// mate evaluates arithmetic expressions made of numbers, `+ - * /` and
/// parentheses. Operators are applied strictly left to right; use
/// parentheses to group.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mate to read expressions from a file, one per line, instead of
    /// evaluating the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Prints the token tree of every expression before its result.
    #[arg(short, long)]
    tokens: bool,

    /// Rejects expressions whose parentheses nest deeper than this.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let mut failed = false;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        if !run(line, &args) {
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Evaluates one expression and prints the outcome. Returns `false` on error.
fn run(line: &str, args: &Args) -> bool {
    if let Err(e) = check_nesting(line, args.max_depth) {
        warn!("refusing to evaluate a {}-byte line: {e}", line.len());
        eprintln!("Error: {e}");
        return false;
    }

    let tokens = tokenize(line);

    if args.tokens {
        println!("{}", render_expression(&tokens));
        print!("{}", render_tree(&tokens));
    }

    match evaluate(&tokens) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}
