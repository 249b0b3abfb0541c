mod error;
mod generators;
mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use crate::error::PasswordError;
use crate::generators::{generate, GenerationRequest, PasswordGenerator};
use crate::input::{collect_request, parse_length, Prompter, StdioPrompter};

/// Generate a random password from letters, digits and symbols.
///
/// Without --length the options are asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "passgen", version, about)]
struct Cli {
    /// Number of characters to generate
    #[arg(short = 'L', long, value_parser = parse_length, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Include ASCII letters
    #[arg(short, long)]
    letters: bool,

    /// Include decimal digits
    #[arg(short, long)]
    digits: bool,

    /// Include ASCII punctuation
    #[arg(short, long)]
    symbols: bool,

    /// Ask for the options even when --length is given
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let stdin = io::stdin();
    let mut prompter = StdioPrompter::new(stdin.lock(), io::stdout());

    match run(&cli, &mut prompter, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<(), PasswordError> {
    match cli.length {
        Some(length) if !cli.interactive => {
            debug!(
                "Flag mode: length={}, letters={}, digits={}, symbols={}",
                length, cli.letters, cli.digits, cli.symbols
            );
            let password = generate(length, cli.letters, cli.digits, cli.symbols)?;
            writeln!(out, "{}", password)?;
        }
        _ => {
            let request = collect_request(prompter)?;
            log_request(&request);
            let password = PasswordGenerator::new(&request).generate()?;
            writeln!(out, "Generated password: {}", password)?;
        }
    }
    Ok(())
}

fn log_request(request: &GenerationRequest) {
    let classes: Vec<&str> = request.classes().iter().map(|c| c.name()).collect();
    info!(
        "Generating {} characters from {} ({:.1} bits of entropy)",
        request.length(),
        classes.join(", "),
        request.alphabet().entropy_bits(request.length())
    );
}
