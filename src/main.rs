//! justlex - prints the token stream of a Just source file.

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use justlex::{format_error, Lexer};

/// Tokenize a Just source file and print one token per line
#[derive(Parser, Debug)]
#[command(name = "justlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a Just source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(env = "JUSTLEX_FILE", default_value = "demos/generic.just")]
    file: PathBuf,

    /// Keep going after lexical errors, printing them all at the end
    #[arg(long)]
    recover: bool,

    /// Enable verbose output
    #[arg(short, long, env = "JUSTLEX_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let source = read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let mut lexer = Lexer::new(source.clone(), file_name);

    if cli.recover {
        let (tokens, errors) = lexer.tokenize_recovering();
        info!("Tokenized in {:?}", start.elapsed());

        for token in &tokens {
            println!("{}", token);
        }
        for error in &errors {
            eprint!("{}", format_error(error, &source));
        }

        return Ok(if errors.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    match lexer.tokenize() {
        Ok(tokens) => {
            info!("Tokenized in {:?}", start.elapsed());
            for token in &tokens {
                println!("{}", token);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            Ok(ExitCode::FAILURE)
        }
    }
}
