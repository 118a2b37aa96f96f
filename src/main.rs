//! relnotes: print the latest release section of CHANGELOG.md.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgAction, Parser};
use relnotes::document::{Document, CHANGELOG_FILE};
use relnotes::output::{self, OutputFormat};
use relnotes::{config, section, Error};
use std::io::{self, ErrorKind, IsTerminal};
use std::path::Path;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "relnotes", version)]
#[command(about = "Print the latest release section of CHANGELOG.md", long_about = None)]
struct Args {
    /// Print the section as a JSON object
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // A closed pipe (`relnotes | head`) is not a failure.
        Err(Error::Write(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> relnotes::Result<()> {
    let cfg = config::Config::load()?;
    let doc = Document::load(Path::new(CHANGELOG_FILE))?;
    let release = section::first_release(&doc, &cfg)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    let mut stdout = io::stdout().lock();
    output::write_section(&mut stdout, &release, format)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
