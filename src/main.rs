//! `docsmith` — Documentation conversion and package scaffolding toolkit

use clap::Parser;

use docsmith::cli::args::Cli;
use docsmith::cli::commands;
use docsmith::error::ExitCode;
use docsmith::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
