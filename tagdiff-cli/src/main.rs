//! tagdiff
//!
//! Compare the tag structure and text of two HTML-like documents.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tagdiff_cli::{Cli, EXIT_INPUT_ERROR, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match run(&cli, &mut stdout) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}
