//! Command-line front end for tagdiff.
//!
//! Loads two documents concurrently, compares their trees and writes a
//! report. The binary in `main.rs` only parses arguments and maps the
//! [`Outcome`] (or error) to an exit code:
//!
//! | Exit code | Meaning |
//! |---|---|
//! | 0 | The documents match |
//! | 1 | At least one mismatch was found |
//! | 2 | A document could not be loaded |

pub mod report;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tagdiff_common::warning::{clear_warnings, debug, set_color, set_verbose};
use tagdiff_compare::compare;
use tagdiff_html::{Tokenizer, dump_tree};
use tagdiff_loader::{FileSource, LoadOptions, LoadedDocument, load_pair};

use report::{ReportOptions, write_json_report, write_text_report};

/// Exit code for a run that could not load its input.
pub const EXIT_INPUT_ERROR: u8 = 2;

/// tagdiff - compare the tag structure and text of two documents
#[derive(Parser, Debug)]
#[command(name = "tagdiff")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXIT STATUS:
    0  files match
    1  files do not match
    2  a file could not be read

EXAMPLES:
    # Compare two files
    tagdiff before.html after.html

    # Machine-readable output
    tagdiff --json before.html after.html

    # Inspect what the tokenizer and tree builder saw
    tagdiff --tokens --tree before.html after.html
"#)]
pub struct Cli {
    /// First document (left side)
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second document (right side)
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Print the comparison as JSON
    #[arg(long, conflicts_with_all = ["tokens", "tree"])]
    pub json: bool,

    /// Dump both token streams before the report
    #[arg(long)]
    pub tokens: bool,

    /// Dump both trees before the report
    #[arg(long)]
    pub tree: bool,

    /// Seconds to wait for both documents to load
    #[arg(long, value_name = "SECS", default_value = "30")]
    pub timeout: u64,

    /// Disable colored output, on stdout and in stderr diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Print loader diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a completed comparison turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No mismatches.
    Match,
    /// At least one mismatch.
    Mismatch,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Match => 0,
            Self::Mismatch => 1,
        }
    }
}

/// Load, compare and report.
///
/// # Errors
///
/// Returns an error if either document cannot be loaded, or if writing the
/// report to `out` fails.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Outcome> {
    set_verbose(cli.verbose);
    set_color(!cli.no_color && !cli.json);
    clear_warnings();

    let options = LoadOptions::with_timeout(Duration::from_secs(cli.timeout));
    let (first, second) = load_pair(
        Box::new(FileSource::new(&cli.first)),
        Box::new(FileSource::new(&cli.second)),
        &options,
    )
    .context("could not load documents")?;

    for doc in [&first, &second] {
        for issue in &doc.issues {
            debug("Tree Builder", &format!("{}: {issue}", doc.name));
        }
    }

    if cli.tokens {
        write_tokens(out, &first)?;
        write_tokens(out, &second)?;
    }
    if cli.tree {
        write_tree(out, &first)?;
        write_tree(out, &second)?;
    }

    let comparison = compare(&first.tree, &second.tree);

    if cli.json {
        write_json_report(out, &comparison, &first, &second)?;
    } else {
        let report_options = ReportOptions {
            color: !cli.no_color,
        };
        write_text_report(out, &comparison, &first, &second, &report_options)?;
    }

    Ok(if comparison.matched {
        Outcome::Match
    } else {
        Outcome::Mismatch
    })
}

fn write_tokens(out: &mut dyn Write, doc: &LoadedDocument) -> Result<()> {
    writeln!(out, "=== Tokens: {} ===", doc.name)?;
    for token in Tokenizer::new(doc.lines.iter()) {
        let kind = token.kind.to_string();
        writeln!(out, "{:>4}  {kind:<12} {}", token.line, token.value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_tree(out: &mut dyn Write, doc: &LoadedDocument) -> Result<()> {
    writeln!(out, "=== Tree: {} ===", doc.name)?;
    write!(out, "{}", dump_tree(&doc.tree))?;
    writeln!(out)?;
    Ok(())
}
