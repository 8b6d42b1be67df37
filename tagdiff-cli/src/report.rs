//! Human-readable and JSON reports.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use tagdiff_compare::{Comparison, Mismatch, Severity, Side};
use tagdiff_html::Token;
use tagdiff_loader::LoadedDocument;

/// Shown instead of source text for lines past the end of a document.
const END_OF_INPUT_TEXT: &str = "<end of input>";

/// Options for the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ReportOptions {
    fn paint(self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Write every mismatch with both sides' source lines, then the verdict.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_text_report(
    out: &mut dyn Write,
    comparison: &Comparison,
    left: &LoadedDocument,
    right: &LoadedDocument,
    options: &ReportOptions,
) -> io::Result<()> {
    for mismatch in &comparison.mismatches {
        write_mismatch(out, mismatch, left, right, *options)?;
        writeln!(out)?;
    }

    let verdict = if comparison.matched {
        options.paint("Files match.", Style::new().green().bold())
    } else {
        options.paint("Files do not match.", Style::new().red().bold())
    };
    writeln!(out, "{verdict}")
}

fn write_mismatch(
    out: &mut dyn Write,
    mismatch: &Mismatch,
    left: &LoadedDocument,
    right: &LoadedDocument,
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "On the following lines...")?;
    for (doc, side) in [(left, &mismatch.left), (right, &mismatch.right)] {
        let location = options.paint(&format!("{}:{}", doc.name, side.line), Style::new().cyan());
        let source = doc.line_text(side.line).unwrap_or(END_OF_INPUT_TEXT);
        writeln!(out, "  {location}: {source}")?;
    }

    let what = match mismatch.severity {
        Severity::Soft => "text mismatch",
        Severity::Hard => "structure mismatch",
    };
    let style = match mismatch.severity {
        Severity::Soft => Style::new().yellow(),
        Severity::Hard => Style::new().red(),
    };
    let summary = format!(
        "{} != {} ({what}, {})",
        render(&mismatch.left),
        render(&mismatch.right),
        mismatch.severity.outcome(),
    );
    writeln!(out, "  {}", options.paint(&summary, style))
}

/// A side rendered the way its token would print.
fn render(side: &Side) -> String {
    Token::new(side.line, side.kind, side.value.clone()).to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    matched: bool,
    first: &'a str,
    second: &'a str,
    mismatches: Vec<JsonMismatch<'a>>,
}

#[derive(Serialize)]
struct JsonMismatch<'a> {
    severity: Severity,
    left: JsonSide<'a>,
    right: JsonSide<'a>,
}

#[derive(Serialize)]
struct JsonSide<'a> {
    #[serde(flatten)]
    side: &'a Side,
    /// Original line text, `null` for the end-of-input sentinel.
    source: Option<&'a str>,
}

/// Write the comparison as a single pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn write_json_report(
    out: &mut dyn Write,
    comparison: &Comparison,
    left: &LoadedDocument,
    right: &LoadedDocument,
) -> anyhow::Result<()> {
    let report = JsonReport {
        matched: comparison.matched,
        first: &left.name,
        second: &right.name,
        mismatches: comparison
            .mismatches
            .iter()
            .map(|m| JsonMismatch {
                severity: m.severity,
                left: JsonSide {
                    side: &m.left,
                    source: left.line_text(m.left.line),
                },
                right: JsonSide {
                    side: &m.right,
                    source: right.line_text(m.right.line),
                },
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
