//! Output formatting for search summaries.
//!
//! This module provides formatters for rendering a [`SearchSummary`]
//! in the formats selectable with `--format`.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use mazepath_lib::{ExhaustionReason, SearchOutcome, SearchSummary};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header plus one numbered line per step.
    #[default]
    Text,
    /// Bare path with `+`/`|`/`-` prefixes.
    Basic,
    /// Pretty-printed JSON summary.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Basic => "basic",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Write `summary` to `out` in the requested format.
pub fn render(
    summary: &SearchSummary,
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(summary, out),
        OutputFormat::Basic => render_basic(summary, out),
        OutputFormat::Json => render_json(summary, out),
    }
}

/// Render a search summary in text format.
pub fn render_text(summary: &SearchSummary, out: &mut impl Write) -> io::Result<()> {
    let text = summary.render_text();
    out.write_all(text.as_bytes())
}

/// Render a search summary in basic path format.
///
/// Uses `+`/`|`/`-` prefixes for first/middle/last steps. A path of a
/// single cell prints only the `+` line.
pub fn render_basic(summary: &SearchSummary, out: &mut impl Write) -> io::Result<()> {
    let len = summary.steps.len();
    if len == 0 {
        return Ok(());
    }
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        writeln!(out, "{} {}", prefix, step.state)?;
    }
    writeln!(
        out,
        "{} moves, {} explored",
        summary.moves,
        summary.explored
    )
}

/// Render a search summary as pretty JSON.
pub fn render_json(summary: &SearchSummary, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Message shown on stderr when a search ends without a path.
///
/// Returns `None` for successful summaries.
pub fn failure_message(summary: &SearchSummary) -> Option<String> {
    let SearchOutcome::Exhausted { reason } = summary.outcome else {
        return None;
    };
    let message = match reason {
        ExhaustionReason::NoSolutionFound => format!(
            "No path found from {} after exploring {} states. \
             Every reachable cell was searched; check that an objective ('.') is reachable.",
            summary.start, summary.explored
        ),
        ExhaustionReason::BudgetExceeded => format!(
            "Search from {} stopped after exploring {} states. \
             Try a larger --max-expansions or --timeout-ms.",
            summary.start, summary.explored
        ),
    };
    Some(message)
}
