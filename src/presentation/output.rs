//! Output Rendering
//!
//! Text renderers return strings so callers decide where they go
//! (documents and summaries to stdout, diagnostics to stderr). JSON output
//! is NDJSON: one event object per line.

use std::io::{self, Write};
use std::path::Path;

use is_terminal::IsTerminal;

use crate::application::DocumentSummary;
use crate::error::BlueprintError;

/// Icons for output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub check: &'static str,
    pub cross: &'static str,
    pub arrow: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            arrow: "→",
        }
    }

    pub fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            arrow: "->",
        }
    }

    /// Unicode on an interactive terminal, ASCII otherwise
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Multi-line description of a compiled document
pub fn render_summary(summary: &DocumentSummary) -> String {
    let mut lines = vec![
        format!("Namespace: {}", summary.namespace),
        format!(
            "Machines: {} ({}, {})",
            summary.machines,
            plural(summary.masters, "master"),
            plural(summary.workers, "worker")
        ),
        format!("Services: {}", summary.labels.len()),
    ];
    for label in &summary.labels {
        let mut line = format!("  - {}: {}", label.name, plural(label.containers, "container"));
        if !label.annotations.is_empty() {
            line.push_str(&format!(" [{}]", label.annotations.join(", ")));
        }
        lines.push(line);
    }
    lines.push(format!("Containers: {}", summary.containers));
    lines.push(format!("Connections: {}", summary.connections));
    lines.push(format!("Placements: {}", summary.placements));
    lines.push(format!("Invariants: {}", summary.invariants));
    if summary.max_price > 0.0 {
        lines.push(format!("Max price: {}", summary.max_price));
    }
    lines.join("\n")
}

/// Result of `compile -o FILE`
pub fn render_compiled(
    icons: Icons,
    manifest: &Path,
    output: &Path,
    summary: &DocumentSummary,
) -> String {
    format!(
        "{} Compiled {} {} {}\n\n{}",
        icons.check,
        manifest.display(),
        icons.arrow,
        output.display(),
        render_summary(summary)
    )
}

/// Result of `check`
pub fn render_check(icons: Icons, manifest: &Path, summary: &DocumentSummary) -> String {
    let mut out = format!("{} {} is consistent", icons.check, manifest.display());
    if summary.invariants > 0 {
        out.push_str(&format!(
            "\n  {} held",
            plural(summary.invariants, "invariant")
        ));
    }
    out.push_str("\n\n");
    out.push_str(&render_summary(summary));
    out
}

/// One-line error report for stderr
pub fn format_error(icons: Icons, err: &anyhow::Error) -> String {
    match err.downcast_ref::<BlueprintError>() {
        Some(blueprint) => format!("{} {} error: {:#}", icons.cross, blueprint.kind().as_str(), err),
        None => format!("{} error: {:#}", icons.cross, err),
    }
}

/// Error as a JSON event
pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .downcast_ref::<BlueprintError>()
        .map(|e| e.kind().as_str());
    serde_json::json!({
        "event": "error",
        "kind": kind,
        "message": format!("{:#}", err),
    })
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
