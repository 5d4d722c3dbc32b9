//! Output formatting: JSON, compact JSON, YAML.
//!
//! Everything the CLI prints is serde-serializable, so rendering is a
//! straight dispatch on `--output`.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatcher ────────────────────────────────────────────────

/// Render a serializable value in the chosen format.
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(render_err)?,
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(render_err)?,
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(render_err)?,
    };
    Ok(rendered.trim_end().to_owned())
}

fn render_err(err: impl std::fmt::Display) -> CliError {
    CliError::Render(err.to_string())
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Status lines ─────────────────────────────────────────────────────

fn should_color() -> bool {
    io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Success note on stderr, so stdout stays machine-readable.
pub fn print_ok(message: &str, quiet: bool) {
    if quiet {
        return;
    }
    if should_color() {
        eprintln!("{} {message}", "✓".green().bold());
    } else {
        eprintln!("ok: {message}");
    }
}

/// Labelled block on stderr, used for side-by-side drift output.
pub fn print_section(label: &str, body: &str) {
    if should_color() {
        eprintln!("{}", label.yellow().bold());
    } else {
        eprintln!("{label}");
    }
    eprintln!("{body}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_each_format() {
        let data = json!({"type": "ALL"});
        assert_eq!(
            render(OutputFormat::Json, &data).unwrap(),
            "{\n  \"type\": \"ALL\"\n}"
        );
        assert_eq!(
            render(OutputFormat::JsonCompact, &data).unwrap(),
            "{\"type\":\"ALL\"}"
        );
        assert_eq!(render(OutputFormat::Yaml, &data).unwrap(), "type: ALL");
    }
}
