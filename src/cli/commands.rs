use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app::{init_config, Config};
use crate::scanner::{Language, ScanReport, Scanner, Symbol};

use super::{Commands, OutputFormat};

/// Handle CLI subcommands
pub fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scan {
            path,
            format,
            output,
            compact,
            sequential,
            max_depth,
        } => {
            let mut scan_config = config.scan.clone();
            if *sequential {
                scan_config.parallel = false;
            }
            if max_depth.is_some() {
                scan_config.max_depth = *max_depth;
            }

            let root = path.clone().unwrap_or_else(|| PathBuf::from("."));
            let report = Scanner::with_config(scan_config).scan_project(&root);

            let rendered = match format.unwrap_or(config.output.format) {
                OutputFormat::Text => render_report(&report, output.is_none()),
                OutputFormat::Json => to_json(&report, config.output.pretty && !*compact)?,
            };
            emit(&rendered, output.as_deref())
        }
        Commands::Ast { file, format } => {
            let symbols = Scanner::with_config(config.scan.clone()).ast_of_file(file)?;

            let rendered = match format.unwrap_or(config.output.format) {
                OutputFormat::Text => render_symbols(&symbols, true),
                OutputFormat::Json => to_json(&symbols, config.output.pretty)?,
            };
            emit(&rendered, None)
        }
        Commands::Languages => {
            print!("{}", render_languages());
            Ok(())
        }
        Commands::Init => {
            let (path, created) = init_config()?;
            if created {
                println!("Created default configuration at: {}", path.display());
            } else {
                println!("Configuration already exists at: {}", path.display());
            }
            Ok(())
        }
    }
}

/// Summary line followed by each file's symbols
///
/// `color` is off when the text goes to a file.
pub fn render_report(report: &ScanReport, color: bool) -> String {
    let mut out = format!(
        "Scanned {} files ({} symbols) in {:.2}ms\n",
        paint(color, &report.files_scanned.to_string(), |s| s.bold()),
        report.total_symbols(),
        report.duration_ms
    );

    for file in &report.files {
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            paint(color, &file.path, |s| s.green()),
            paint(color, &format!("({})", file.language), |s| s.dimmed())
        ));
        out.push_str(&render_symbols(&file.symbols, color));
    }

    out
}

/// One symbol per line: position, kind, name
pub fn render_symbols(symbols: &[Symbol], color: bool) -> String {
    symbols
        .iter()
        .map(|s| {
            format!(
                "  {:>5}:{:<3} {:<9} {}\n",
                s.line,
                s.column + 1,
                paint(color, &s.kind.to_string(), |k| k.cyan()),
                s.name
            )
        })
        .collect()
}

fn paint(color: bool, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_languages() -> String {
    Language::SUPPORTED
        .iter()
        .map(|lang| format!("  • {:<11} {}\n", lang.name(), lang.extensions().join(", ")))
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print to stdout or save to `output`
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!("Report saved to: {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
