use clap::ValueEnum;
use colored::*;
use pgraphdb_client::{BindingValue, ServerFile, SparqlResults};
use std::fmt::Display;

/// Color mode options
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_colorize(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => supports_color::on(supports_color::Stream::Stderr).is_some(),
        }
    }

    /// Applies the mode to everything printed through `colored`.
    pub fn apply(&self) {
        colored::control::set_override(self.should_colorize());
    }
}

/// Renders SELECT results as tab separated lines, one per binding row, with
/// unbound variables as empty cells.
pub fn tsv(results: &SparqlResults, header: bool) -> String {
    let mut out = String::new();

    if header {
        out.push_str(&results.vars().join("\t"));
        out.push('\n');
    }

    for row in results.rows() {
        let cells: Vec<&str> = row
            .into_iter()
            .map(|cell| cell.map(BindingValue::value).unwrap_or(""))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

/// One server-side file name per line.
pub fn file_names(files: &[ServerFile]) -> String {
    files
        .iter()
        .map(|file| format!("{}\n", file.name))
        .collect()
}

pub fn print_error(err: impl Display) {
    eprintln!("{}: {}", "ERROR".red().bold(), err);
}
