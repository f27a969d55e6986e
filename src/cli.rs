use std::path::Path;

use crate::catalog::{self, Catalog};

pub const USAGE: &str = "\
Usage:
  folio [catalog.toml]     Browse a catalog (built-in catalog if omitted)
  folio init               Create an empty config file
  folio check <catalog>    Validate a catalog and print its tags
  folio --help             Show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Browse(Option<String>),
    Init,
    Check(String),
    Help,
}

/// Parses the arguments after the program name.
///
/// # Errors
/// Returns a message for unknown flags and a `check` without a path.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Browse(None)),
        Some("init") => Ok(Command::Init),
        Some("check") => args
            .get(1)
            .map(|path| Command::Check(path.clone()))
            .ok_or_else(|| "check needs a catalog path".to_string()),
        Some("-h" | "--help" | "help") => Ok(Command::Help),
        Some(flag) if flag.starts_with('-') => Err(format!("unknown option: {flag}")),
        Some(path) => Ok(Command::Browse(Some(path.to_string()))),
    }
}

/// Output of `folio check`: the counts, then the vocabulary on one line.
#[must_use]
pub fn check_report(source: &Path, catalog: &Catalog) -> String {
    let tags = catalog::build_tag_index(catalog.projects());
    let mut report = format!(
        "{}: {} projects, {} tags",
        source.display(),
        catalog.len(),
        tags.len()
    );
    if !tags.is_empty() {
        report.push('\n');
        report.push_str(&tags.join(" "));
    }
    report
}
