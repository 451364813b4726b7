use std::{cmp::Ordering, io};

use anstream::println;
use mvn_version::Version;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    VersionError(#[from] mvn_version::VersionError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct ParsedEntry<'a> {
    input: &'a str,
    canonical: &'a str,
    tokens: String,
}

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct ComparisonEntry<'a> {
    left: &'a str,
    right: &'a str,
    ordering: &'static str,
}

#[derive(Serialize)]
struct Report<'a> {
    versions: Vec<ParsedEntry<'a>>,
    comparisons: Vec<ComparisonEntry<'a>>,
}

impl<'a> Report<'a> {
    fn new(versions: &'a [Version]) -> Self {
        let parsed = versions
            .iter()
            .map(|version| ParsedEntry {
                input: version.as_str(),
                canonical: version.canonical(),
                tokens: version.tokens(),
            })
            .collect();

        let comparisons = versions
            .windows(2)
            .map(|pair| ComparisonEntry {
                left: pair[0].as_str(),
                right: pair[1].as_str(),
                ordering: symbol(pair[0].cmp(&pair[1])),
            })
            .collect();

        Self {
            versions: parsed,
            comparisons,
        }
    }
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

/// Parse every version, then print each one with its canonical form and tokens,
/// and how it compares to the version before it.
pub fn compare(inputs: &[String], format: OutputFormat) -> Result<()> {
    let versions = inputs
        .iter()
        .map(Version::parse)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Parsed {} versions", versions.len());

    let report = Report::new(&versions);
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), &report)?,
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &Report<'_>) {
    println!(
        "Display parameters as parsed by Maven (in canonical form and as a list of tokens) and comparison result:"
    );
    for (i, entry) in report.versions.iter().enumerate() {
        if let Some(comparison) = i.checked_sub(1).and_then(|prev| report.comparisons.get(prev)) {
            println!(
                "   {} {} {}",
                comparison.left,
                comparison.ordering.bold(),
                comparison.right
            );
        }
        println!(
            "{}. {} -> {}; tokens: {}",
            i + 1,
            entry.input,
            entry.canonical.cyan(),
            entry.tokens
        );
    }
}
