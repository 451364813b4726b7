use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::EnvFilter;

mod compare;

use compare::OutputFormat;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Versions to parse, each compared with the one before it
    #[arg(required = true, value_name = "VERSION")]
    versions: Vec<String>,

    /// Output format for the parsed versions and comparisons
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    compare::compare(&cli.versions, cli.format)?;

    Ok(())
}

/// Log to stderr at the level picked with `-v`/`-q`, unless `RUST_LOG` says otherwise.
fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
