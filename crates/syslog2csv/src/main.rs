//! syslog2csv: detect the grammar of a syslog capture and convert it
//! to a delimited table.
//!
//! Thin orchestration over the `normalizer` core: read lines, decode
//! the batch, hand the result to a sink, print a summary.

mod sink;
mod source;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use normalizer::FormatRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "syslog2csv",
    version,
    about = "Detect the grammar of a syslog capture and convert it to CSV"
)]
struct Args {
    /// Input log file
    input: PathBuf,

    /// Output file (defaults to the input path with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format; `table` prints to stdout instead of writing a file
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Field delimiter for CSV output
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Table,
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syslog2csv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let lines = source::read_lines(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(lines = lines.len(), input = %args.input.display(), "loaded input");

    let registry = FormatRegistry::new();
    let result = normalizer::decode(&lines, &registry)
        .with_context(|| format!("decoding {}", args.input.display()))?;

    match args.format {
        OutputFormat::Csv => {
            let path = output_path(&args, "csv");
            sink::write_csv(&path, &result, args.delimiter)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "wrote CSV");
        }
        OutputFormat::Json => {
            let path = output_path(&args, "json");
            sink::write_json(&path, &result)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "wrote JSON");
        }
        OutputFormat::Table => sink::print_table(&result),
    }

    summary::report(&result);
    Ok(())
}

fn output_path(args: &Args, extension: &str) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(extension))
}
