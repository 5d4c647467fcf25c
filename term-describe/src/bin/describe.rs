//! term-describe CLI
//!
//! Loads a delimited file, prints the overall and grouped statistics, and
//! saves the same text to an output file.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use term_describe::formatters::{HumanFormatter, JsonFormatter, ReportFormatter};
use term_describe::logging::setup::{init_logging, LoggingConfig};
use term_describe::sources::{CsvOptions, CsvSource, DataSource};
use term_describe::summary::{validate_config, SummaryConfig, TableDescriber};
use tracing::{info, Level};

const DEFAULT_OUTPUT: &str = "outputs/term_describe_summary.txt";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delimited file with a header row
    path: Option<PathBuf>,

    /// File the rendered report is also written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// JSON file with summary settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column for the single-key grouping
    #[arg(long)]
    primary_key: Option<String>,

    /// Column paired with the primary key for the composite grouping
    #[arg(long)]
    secondary_key: Option<String>,

    /// Groups reported for the primary grouping
    #[arg(long)]
    primary_limit: Option<usize>,

    /// Groups reported for the composite grouping
    #[arg(long)]
    secondary_limit: Option<usize>,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Log level for term-describe (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<Level>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(path) = args.path.clone() else {
        eprintln!("{}", Args::command().render_usage());
        process::exit(1);
    };

    let mut logging = if args.json_logs {
        LoggingConfig::structured()
    } else {
        LoggingConfig::default()
    };
    if let Some(level) = args.log_level {
        logging = logging.with_crate_level(level);
    }
    init_logging(logging).map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    let config = summary_config(&args)?;
    validate_config(&config)?;

    let source = CsvSource::with_options(path, csv_options(args.delimiter)?);
    let table = source
        .load()
        .with_context(|| format!("could not load {}", source.description()))?;

    let summary = TableDescriber::new(config).describe(&table)?;
    let rendered = match args.format {
        Format::Human => HumanFormatter::new().format_summary(&summary)?,
        Format::Json => JsonFormatter::new().format_summary(&summary)?,
    };

    println!("{rendered}");
    write_output(&args.output, &rendered)?;
    info!(output = %args.output.display(), "Summary saved");

    Ok(())
}

fn summary_config(args: &Args) -> Result<SummaryConfig> {
    let mut config = match &args.config {
        Some(path) => SummaryConfig::from_json_file(path)
            .with_context(|| format!("could not read config {}", path.display()))?,
        None => SummaryConfig::default(),
    };
    if let Some(ref key) = args.primary_key {
        config = config.with_primary_key(key);
    }
    if let Some(ref key) = args.secondary_key {
        config = config.with_secondary_key(key);
    }
    if let Some(limit) = args.primary_limit {
        config = config.with_primary_limit(limit);
    }
    if let Some(limit) = args.secondary_limit {
        config = config.with_secondary_limit(limit);
    }
    Ok(config)
}

fn csv_options(delimiter: char) -> Result<CsvOptions> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(CsvOptions::default().with_delimiter(delimiter as u8))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))
}
