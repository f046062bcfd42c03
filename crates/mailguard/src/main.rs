//! `MailGuard` - compliance screening for exported email datasets
//!
//! Loads a delimited file of emails and classifies message bodies against
//! a fixed set of compliance-violation categories.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod model;
mod view;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailguard_core::{BatchRunner, CategoryRegistry, Classifier, Dataset};
use model::{OutputFormat, Settings};

/// Screen email datasets for compliance violations.
#[derive(Debug, Parser)]
#[command(name = "mailguard", version, about)]
struct Cli {
    /// Output format (overrides the settings file).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to the settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the columns and first rows of a dataset.
    Preview {
        /// Delimited file with a `body` column.
        file: PathBuf,
        /// Number of rows to show.
        #[arg(long)]
        rows: Option<usize>,
    },
    /// List every email in a dataset.
    List {
        /// Delimited file with a `body` column.
        file: PathBuf,
    },
    /// Show one email.
    Show {
        /// Delimited file with a `body` column.
        file: PathBuf,
        /// Zero-based record index.
        index: usize,
    },
    /// Analyze one email for compliance.
    Analyze {
        /// Delimited file with a `body` column.
        file: PathBuf,
        /// Zero-based record index.
        index: usize,
    },
    /// Analyze every email and list the flagged ones.
    Batch {
        /// Delimited file with a `body` column.
        file: PathBuf,
    },
    /// Classify a literal piece of text.
    Classify {
        /// Email body to classify.
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path)?;
    let format = cli.format.unwrap_or(settings.format);

    let registry = CategoryRegistry::standard();
    let classifier = Classifier::standard(&registry)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &settings, format, &classifier, &mut out)?;
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "mailguard=debug,mailguard_core=debug"
    } else {
        "mailguard=info,mailguard_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(
    command: Command,
    settings: &Settings,
    format: OutputFormat,
    classifier: &Classifier,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Preview { file, rows } => {
            let dataset = load(&file)?;
            let rows = rows.unwrap_or(settings.preview_rows);
            view::write_preview(out, &dataset, rows, format)
        }
        Command::List { file } => view::write_list(out, &load(&file)?, format),
        Command::Show { file, index } => {
            let dataset = load(&file)?;
            view::write_record(out, dataset.get(index)?, format)
        }
        Command::Analyze { file, index } => {
            let dataset = load(&file)?;
            let record = dataset.get(index)?;
            let result = classifier.classify(record.require_body(index)?);
            info!(index, category = %result.category, "Analyzed email");
            view::write_analysis(out, index, record, result, format)
        }
        Command::Batch { file } => {
            let dataset = load(&file)?;
            let summary = BatchRunner::new(classifier)
                .summarize(dataset.records())
                .with_context(|| format!("analyzing {}", file.display()))?;
            view::write_summary(out, &summary, format)
        }
        Command::Classify { text } => view::write_result(out, &classifier.classify(&text), format),
    }
}

fn load(path: &Path) -> anyhow::Result<Dataset> {
    Dataset::open(path).with_context(|| format!("loading {}", path.display()))
}
