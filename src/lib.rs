//! Voxman: speech-corpus manifest curation and export.
//!
//! Voxman loads a tabular speech-corpus manifest (one row per audio sample,
//! with language/dialect/demographic metadata), narrows it with cascading
//! multi-dimensional filters, deterministically selects single samples from
//! the narrowed set, and exports record sets to independent output formats
//! with per-format isolated failure handling.
//!
//! # Modules
//!
//! - [`manifest`]: Record model and per-format I/O (CSV, JSONL, dataset dir)
//! - [`store`]: Load-once, read-only manifest holder
//! - [`filter`]: Conjunctive filtering with cascading candidate domains
//! - [`select`]: Deterministic positional sample selection
//! - [`export`]: Multi-format export pipeline with per-format outcomes
//! - [`error`]: Error types for voxman operations

pub mod error;
pub mod export;
pub mod filter;
pub mod manifest;
pub mod select;
pub mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::VoxmanError;

use export::ExportFormat;
use filter::{FilterCriteria, FilterOutcome};
use store::RecordStore;

/// The voxman CLI application.
#[derive(Parser)]
#[command(name = "voxman")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Summarize a manifest: filter domains and duration bounds.
    Inspect(InspectArgs),
    /// Filter the manifest and show one selected sample.
    Pick(PickArgs),
    /// Export the manifest in one or more formats.
    Export(ExportArgs),
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Manifest CSV file to inspect.
    manifest: PathBuf,
}

/// Arguments for the pick subcommand.
#[derive(clap::Args)]
struct PickArgs {
    /// Manifest CSV file to filter.
    manifest: PathBuf,

    /// Language code to select (mandatory; there is no "all languages").
    #[arg(long)]
    language: String,

    /// Dialect to select, drawn from the chosen language's domain.
    #[arg(long)]
    dialect: String,

    /// Comma-separated age groups to allow. Defaults to every reported age
    /// group, which still excludes records with no reported age.
    #[arg(long, value_delimiter = ',')]
    ages: Option<Vec<String>>,

    /// Lower duration bound in whole seconds (inclusive).
    #[arg(long)]
    min_secs: Option<u64>,

    /// Upper duration bound in whole seconds (inclusive).
    #[arg(long)]
    max_secs: Option<u64>,

    /// Zero-based sample index into the filtered set.
    #[arg(long, default_value_t = 0)]
    index: usize,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Manifest CSV file to export.
    manifest: PathBuf,

    /// Destination path prefix, without extension.
    #[arg(long)]
    stem: PathBuf,

    /// Comma-separated formats to produce ('csv', 'jsonl', 'hf').
    #[arg(long, value_delimiter = ',', default_value = "csv,jsonl,hf")]
    formats: Vec<String>,

    /// Treat any per-format failure as an error (exit non-zero).
    #[arg(long)]
    strict: bool,
}

/// Run the voxman CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), VoxmanError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inspect(args)) => run_inspect(args),
        Some(Commands::Pick(args)) => run_pick(args),
        Some(Commands::Export(args)) => run_export(args),
        None => {
            // No subcommand: print a help hint and exit successfully
            println!("voxman {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Speech-corpus manifest curation and export.");
            println!();
            println!("Run 'voxman --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), VoxmanError> {
    let store = RecordStore::load(&args.manifest)?;
    let records = store.records();

    println!("Manifest: {}", store.path().display());
    println!("  {} record(s)", store.len());

    let languages = filter::distinct_values(records, filter::Dimension::Language);
    println!();
    println!("Languages ({}):", languages.len());
    for language in &languages {
        let dialects = filter::dialect_domain(records, language);
        println!("  {}: {}", language, dialects.join(", "));
    }

    let ages = filter::distinct_values(records, filter::Dimension::Age);
    println!();
    if ages.is_empty() {
        println!("Age groups: none reported");
    } else {
        println!("Age groups ({}): {}", ages.len(), ages.join(", "));
    }

    match filter::duration_bounds(records) {
        Some((min, max)) => println!("Duration: {}-{} s", min, max),
        None => println!("Duration: n/a"),
    }

    Ok(())
}

/// Execute the pick subcommand.
fn run_pick(args: PickArgs) -> Result<(), VoxmanError> {
    let store = RecordStore::load(&args.manifest)?;
    let records = store.records();

    // Without an explicit list the full non-null age domain is selected, so
    // records with no reported age never match by default.
    let ages = args
        .ages
        .unwrap_or_else(|| filter::distinct_values(records, filter::Dimension::Age));
    let mut criteria = FilterCriteria::new(&args.language, &args.dialect).with_ages(ages);
    if args.min_secs.is_some() || args.max_secs.is_some() {
        // A single bound narrows one end of the manifest's own full range.
        let (full_min, full_max) = filter::duration_bounds(records).unwrap_or((0, u64::MAX / 1000));
        criteria = criteria.with_duration_secs(
            args.min_secs.unwrap_or(full_min),
            args.max_secs.unwrap_or(full_max),
        );
    }

    let matched = match filter::apply_filters(records, &criteria) {
        FilterOutcome::Matched(matched) => matched,
        FilterOutcome::Empty => {
            println!("No samples match the selected filters.");
            return Ok(());
        }
    };

    let sample = select::select(&matched, args.index)?;

    println!(
        "{} matching sample(s); showing #{}",
        matched.len(),
        args.index
    );
    println!();
    println!("Language:      {}", sample.lang_code);
    println!("Dialect:       {}", sample.accents);
    println!("Speaker ID:    {}", sample.client_id);
    println!("Age:           {}", sample.age.as_deref().unwrap_or("n/a"));
    println!("Gender:        {}", sample.gender.as_deref().unwrap_or("n/a"));
    println!("Duration (ms): {}", sample.duration_ms);
    println!("Text:          {}", sample.sentence);
    println!("Audio:         {}", sample.converted_path);

    Ok(())
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), VoxmanError> {
    let formats = args
        .formats
        .iter()
        .map(|token| ExportFormat::parse(token))
        .collect::<Result<Vec<_>, _>>()?;

    let store = RecordStore::load(&args.manifest)?;

    println!(
        "Exporting {} record(s) with stem {}",
        store.len(),
        args.stem.display()
    );

    let report = export::export_record_set(store.records(), &args.stem, &formats)?;
    print!("{}", report);

    if args.strict && !report.is_complete() {
        return Err(VoxmanError::ExportIncomplete {
            failed: report.failure_count(),
            requested: report.outcomes.len(),
        });
    }

    Ok(())
}
