use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use panda_cli::config::{ConfigLayer, LoaderConfig};
use panda_cli::logging::redact_value;
use panda_cli::workspace::Workspace;
use panda_export::{
    ExportOptions, MemorySink, PandaSink, Registration, Sink, citation_descriptor, ensure_dataset,
    export_with_progress, schema_id, voter_descriptor,
};
use panda_ingest::{
    ColumnSelection, CountyFile, discover_county_files, file_prefix, read_load_file,
    read_named_csv, read_positional, write_load_file,
};
use panda_model::{CanonicalRecord, DatasetDescriptor, ExportSummary, Schema};
use panda_normalize::{
    CitationNormalizer, Normalizer, ParentheticalStyle, VoterNormalizer, prepare_records,
    voter_extract_columns, voter_schema,
};
use panda_tables::{VoterTables, county, county_name, voter};
use tracing::{debug, error, info, info_span, warn};

use crate::cli::{CitationArgs, Cli, CodeTableArg, CodesArgs, ExportArgs, PrepArgs};
use crate::summary::{print_code_table, print_counties};

/// A file that failed, with the error chain rendered for display.
pub struct FileFailure {
    pub file: PathBuf,
    pub error: String,
}

impl FileFailure {
    fn new(file: &Path, error: &anyhow::Error) -> Self {
        Self {
            file: file.to_path_buf(),
            error: format!("{error:#}"),
        }
    }
}

pub struct PrepOutcome {
    pub code: String,
    pub county: String,
    pub records: usize,
    pub elapsed: Duration,
}

pub struct PrepReport {
    pub load_dir: PathBuf,
    pub prepared: Vec<PrepOutcome>,
    pub failures: Vec<FileFailure>,
}

pub struct ExportOutcome {
    /// Human-readable dataset name.
    pub dataset: String,
    pub registration: Registration,
    pub summary: ExportSummary,
}

pub struct ExportReport {
    pub dry_run: bool,
    pub exported: Vec<ExportOutcome>,
    pub failures: Vec<FileFailure>,
}

/// Defaults, then `--config`, then the environment, then flags.
pub fn load_config(cli: &Cli) -> Result<LoaderConfig> {
    let mut layers = Vec::with_capacity(3);
    if let Some(path) = &cli.config {
        layers.push(ConfigLayer::from_file(path)?);
    }
    layers.push(ConfigLayer::from_env());
    layers.push(cli.config_layer());
    let config = LoaderConfig::resolve(layers)?;
    debug!(
        base_dir = %config.base_dir.display(),
        region = %config.region,
        batch_size = config.batch_size,
        "resolved configuration"
    );
    Ok(config)
}

pub fn run_prep(config: &LoaderConfig, args: &PrepArgs) -> Result<PrepReport> {
    let workspace = config.workspace()?;
    workspace
        .create_dirs()
        .with_context(|| {
            format!(
                "create working directories in {}",
                workspace.year_dir().display()
            )
        })?;

    let files = if args.files.is_empty() {
        workspace.clear_load_dir().context("clear load directory")?;
        discover_county_files(&workspace.raw_dir(), |code| config.region.contains(code))?
    } else {
        args.files
            .iter()
            .map(|path| named_county_file(path, &workspace.raw_dir()))
            .collect::<Result<Vec<_>>>()?
    };

    let normalizer = VoterNormalizer::new(VoterTables::new(&config.fallback_policy()))?;
    let selection = voter_extract_columns();
    info!(files = files.len(), region = %config.region, "prepping county voter files");

    let mut report = PrepReport {
        load_dir: workspace.load_dir(),
        prepared: Vec::new(),
        failures: Vec::new(),
    };
    for file in &files {
        match prep_county(&workspace, &normalizer, &selection, file) {
            Ok(outcome) => report.prepared.push(outcome),
            Err(err) => {
                error!(path = %file.path.display(), error = %format!("{err:#}"), "prep failed");
                report.failures.push(FileFailure::new(&file.path, &err));
            }
        }
    }
    Ok(report)
}

/// An extract named on the command line, looked up in the raw directory
/// when the path does not exist as given.
fn named_county_file(path: &Path, raw_dir: &Path) -> Result<CountyFile> {
    let path = if path.exists() {
        path.to_path_buf()
    } else {
        raw_dir.join(path)
    };
    let code = file_prefix(&path).unwrap_or_default();
    if county_name(&code).is_none() {
        bail!(
            "'{}' does not start with a Florida county code",
            path.display()
        );
    }
    Ok(CountyFile { path, code })
}

fn prep_county(
    workspace: &Workspace,
    normalizer: &VoterNormalizer,
    selection: &ColumnSelection,
    file: &CountyFile,
) -> Result<PrepOutcome> {
    let start = Instant::now();
    let county = county_name(&file.code)
        .unwrap_or(file.code.as_str())
        .to_string();
    let _span = info_span!("county", code = %file.code).entered();

    let raws = read_positional(&file.path, selection)?;
    let records = prepare_records(normalizer, &raws)
        .with_context(|| format!("normalize {}", file.path.display()))?;
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        debug!(
            first = redact_value(first.sort_key()),
            last = redact_value(last.sort_key()),
            "sorted records"
        );
    }
    let load_file = workspace.load_file(&file.code);
    write_load_file(&load_file, normalizer.schema(), &records)?;

    let elapsed = start.elapsed();
    info!(
        county = %county,
        records = records.len(),
        load_file = %load_file.display(),
        elapsed = ?elapsed,
        "ready for loading"
    );
    Ok(PrepOutcome {
        code: file.code.clone(),
        county,
        records: records.len(),
        elapsed,
    })
}

pub fn run_export(config: &LoaderConfig, args: &ExportArgs) -> Result<ExportReport> {
    let workspace = config.workspace()?;
    let date = config.data_date()?;
    let schema = voter_schema()?;
    let mut sink = open_sink(config, args.dry_run)?;
    let files = discover_county_files(&workspace.load_dir(), |code| config.region.contains(code))?;
    info!(files = files.len(), dry_run = args.dry_run, "exporting load files");

    let mut report = ExportReport {
        dry_run: args.dry_run,
        exported: Vec::new(),
        failures: Vec::new(),
    };
    for file in &files {
        let Some(county) = county_name(&file.code) else {
            continue;
        };
        let descriptor = voter_descriptor(
            county,
            date.year(),
            &date.format("%Y-%m-%d").to_string(),
            schema.columns(),
        );
        let result = read_load_file(&file.path, &schema)
            .map_err(anyhow::Error::from)
            .and_then(|records| {
                export_dataset(sink.as_mut(), &descriptor, &schema, &records, config.batch_size)
            });
        match result {
            Ok(outcome) => report.exported.push(outcome),
            Err(err) => {
                error!(path = %file.path.display(), error = %format!("{err:#}"), "export failed");
                report.failures.push(FileFailure::new(&file.path, &err));
            }
        }
    }
    Ok(report)
}

pub fn run_citations(config: &LoaderConfig, args: &CitationArgs) -> Result<ExportReport> {
    let style = if args.omit_empty_state {
        ParentheticalStyle::OmitEmpty
    } else {
        ParentheticalStyle::KeepEmpty
    };
    let normalizer = CitationNormalizer::new(style)?;
    let raws = read_named_csv(&args.file, b',')?;
    let records = prepare_records(&normalizer, &raws)
        .with_context(|| format!("normalize {}", args.file.display()))?;
    info!(path = %args.file.display(), records = records.len(), "normalized citations");

    let descriptor = citation_descriptor(normalizer.schema().columns());
    let mut sink = open_sink(config, args.dry_run)?;
    let mut report = ExportReport {
        dry_run: args.dry_run,
        exported: Vec::new(),
        failures: Vec::new(),
    };
    match export_dataset(
        sink.as_mut(),
        &descriptor,
        normalizer.schema(),
        &records,
        config.batch_size,
    ) {
        Ok(outcome) => report.exported.push(outcome),
        Err(err) => report.failures.push(FileFailure::new(&args.file, &err)),
    }
    Ok(report)
}

pub fn run_purge(config: &LoaderConfig) -> Result<usize> {
    let workspace = config.workspace()?;
    let removed = workspace
        .purge()
        .with_context(|| format!("purge {}", workspace.year_dir().display()))?;
    info!(removed, dir = %workspace.year_dir().display(), "purged working directories");
    Ok(removed)
}

pub fn run_counties(config: &LoaderConfig) {
    let counties: Vec<(&str, &str)> = county::FL_COUNTIES
        .iter()
        .copied()
        .filter(|(code, _)| config.region.contains(code))
        .collect();
    print_counties(config.region, &counties);
}

pub fn run_codes(config: &LoaderConfig, args: &CodesArgs) {
    let policy = config.fallback_policy();
    let table = match args.table {
        CodeTableArg::Race => voter::race_table(policy.race),
        CodeTableArg::Party => voter::party_table(policy.party),
        CodeTableArg::Suffix => voter::suffix_table(policy.suffix),
        CodeTableArg::History => voter::history_table(),
        CodeTableArg::County => county::county_table(),
    };
    print_code_table(&table);
}

fn open_sink(config: &LoaderConfig, dry_run: bool) -> Result<Box<dyn Sink>> {
    if dry_run {
        info!("dry run: exporting to an in-memory store");
        return Ok(Box::new(MemorySink::new()));
    }
    let (base, credentials) = config.panda()?;
    let sink = PandaSink::new(&base, credentials).context("create PANDA client")?;
    debug!(api = %sink.api_url(), "using PANDA");
    Ok(Box::new(sink))
}

/// Register a dataset, then upsert its records with a progress bar.
fn export_dataset(
    sink: &mut dyn Sink,
    descriptor: &DatasetDescriptor,
    schema: &Schema,
    records: &[CanonicalRecord],
    batch_size: usize,
) -> Result<ExportOutcome> {
    let registration = ensure_dataset(sink, descriptor)?;
    if let Registration::Existing { row_count } = registration
        && row_count > 0
    {
        warn!(dataset = %descriptor.slug, row_count, "dataset already has rows; upserting by id");
    }

    let mut summary = ExportSummary::new(&descriptor.slug);
    let bar = progress_bar(records.len(), &descriptor.name);
    let result = export_with_progress(
        sink,
        &descriptor.slug,
        records,
        schema_id(schema),
        &ExportOptions { batch_size },
        &mut summary,
        |progress| bar.set_position(progress.processed as u64),
    );
    bar.finish_and_clear();
    result?;

    info!(
        dataset = %descriptor.name,
        records = summary.processed,
        elapsed = ?summary.elapsed,
        "pushed rows"
    );
    Ok(ExportOutcome {
        dataset: descriptor.name.clone(),
        registration,
        summary,
    })
}

/// Per-batch info events already report progress, so the bar only shows
/// when they are filtered out.
fn progress_bar(len: usize, label: &str) -> ProgressBar {
    if tracing::enabled!(tracing::Level::INFO) {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{prefix:.bold} [{bar:30}] {pos}/{len} {elapsed_precise}")
    {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar.set_prefix(label.to_string());
    bar
}
