//! CLI argument definitions for the PANDA loaders.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use panda_cli::config::{ConfigLayer, PartyFallback};
use panda_tables::Region;

#[derive(Parser)]
#[command(
    name = "panda-loaders",
    version,
    about = "Prepare and load public-records datasets into PANDA",
    long_about = "Prepare county voter extracts and citation spreadsheets as sorted load files\n\
                  and push them to a PANDA instance in batched, idempotent upserts.\n\n\
                  Settings come from --config, then VOTER_DATA_DATE, PANDA_BASE, PANDA_USER,\n\
                  PANDA_API_KEY and PANDA_LOADERS_BASE_DIR, then flags."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and other row values in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML settings file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Voter data date (overrides VOTER_DATA_DATE).
    #[arg(long = "date", value_name = "DATE", global = true)]
    pub date: Option<String>,

    /// Working directory root (overrides PANDA_LOADERS_BASE_DIR).
    #[arg(long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,
}

impl Cli {
    /// Settings given on the command line, as the last config layer.
    pub fn config_layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer {
            voter_data_date: self.date.clone(),
            base_dir: self.base_dir.clone(),
            ..ConfigLayer::default()
        };
        match &self.command {
            Command::Prep(args) => {
                layer.region = args.region.map(Into::into);
                layer.party_fallback = args.party_fallback.map(Into::into);
            }
            Command::Export(args) => {
                layer.region = args.region.map(Into::into);
                layer.batch_size = args.batch_size;
            }
            Command::Citations(args) => layer.batch_size = args.batch_size,
            Command::Counties(args) => layer.region = args.region.map(Into::into),
            Command::Purge | Command::Codes(_) => {}
        }
        layer
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and sort raw county extracts into load files.
    Prep(PrepArgs),

    /// Register datasets and upsert load files into PANDA.
    Export(ExportArgs),

    /// Delete raw extracts and load files for the data year.
    Purge,

    /// Normalize a citations spreadsheet and upsert it into PANDA.
    Citations(CitationArgs),

    /// List Florida county codes.
    Counties(CountiesArgs),

    /// Show a compiled-in code table.
    Codes(CodesArgs),
}

#[derive(Args)]
pub struct PrepArgs {
    /// Extracts to prepare (default: every county file in the raw directory).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Only prepare counties in this region.
    #[arg(long = "region", value_enum)]
    pub region: Option<RegionArg>,

    /// What an unknown party code becomes.
    #[arg(long = "party-fallback", value_enum)]
    pub party_fallback: Option<PartyFallbackArg>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Export to an in-memory store instead of PANDA.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Records per upsert call (at most 1000).
    #[arg(long = "batch-size", value_name = "N")]
    pub batch_size: Option<usize>,

    /// Only export counties in this region.
    #[arg(long = "region", value_enum)]
    pub region: Option<RegionArg>,
}

#[derive(Args)]
pub struct CitationArgs {
    /// Citations CSV with a header row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Export to an in-memory store instead of PANDA.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[arg(long = "batch-size", value_name = "N")]
    pub batch_size: Option<usize>,

    /// Render a license without a state as "A123" instead of "A123 ()".
    #[arg(long = "omit-empty-state")]
    pub omit_empty_state: bool,
}

#[derive(Args)]
pub struct CountiesArgs {
    #[arg(long = "region", value_enum)]
    pub region: Option<RegionArg>,
}

#[derive(Args)]
pub struct CodesArgs {
    #[arg(value_enum)]
    pub table: CodeTableArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RegionArg {
    Statewide,
    MidFlorida,
    SouthFlorida,
}

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Statewide => Self::Statewide,
            RegionArg::MidFlorida => Self::MidFlorida,
            RegionArg::SouthFlorida => Self::SouthFlorida,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PartyFallbackArg {
    /// Unknown codes become "OTHER".
    Other,
    /// Unknown codes become an empty string.
    Blank,
    /// Unknown codes are kept as-is.
    Keep,
}

impl From<PartyFallbackArg> for PartyFallback {
    fn from(arg: PartyFallbackArg) -> Self {
        match arg {
            PartyFallbackArg::Other => Self::Other,
            PartyFallbackArg::Blank => Self::Blank,
            PartyFallbackArg::Keep => Self::Keep,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CodeTableArg {
    Race,
    Party,
    Suffix,
    History,
    County,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
