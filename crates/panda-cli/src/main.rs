//! PANDA loaders CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use panda_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    load_config, run_citations, run_codes, run_counties, run_export, run_prep, run_purge,
};
use crate::summary::{print_export_report, print_prep_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run the selected command. Returns 1 when any file failed.
fn run(cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let failed = match &cli.command {
        Command::Prep(args) => {
            let report = run_prep(&config, args)?;
            print_prep_report(&report);
            !report.failures.is_empty()
        }
        Command::Export(args) => {
            let report = run_export(&config, args)?;
            print_export_report(&report);
            !report.failures.is_empty()
        }
        Command::Citations(args) => {
            let report = run_citations(&config, args)?;
            print_export_report(&report);
            !report.failures.is_empty()
        }
        Command::Purge => {
            let removed = run_purge(&config)?;
            println!("Removed {removed} files");
            false
        }
        Command::Counties(_) => {
            run_counties(&config);
            false
        }
        Command::Codes(args) => {
            run_codes(&config, args);
            false
        }
    };
    Ok(i32::from(failed))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        log_data: cli.log_data,
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
