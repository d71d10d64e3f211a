//! Permission Review
//!
//! Provisional review state for Android runtime permissions and the CTA eligibility policy that
//! decides which permissions and groups get a switch of their own.

#![forbid(unsafe_code)]
#![deny(
    anonymous_parameters,
    overflowing_literals,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unused_allocation,
    unused_extern_crates,
    unused_import_braces,
    unused_results,
    while_true,
    non_shorthand_field_patterns,
    unused_qualifications,
    unused,
    unused_attributes
)]
#![warn(missing_docs, variant_size_differences)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

/// Command Line Interface
pub mod cli;
mod config;
mod error;
pub mod model;
pub mod policy;
pub mod report;
pub mod review;
mod review_state;
mod session;
mod utils;

use std::{env, io::Write, path::PathBuf};

use clap::ArgMatches;
use colored::Colorize;
use env_logger::Builder;
use failure::ResultExt;
use log::{Level, LevelFilter};

pub use crate::{
    config::{Config, Toggle},
    error::Kind as ErrorKind,
    report::ReviewReport,
    review::ReviewStore,
    review_state::ReviewState,
    session::{run_review, ReviewSession},
    utils::{print_error, print_warning},
};

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, failure::Error>;

/// Initialize the config with the config files and command line options.
///
/// An explicit `--config` file wins. Otherwise, on UNIX, if the local file (`config.toml`) does
/// not exist but the global one does (`/etc/permission-review/config.toml`), the latter is used,
/// and the local file in any other case. If none of the files could be loaded, the default config
/// is used.
pub fn initialize_config(cli: &ArgMatches<'_>) -> Result<Config> {
    let config_path = PathBuf::from("config.toml");
    let global_config_path = PathBuf::from("/etc/permission-review/config.toml");

    let mut config = if let Some(path) = cli.value_of("config") {
        Config::from_file(path)?
    } else if cfg!(target_family = "unix") && !config_path.exists() && global_config_path.exists()
    {
        Config::from_file(&global_config_path)
            .context("there was an error when reading the /etc/permission-review/config.toml file")?
    } else if config_path.exists() {
        Config::from_file(&config_path)
            .context("there was an error when reading the config.toml file")?
    } else {
        if !cli.is_present("quiet") {
            print_warning("Config file not found. Using default configuration");
        }
        Config::default()
    };

    config
        .decorate_with_cli(cli)
        .context("there was an error reading config from CLI")?;

    Ok(config)
}

/// Initializes the logger.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `Debug` level in verbose mode, at
/// `Warn` level in quiet mode and at `Info` level in any other case.
pub fn initialize_logger(is_verbose: bool, is_quiet: bool) {
    let log_level = if is_verbose {
        LevelFilter::Debug
    } else if is_quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    let _ = builder.format(|buf, record| match record.level() {
        Level::Warn => writeln!(
            buf,
            "{}{}",
            "Warning: ".bold().yellow(),
            record.args().to_string().yellow()
        ),
        Level::Error => writeln!(
            buf,
            "{}{}",
            "Error: ".bold().red(),
            record.args().to_string().red()
        ),
        Level::Debug => writeln!(
            buf,
            "{}{}",
            "Debug: ".bold(),
            record.args().to_string().bold()
        ),
        Level::Info => writeln!(buf, "{}", record.args()),
        Level::Trace => writeln!(buf, "{}: {}", record.level(), record.args()),
    });

    if let Ok(env_log) = env::var("RUST_LOG") {
        let _ = builder.parse(&env_log);
    } else {
        let _ = builder.filter(Some("permission_review_core"), log_level);
    }

    if let Err(e) = builder.try_init() {
        print_error(format!("Could not initialize logger: {}", e));
    }
}
