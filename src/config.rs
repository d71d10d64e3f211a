//! Configuration module.
//!
//! Handles and configures the initial settings and variables needed to run a review session. The
//! file configuration is loaded first and then decorated with the command line arguments.

use std::{
    fs,
    path::{Path, PathBuf},
    slice::Iter,
};

use clap::ArgMatches;
use failure::ResultExt;

use crate::{error, Result};

/// Default header of the revoked permissions summary.
pub const DEFAULT_SUMMARY_HEADER: &str = "The following permissions will be revoked:";

/// A switch flipped by the user during the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// Turn on the switch of one permission.
    Allow(String),
    /// Turn off the switch of one permission.
    Deny(String),
    /// Turn on the switch of a permission group.
    GrantGroup(String),
    /// Turn off the switch of a permission group.
    RevokeGroup(String),
}

/// Review configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Boolean to represent `--verbose` mode.
    verbose: bool,
    /// Boolean to represent `--quiet` mode.
    quiet: bool,
    /// Boolean to represent `--json` output.
    json: bool,
    /// Permissions that start the review revoked.
    revoked: Vec<String>,
    /// First line of the revoked permissions summary.
    summary_header: String,
    /// App permission model to review.
    #[serde(skip)]
    app_file: PathBuf,
    /// Switches to replay, in command line order.
    #[serde(skip)]
    toggles: Vec<Toggle>,
    /// Configuration files that have been loaded.
    #[serde(skip)]
    loaded_files: Vec<PathBuf>,
}

impl Config {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .context(format!("could not read the config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&toml).map_err(|e| error::Kind::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        config.loaded_files.push(path.to_owned());
        config.check()?;
        Ok(config)
    }

    /// Modifies the options from the CLI.
    pub fn decorate_with_cli(&mut self, cli: &ArgMatches<'_>) -> Result<()> {
        if cli.is_present("verbose") {
            self.verbose = true;
            self.quiet = false;
        }
        if cli.is_present("quiet") {
            self.quiet = true;
            self.verbose = false;
        }
        if cli.is_present("json") {
            self.json = true;
        }
        if let Some(app) = cli.value_of("app") {
            self.app_file = PathBuf::from(app);
        }
        if let Some(revoked) = cli.values_of("revoked") {
            self.revoked.extend(revoked.map(String::from));
        }

        let toggle_args: [(&str, fn(String) -> Toggle); 4] = [
            ("allow", Toggle::Allow),
            ("deny", Toggle::Deny),
            ("grant-group", Toggle::GrantGroup),
            ("revoke-group", Toggle::RevokeGroup),
        ];
        let mut toggles = Vec::new();
        for &(arg, toggle) in &toggle_args {
            if let (Some(indices), Some(values)) = (cli.indices_of(arg), cli.values_of(arg)) {
                toggles.extend(indices.zip(values).map(|(i, v)| (i, toggle(v.to_owned()))));
            }
        }
        toggles.sort_by_key(|&(i, _)| i);
        self.toggles = toggles.into_iter().map(|(_, t)| t).collect();

        if self.app_file.as_os_str().is_empty() {
            return Err(error::Kind::Config {
                message: String::from("no app file was given"),
            }
            .into());
        }
        self.check()
    }

    fn check(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(error::Kind::Config {
                message: String::from("verbose and quiet modes can't be used together"),
            }
            .into());
        }
        Ok(())
    }

    /// Returns true if the review runs in verbose mode.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Returns true if the review runs in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Returns true if the report should be printed as JSON.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Gets the permissions that start the review revoked.
    pub fn revoked(&self) -> &[String] {
        &self.revoked
    }

    /// Gets the header of the revoked permissions summary.
    pub fn summary_header(&self) -> &str {
        &self.summary_header
    }

    /// Gets the path of the app permission model.
    pub fn app_file(&self) -> &Path {
        &self.app_file
    }

    /// Gets the switches to replay.
    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    /// Returns an iterator over the loaded configuration files.
    pub fn loaded_config_files(&self) -> Iter<'_, PathBuf> {
        self.loaded_files.iter()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            json: false,
            revoked: Vec::new(),
            summary_header: String::from(DEFAULT_SUMMARY_HEADER),
            app_file: PathBuf::new(),
            toggles: Vec::new(),
            loaded_files: Vec::new(),
        }
    }
}
