//! Loader configuration.
//!
//! Settings are resolved from layers applied in order, later layers
//! winning: built-in defaults, an optional TOML file, environment
//! variables, then command-line flags.
//!
//! ```toml
//! voter_data_date = "2025-06-30"
//! base_dir = "/data/panda"
//! panda_base = "https://panda.example.org"
//! region = "mid-florida"
//! party_fallback = "other"
//! batch_size = 1000
//! ```

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use panda_export::{DEFAULT_BATCH_SIZE, PandaCredentials};
use panda_model::Fallback;
use panda_tables::{FallbackPolicy, Region};
use serde::Deserialize;
use thiserror::Error;

use crate::workspace::Workspace;

pub const ENV_VOTER_DATA_DATE: &str = "VOTER_DATA_DATE";
pub const ENV_PANDA_BASE: &str = "PANDA_BASE";
pub const ENV_PANDA_USER: &str = "PANDA_USER";
pub const ENV_PANDA_API_KEY: &str = "PANDA_API_KEY";
pub const ENV_BASE_DIR: &str = "PANDA_LOADERS_BASE_DIR";

const DEFAULT_BASE_DIR: &str = "/tmp";

/// Accepted spellings of the voter data date.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unrecognized voter data date '{0}' (expected YYYY-MM-DD, MM/DD/YYYY or 'Month D, YYYY')")]
    InvalidDate(String),

    /// A setting needed by the requested command is unset.
    #[error("{name} is not set; use {hint}")]
    Missing {
        name: &'static str,
        hint: &'static str,
    },
}

/// What an unknown party code becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartyFallback {
    /// The literal `OTHER`.
    #[default]
    Other,
    /// An empty string, as in pre-2023 load files.
    Blank,
    /// The raw code itself.
    Keep,
}

impl PartyFallback {
    pub fn policy(self) -> FallbackPolicy {
        let fallback = match self {
            Self::Other => return FallbackPolicy::florida(),
            Self::Blank => Fallback::Empty,
            Self::Keep => Fallback::PassThrough,
        };
        FallbackPolicy::florida().with_party(fallback)
    }
}

/// One source of settings. Unset fields leave earlier layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub voter_data_date: Option<String>,
    pub base_dir: Option<PathBuf>,
    pub panda_base: Option<String>,
    pub panda_user: Option<String>,
    pub panda_api_key: Option<String>,
    pub region: Option<Region>,
    pub party_fallback: Option<PartyFallback>,
    pub batch_size: Option<usize>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the loader environment variables. Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            voter_data_date: get(ENV_VOTER_DATA_DATE),
            base_dir: get(ENV_BASE_DIR).map(PathBuf::from),
            panda_base: get(ENV_PANDA_BASE),
            panda_user: get(ENV_PANDA_USER),
            panda_api_key: get(ENV_PANDA_API_KEY),
            ..Self::default()
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub voter_data_date: Option<NaiveDate>,
    pub base_dir: PathBuf,
    pub panda_base: Option<String>,
    pub panda_user: Option<String>,
    pub panda_api_key: Option<String>,
    pub region: Region,
    pub party_fallback: PartyFallback,
    pub batch_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            voter_data_date: None,
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            panda_base: None,
            panda_user: None,
            panda_api_key: None,
            region: Region::default(),
            party_fallback: PartyFallback::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Apply `layers` over the defaults, in order.
    pub fn resolve<I>(layers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ConfigLayer>,
    {
        let mut config = Self::default();
        for layer in layers {
            if let Some(value) = layer.voter_data_date {
                config.voter_data_date = Some(parse_data_date(&value)?);
            }
            if let Some(value) = layer.base_dir {
                config.base_dir = value;
            }
            if let Some(value) = layer.panda_base {
                config.panda_base = Some(value);
            }
            if let Some(value) = layer.panda_user {
                config.panda_user = Some(value);
            }
            if let Some(value) = layer.panda_api_key {
                config.panda_api_key = Some(value);
            }
            if let Some(value) = layer.region {
                config.region = value;
            }
            if let Some(value) = layer.party_fallback {
                config.party_fallback = value;
            }
            if let Some(value) = layer.batch_size {
                config.batch_size = value;
            }
        }
        Ok(config)
    }

    pub fn data_date(&self) -> Result<NaiveDate, ConfigError> {
        self.voter_data_date.ok_or(ConfigError::Missing {
            name: ENV_VOTER_DATA_DATE,
            hint: "the environment variable, `voter_data_date` in the config file or --date",
        })
    }

    /// Working directories for the year of the voter data date.
    pub fn workspace(&self) -> Result<Workspace, ConfigError> {
        Ok(Workspace::new(&self.base_dir, self.data_date()?.year()))
    }

    /// API base URL and account, all three required.
    pub fn panda(&self) -> Result<(String, PandaCredentials), ConfigError> {
        let require = |value: &Option<String>, name: &'static str| {
            value.clone().ok_or(ConfigError::Missing {
                name,
                hint: "the environment variable or the config file",
            })
        };
        let base = require(&self.panda_base, ENV_PANDA_BASE)?;
        let credentials = PandaCredentials {
            email: require(&self.panda_user, ENV_PANDA_USER)?,
            api_key: require(&self.panda_api_key, ENV_PANDA_API_KEY)?,
        };
        Ok((base, credentials))
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.party_fallback.policy()
    }
}

/// Parse a voter data date in any of the accepted spellings.
pub fn parse_data_date(value: &str) -> Result<NaiveDate, ConfigError> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| ConfigError::InvalidDate(value.to_string()))
}
