//! Configuration file management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pgraphdb_client::DEFAULT_GRAPHDB_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`. Every field is optional; command line
/// flags and environment variables take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GraphDB server URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// GraphDB `bin` directory used by `start`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphdb_path: Option<PathBuf>,
    /// Print the column header for `query` by default
    #[serde(default)]
    pub header: bool,
}

impl Config {
    /// Effective server URL: explicit value (flag or environment), then the
    /// config file, then the local default.
    pub fn resolve_url(&self, explicit: Option<String>) -> String {
        explicit
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| DEFAULT_GRAPHDB_URL.to_string())
    }

    pub fn resolve_graphdb_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.graphdb_path.clone())
    }
}

const CONFIG_FILE_NAME: &str = "config.toml";

/// `config.toml` under the platform's per-user config directory for pgraphdb,
/// e.g. `~/.config/pgraphdb/config.toml` on Linux.
pub fn config_file_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "pgraphdb", "pgraphdb")
        .context("no home directory to hold the pgraphdb config")?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads `path`, or [`config_file_path`] when no path was given. An absent
/// file is not an error and gives [`Config::default`].
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => config_file_path()?,
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("cannot read {}", config_path.display()))?;

    parse_config(&contents).with_context(|| format!("invalid config in {}", config_path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}
