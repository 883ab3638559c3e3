use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Cli;

/// Flag value meaning "no secret was named".
pub const SECRET_SENTINEL: &str = "secret";
/// Flag value meaning "fetch the current version".
pub const VERSION_SENTINEL: &str = "version";

/// Immutable invocation parameters, built once from the parsed CLI and passed
/// by reference through the rest of the run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub secret: String,
    /// `None` means the current-version stage.
    pub version: Option<String>,
    pub region: String,
    pub profile: String,
    pub skip_profile: bool,
    pub credentials_file: PathBuf,
    pub extract: bool,
}

impl FetchConfig {
    /// Returns `Ok(None)` when no secret was named, which callers treat as a
    /// usage soft-fail rather than an error.
    pub fn from_cli(cli: Cli) -> Result<Option<Self>> {
        if cli.secret == SECRET_SENTINEL {
            return Ok(None);
        }

        let version = if cli.version == VERSION_SENTINEL {
            None
        } else {
            Some(cli.version)
        };

        let credentials_file = match cli.credentials_file {
            Some(path) => path,
            None => default_credentials_path()?,
        };

        Ok(Some(Self {
            secret: cli.secret,
            version,
            region: cli.region,
            profile: cli.profile,
            skip_profile: cli.skip_profile,
            credentials_file,
            extract: cli.extract,
        }))
    }
}

pub fn default_credentials_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home.join(".aws").join("credentials"))
}
