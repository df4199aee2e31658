//! Settings loaded from defaults, an optional `nbscrub.toml` and `NBSCRUB__*`
//! environment variables, in that order of precedence (last wins).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::text::{Substitution, SubstitutionError};

const CONFIG_FILE: &str = "nbscrub";
/// Points at an explicit settings file instead of `./nbscrub.*`.
pub const CONFIG_PATH_ENV: &str = "NBSCRUB_CONFIG";
const ENV_PREFIX: &str = "NBSCRUB";

pub const DEFAULT_NOTEBOOKS_DIR: &str = "notebooks";
pub const DEFAULT_EXTENSION: &str = "ipynb";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub notebooks_dir: PathBuf,
    pub extension: String,
    /// Extra pairs for `tidy`, applied after the built-in table.
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
}

impl Settings {
    fn validate(mut self) -> Result<Self, AppError> {
        if self.substitutions.iter().any(|sub| sub.from.is_empty()) {
            return Err(SubstitutionError::EmptyPattern.into());
        }
        self.extension = self.extension.trim_start_matches('.').to_string();
        Ok(self)
    }
}

pub fn load() -> Result<Settings, AppError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_from(explicit.as_deref())
}

/// Load settings, reading `file` (required) when given, else `./nbscrub.*` if present.
pub fn load_from(file: Option<&Path>) -> Result<Settings, AppError> {
    let file_source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name(CONFIG_FILE).required(false),
    };

    let builder = Config::builder()
        .set_default("notebooks_dir", DEFAULT_NOTEBOOKS_DIR)?
        .set_default("extension", DEFAULT_EXTENSION)?
        .add_source(file_source)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()
}
