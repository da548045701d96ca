//! Locates `tokenlint.toml`.
//!
//! `--config` is taken as given. Otherwise the project directory is searched,
//! then the global directory; with neither, built-in defaults apply.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokenlint_core::Config;

/// Names searched in the project directory, first match wins.
const PROJECT_CONFIG_NAMES: [&str; 2] = ["tokenlint.toml", ".tokenlint.toml"];

/// Overrides the global directory.
const CONFIG_DIR_ENV: &str = "TOKENLINT_CONFIG_DIR";

/// Origin of the configuration in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    Global(PathBuf),
    Default,
}

impl ConfigSource {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Picks the configuration for a run rooted at `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.is_file())
        .map(ConfigSource::Project);
    let global = || {
        global_dir
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file())
            .map(ConfigSource::Global)
    };

    let source = project.or_else(global).unwrap_or(ConfigSource::Default);
    tracing::debug!(?source, "resolved config");
    source
}

/// `$TOKENLINT_CONFIG_DIR`, else `~/.tokenlint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".tokenlint")))
}

/// Reads the configuration `source` names, or the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(source: &ConfigSource) -> Result<Config> {
    match source.path() {
        None => Ok(Config::default()),
        Some(path) => {
            if source.is_global() {
                tracing::info!(path = %path.display(), "using global config");
            }
            Config::from_file(path)
                .with_context(|| format!("cannot load config {}", path.display()))
        }
    }
}
