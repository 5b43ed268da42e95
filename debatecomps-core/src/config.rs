//! Toolkit configuration at ~/.config/debatecomps/config.toml.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{DirectoryError, DirectoryResult};
use crate::export::ics::DEFAULT_EXPORT_FILE;
use crate::saved::SAVED_FILE_NAME;

static DEFAULT_TOURNAMENTS_FILE: &str = "~/debatecomps/tournaments.json";
const ENV_PREFIX: &str = "DEBATECOMPS";

fn default_tournaments_file() -> PathBuf {
    PathBuf::from(DEFAULT_TOURNAMENTS_FILE)
}

fn default_export_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

#[derive(Deserialize, Clone, Debug)]
pub struct DirectoryConfig {
    /// JSON file of tournament records.
    #[serde(default = "default_tournaments_file")]
    pub tournaments_file: PathBuf,

    /// Where saved tournament ids live; defaults into the data directory.
    pub saved_file: Option<PathBuf>,

    /// Default target for `.ics` exports.
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            tournaments_file: default_tournaments_file(),
            saved_file: None,
            export_file: default_export_file(),
        }
    }
}

impl DirectoryConfig {
    pub fn config_path() -> DirectoryResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DirectoryError::Config("Could not determine config directory".into()))?
            .join("debatecomps");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path, creating a commented-out file on
    /// first use. `DEBATECOMPS_*` environment variables override file values.
    pub fn load() -> DirectoryResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DirectoryResult<Self> {
        Self::build(path, Some(Environment::with_prefix(ENV_PREFIX)))
    }

    fn build(path: &Path, env: Option<Environment>) -> DirectoryResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from(path.to_path_buf()).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder
            .build()
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DirectoryError::Config(e.to_string()))
    }

    pub fn tournaments_path(&self) -> PathBuf {
        expand(&self.tournaments_file)
    }

    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_file)
    }

    pub fn saved_path(&self) -> DirectoryResult<PathBuf> {
        match &self.saved_file {
            Some(path) => Ok(expand(path)),
            None => {
                let data_dir = dirs::data_dir().ok_or_else(|| {
                    DirectoryError::Config("Could not determine data directory".into())
                })?;
                Ok(data_dir.join("debatecomps").join(SAVED_FILE_NAME))
            }
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DirectoryResult<()> {
        let contents = format!(
            "\
# debatecomps configuration

# Tournament records (JSON array, or {{\"tournaments\": [...]}}):
# tournaments_file = \"{}\"

# Saved tournament ids (defaults to the platform data directory):
# saved_file = \"~/.local/share/debatecomps/{}\"

# Default file for .ics exports:
# export_file = \"{}\"
",
            DEFAULT_TOURNAMENTS_FILE, SAVED_FILE_NAME, DEFAULT_EXPORT_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DirectoryError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DirectoryError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
