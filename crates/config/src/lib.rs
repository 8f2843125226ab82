use std::{
    env, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use directories::ProjectDirs;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::strings::Strings;

pub mod strings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("couldn't serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub strings: Strings,
}

fn env_override<T: FromStr>(value: &mut T, env_name: &str) {
    if let Some(env_var) = env::var(env_name)
        .ok()
        .and_then(|env_var| T::from_str(&env_var).ok())
    {
        *value = env_var;
    }
}

impl Options {
    pub fn path() -> Option<PathBuf> {
        const SETTINGS_FILENAME: &str = "settings.toml";

        let dirs = ProjectDirs::from("io.github", "soulsmods", "fstypes")?;
        let config_dir = dirs.config_dir();

        Some(config_dir.join(SETTINGS_FILENAME))
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(config_path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Loads the user's settings, falling back to defaults when the file is missing or invalid,
    /// then applies environment overrides.
    pub fn load() -> Self {
        let loaded = match Self::path() {
            Some(path) => Self::load_from(path),
            None => Err(ConfigError::NoConfigDir),
        };

        let mut options = loaded.unwrap_or_else(|e| {
            log::warn!("using default settings: {e}");
            Self::default()
        });

        options.apply_env();
        options
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn apply_env(&mut self) {
        env_override(&mut self.strings.encoding, "FSTYPES_STRING_ENCODING");
    }
}
