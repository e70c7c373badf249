//! Where resume state is stored, layered from env vars, a YAML file and
//! built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::persist::STORAGE_KEY;
use crate::storage::{self, FileStorage, StorageError};

pub const DATA_DIR_ENV: &str = "RESUMAKE_DATA_DIR";
pub const STORAGE_KEY_ENV: &str = "RESUMAKE_STORAGE_KEY";

/// Layer a configuration value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

/// A configuration value tagged with the layer it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    fn default_to(value: T) -> Self {
        Self::new(value, ConfigSource::Default)
    }

    /// Replaces the value when a higher layer supplies one.
    fn overlay(&mut self, value: Option<T>, source: ConfigSource) {
        if let Some(value) = value {
            *self = Self::new(value, source);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the `<key>.json` state file lives in.
    pub data_dir: ConfigValue<PathBuf>,
    pub storage_key: ConfigValue<String>,
    /// The YAML file that was read, if one existed.
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", .0.display())]
    ReadError(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file '{}'", .0.display())]
    ParseError(PathBuf, #[source] serde_yaml::Error),
    #[error("Invalid storage_key from {source_layer:?} config")]
    InvalidStorageKey {
        source_layer: ConfigSource,
        #[source]
        error: StorageError,
    },
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    storage_key: Option<String>,
}

impl ConfigFile {
    /// Reads `path`, or returns `None` when there is no file there.
    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::ReadError(path.to_path_buf(), e)),
        };
        // An empty file is a valid, empty config
        if contents.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        serde_yaml::from_str(&contents)
            .map(Some)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }
}

impl Config {
    /// Loads the config: env vars override the YAML file, which overrides
    /// the defaults. `config_path` defaults to [`Config::default_config_path`].
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`], reading variables through `env`.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path.unwrap_or_else(Self::default_config_path);

        let mut data_dir = ConfigValue::default_to(Self::default_data_dir());
        let mut storage_key = ConfigValue::default_to(STORAGE_KEY.to_string());

        let file = ConfigFile::read(&path)?;
        let config_file = file.as_ref().map(|_| path.clone());
        if let Some(file) = file {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            data_dir.overlay(file.data_dir.map(|d| base.join(d)), ConfigSource::File);
            storage_key.overlay(file.storage_key, ConfigSource::File);
        }

        data_dir.overlay(env(DATA_DIR_ENV).map(PathBuf::from), ConfigSource::Environment);
        storage_key.overlay(env(STORAGE_KEY_ENV), ConfigSource::Environment);

        storage::validate_key(&storage_key.value).map_err(|error| {
            ConfigError::InvalidStorageKey {
                source_layer: storage_key.source,
                error,
            }
        })?;

        Ok(Self {
            data_dir,
            storage_key,
            config_file,
        })
    }

    /// File storage rooted at the configured data directory.
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir.value.clone())
    }

    /// Platform config dir (e.g. `~/.config/resumake` on Linux).
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resumake")
    }

    /// Platform data dir (e.g. `~/.local/share/resumake` on Linux).
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resumake")
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(dir: &Path, lines: &[&str]) -> PathBuf {
        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        config_path
    }

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load_with_env(Some(config_path), no_env).unwrap();
        assert!(config.data_dir.value.ends_with("resumake"));
        assert_eq!(config.data_dir.source, ConfigSource::Default);
        assert_eq!(config.storage_key.value, "resume-setting");
        assert_eq!(config.storage_key.source, ConfigSource::Default);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(
            temp_dir.path(),
            &["data_dir: /custom/resumes", "storage_key: cv-draft"],
        );

        let config = Config::load_with_env(Some(config_path.clone()), no_env).unwrap();
        assert_eq!(config.data_dir.value, PathBuf::from("/custom/resumes"));
        assert_eq!(config.data_dir.source, ConfigSource::File);
        assert_eq!(config.storage_key.value, "cv-draft");
        assert_eq!(config.storage_key.source, ConfigSource::File);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), &[]);

        let config = Config::load_with_env(Some(config_path.clone()), no_env).unwrap();
        assert_eq!(config.storage_key.source, ConfigSource::Default);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_data_dir_resolved_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), &["data_dir: data"]);

        let config = Config::load_with_env(Some(config_path), no_env).unwrap();
        assert_eq!(config.data_dir.value, temp_dir.path().join("data"));
        assert_eq!(
            config.file_storage().path("resume-setting"),
            temp_dir.path().join("data").join("resume-setting.json")
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(
            temp_dir.path(),
            &["data_dir: data", "storage_key: fromfile"],
        );
        let env: HashMap<&str, &str> = [(STORAGE_KEY_ENV, "fromenv")].into_iter().collect();

        let config =
            Config::load_with_env(Some(config_path), |name| env.get(name).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(config.storage_key.value, "fromenv");
        assert_eq!(config.storage_key.source, ConfigSource::Environment);
        assert_eq!(config.data_dir.source, ConfigSource::File);
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_process_env_is_read() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let config = Config::load(Some(temp_dir.path().join("none.yaml"))).unwrap();
        assert_eq!(config.data_dir.value, temp_dir.path());
        assert_eq!(config.data_dir.source, ConfigSource::Environment);

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), &["invalid: yaml: content: ["]);

        let err = Config::load_with_env(Some(config_path), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), &["datadir: /typo"]);

        let result = Config::load_with_env(Some(config_path), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_, _))));
    }

    #[test]
    fn test_invalid_storage_key_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), &["storage_key: ../outside"]);

        let result = Config::load_with_env(Some(config_path), no_env);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidStorageKey {
                source_layer: ConfigSource::File,
                error: StorageError::InvalidKey(_),
            })
        ));
    }
}
