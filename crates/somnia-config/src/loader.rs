//! Config loading and default path resolution.

use crate::error::ConfigError;
use crate::model::SomniaConfig;
use directories::UserDirs;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename under the config directory.
const DEFAULT_CONFIG_FILE: &str = "somnia.json5";
/// Default config directory under the home directory.
const DEFAULT_CONFIG_DIR: &str = ".somnia";

impl SomniaConfig {
    /// Load a config from an explicit path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        let config: SomniaConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the user config if present, falling back to defaults.
    pub fn load_user_default() -> Result<Self, ConfigError> {
        let Some(path) = default_user_config_path() else {
            debug!("home directory unavailable, using default config");
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!("user config missing (path={}), using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.capture.default_rating) {
            return Err(ConfigError::Invalid(format!(
                "capture.default_rating must be between 1 and 5, got {}",
                self.capture.default_rating
            )));
        }
        Ok(())
    }

    /// Resolve the journal slot directory, defaulting under the home dir.
    pub fn journal_root(&self) -> PathBuf {
        match &self.journal.path {
            Some(path) => PathBuf::from(path),
            None => default_journal_root(),
        }
    }

    /// Resolve the directory exports are written to, defaulting to cwd.
    pub fn export_dir(&self) -> PathBuf {
        match &self.export.dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from("."),
        }
    }
}

/// Default user config path under the home directory.
pub fn default_user_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}

/// Default journal root under the home directory, or cwd when unavailable.
pub fn default_journal_root() -> PathBuf {
    match UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(DEFAULT_CONFIG_DIR),
        None => PathBuf::from(".").join(DEFAULT_CONFIG_DIR),
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, SomniaConfig};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let config = SomniaConfig::load_from_str("{}").expect("config");
        assert_eq!(config.capture.default_rating, 3);
        assert_eq!(config.journal.path, None);
        assert_eq!(config.export.dir, None);
    }

    #[test]
    fn json5_contents_parse_with_comments() {
        let config = SomniaConfig::load_from_str(
            r#"{
                // Keep the journal in a scratch directory.
                journal: { path: "/tmp/dreams" },
                capture: { default_rating: 5 },
            }"#,
        )
        .expect("config");
        assert_eq!(config.journal.path.as_deref(), Some("/tmp/dreams"));
        assert_eq!(config.capture.default_rating, 5);
        assert_eq!(config.journal_root(), PathBuf::from("/tmp/dreams"));
    }

    #[test]
    fn out_of_range_default_rating_is_rejected() {
        let err = SomniaConfig::load_from_str("{ capture: { default_rating: 9 } }")
            .expect_err("invalid config");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_from_path_reads_a_config_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("somnia.json5");
        std::fs::write(&path, "{ export: { dir: \"exports\" } }").expect("write config");

        let config = SomniaConfig::load_from_path(&path).expect("config");
        assert_eq!(config.export_dir(), PathBuf::from("exports"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let err = SomniaConfig::load_from_path(temp.path().join("absent.json5"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::ReadFailed(_)));
    }
}
