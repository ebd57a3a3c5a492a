//! Knowledge-base configuration.
//!
//! # Responsibility
//! - Load optional TOML settings and fill defaults.
//! - Carry the knowledge root explicitly into every service call.
//!
//! # Invariants
//! - `root` and `index_file` are never empty after validation.
//! - `index_file` is a bare file name placed directly under `root`.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default knowledge root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "knowledge";
/// Default index document name.
pub const DEFAULT_INDEX_FILE: &str = "INDEX.md";
/// Default example language for manual `add`.
pub const DEFAULT_LANGUAGE: &str = "python";
/// Config file probed in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "studykb.toml";

/// Errors from configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not valid TOML for `KbConfig`.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Values failed validation.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KbConfig {
    /// Knowledge tree root directory.
    pub root: PathBuf,
    /// Index document name under `root`.
    pub index_file: String,
    /// Example language used when `add` gets no `--lang`.
    pub default_language: String,
    /// Commit after a study run.
    pub auto_commit: bool,
    /// Working tree the commit runs in.
    pub repo_dir: PathBuf,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            auto_commit: true,
            repo_dir: PathBuf::from("."),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl KbConfig {
    /// Creates default settings rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Loads settings from `path`, or from `studykb.toml` in the working
    /// directory when present, or falls back to defaults.
    ///
    /// # Errors
    /// - An explicit `path` that cannot be read.
    /// - Malformed TOML or failed validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let probe = Path::new(DEFAULT_CONFIG_FILE);
                if probe.is_file() {
                    Self::from_file(probe)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and validates one TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(raw.as_str()).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("root must not be empty".to_string()));
        }
        let index_file = self.index_file.trim();
        if index_file.is_empty() {
            return Err(ConfigError::Invalid(
                "index_file must not be empty".to_string(),
            ));
        }
        if index_file.contains(['/', '\\']) || index_file == "." || index_file == ".." {
            return Err(ConfigError::Invalid(format!(
                "index_file must be a bare file name, got `{index_file}`"
            )));
        }
        if self.default_language.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_language must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the index document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(self.index_file.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KbConfig};
    use std::path::PathBuf;

    #[test]
    fn defaults_point_at_knowledge_root() {
        let config = KbConfig::default();
        assert_eq!(config.root, PathBuf::from("knowledge"));
        assert_eq!(config.index_path(), PathBuf::from("knowledge").join("INDEX.md"));
        assert!(config.auto_commit);
        assert_eq!(config.default_language, "python");
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = KbConfig::from_toml_str("root = \"notes\"\nauto_commit = false\n").unwrap();
        assert_eq!(config.root, PathBuf::from("notes"));
        assert!(!config.auto_commit);
        assert_eq!(config.index_file, "INDEX.md");
    }

    #[test]
    fn nested_index_file_is_rejected() {
        let err = KbConfig::from_toml_str("index_file = \"docs/INDEX.md\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = KbConfig::from_toml_str("rooot = \"typo\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
