// Editor settings
// Loaded from ~/.config/taskgrid/settings.toml

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Largest grid side the editor accepts by default.
pub const DEFAULT_MAX_DIMENSION: usize = 30;

#[derive(Debug)]
pub enum SettingsError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// Parsed, but values are out of range.
    Validation(String),
    /// IO error (read, write, create dir).
    Io(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "settings parse error: {msg}"),
            Self::Validation(msg) => write!(f, "settings validation error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Height of the grid produced by reset and task load
    pub default_height: usize,

    /// Width of the grid produced by reset and task load
    pub default_width: usize,

    /// Upper bound for either side on resize
    pub max_dimension: usize,

    /// Keep at most this many undo steps (None = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_height: 3,
            default_width: 3,
            max_dimension: DEFAULT_MAX_DIMENSION,
            history_limit: None,
        }
    }
}

impl EditorSettings {
    pub fn from_toml(input: &str) -> Result<Self, SettingsError> {
        let settings: EditorSettings =
            toml::from_str(input).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_dimension == 0 {
            return Err(SettingsError::Validation("max_dimension must be at least 1".into()));
        }

        if self.default_height == 0 || self.default_width == 0 {
            return Err(SettingsError::Validation(format!(
                "default size must be at least 1x1, got {}x{}",
                self.default_height, self.default_width
            )));
        }

        if self.default_height > self.max_dimension || self.default_width > self.max_dimension {
            return Err(SettingsError::Validation(format!(
                "default size {}x{} exceeds max_dimension {}",
                self.default_height, self.default_width, self.max_dimension
            )));
        }

        if self.history_limit == Some(0) {
            return Err(SettingsError::Validation("history_limit must be at least 1".into()));
        }

        Ok(())
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskgrid")
            .join("settings.toml")
    }

    /// Load settings from the user config dir, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}: {}, using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Save current settings to the user config dir
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let contents = self.to_toml()?;
        fs::write(path, contents).map_err(|e| SettingsError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!((settings.default_height, settings.default_width), (3, 3));
        assert_eq!(settings.max_dimension, 30);
        assert_eq!(settings.history_limit, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = EditorSettings::from_toml("history_limit = 50\n").unwrap();
        assert_eq!(settings.history_limit, Some(50));
        assert_eq!(settings.default_height, 3);
        assert_eq!(settings.max_dimension, 30);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EditorSettings::from_toml("").unwrap(), EditorSettings::default());
    }

    #[test]
    fn test_validation_errors() {
        let err = EditorSettings::from_toml("default_height = 0").unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));

        let err = EditorSettings::from_toml("default_width = 40").unwrap_err();
        assert!(err.to_string().contains("exceeds max_dimension"));

        let err = EditorSettings::from_toml("history_limit = 0").unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = EditorSettings::from_toml("default_height = \"three\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = EditorSettings {
            default_height: 5,
            default_width: 4,
            max_dimension: 12,
            history_limit: Some(200),
        };
        settings.save_to(&path).unwrap();

        let loaded = EditorSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = EditorSettings::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
