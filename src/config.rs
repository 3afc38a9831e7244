//! Configuration file support for the viewer.
//!
//! Settings are stored as JSON: log verbosity, display preferences, gesture
//! thresholds and keybindings. Missing sections and fields fall back to
//! their defaults so older or hand-written files keep loading.

use lightbox_viewport::GesturePolicy;
use serde::{Deserialize, Serialize};

use crate::keybindings::KeyBindings;
use crate::model::ObjectFit;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Viewer configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Display and logging preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Gesture thresholds
    #[serde(default)]
    pub gestures: GesturePolicy,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Show the thumbnail rail for multi-image sequences
    #[serde(default)]
    pub with_thumbnails: bool,

    /// How the main image fills the viewport
    #[serde(default)]
    pub object_fit: ObjectFit,
}

impl ViewerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: Preferences::default(),
            gestures: GesturePolicy::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    ///
    /// Gesture thresholds and keybindings are sanitized; unusable values are
    /// replaced by defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.gestures = config.gestures.sanitized();
        config.keybindings = config.keybindings.sanitized();
        Ok(config)
    }

    /// Load configuration from a specific file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "lightbox-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("lightbox").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("lightbox")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(&path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "lightbox-config";

    /// Try to load configuration from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Save configuration to localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = self.to_json()?;

        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| {
                ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
            })?;

        log::info!("Saved configuration to localStorage");
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_viewport::Key;

    #[test]
    fn test_default_roundtrip_keeps_thresholds() {
        let json = ViewerConfig::default().to_json().unwrap();
        let config = ViewerConfig::from_json(&json).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.gestures, GesturePolicy::default());
        assert_eq!(config.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = ViewerConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config.preferences.log_level, LogLevel::Info);
        assert!(!config.preferences.with_thumbnails);
        assert_eq!(config.preferences.object_fit, ObjectFit::Contain);
        assert_eq!(config.gestures.swipe_threshold, 50.0);
    }

    #[test]
    fn test_partial_sections() {
        let config = ViewerConfig::from_json(
            r#"{
                "version": 1,
                "preferences": {"log_level": "debug", "object_fit": "cover"},
                "gestures": {"axis_lock_threshold": 12.0},
                "keybindings": {"close": {"Char": "q"}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.preferences.log_level, LogLevel::Debug);
        assert_eq!(config.preferences.object_fit, ObjectFit::Cover);
        assert_eq!(config.gestures.axis_lock_threshold, 12.0);
        assert_eq!(config.gestures.max_scale, 4.0);
        assert_eq!(config.keybindings.close, Key::Char('q'));
        assert_eq!(config.keybindings.prev, Key::ArrowLeft);
    }

    #[test]
    fn test_version_too_new() {
        let err = ViewerConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_gestures_are_sanitized() {
        let config =
            ViewerConfig::from_json(r#"{"version": 1, "gestures": {"max_scale": 0.2}}"#).unwrap();
        assert_eq!(config.gestures.max_scale, 4.0);
    }

    #[test]
    fn test_conflicting_keybindings_are_sanitized() {
        let config = ViewerConfig::from_json(
            r#"{"version": 1, "keybindings": {"close": "ArrowLeft"}}"#,
        )
        .unwrap();
        assert_eq!(config.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ViewerConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.name(), "Trace");
    }
}
