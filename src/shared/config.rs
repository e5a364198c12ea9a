//! Application Configuration
//!
//! Read once at startup from `config.toml`; every field has a default so an
//! absent or partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::use_cases::{DEFAULT_CUSTOM_TITLE, DEFAULT_TEXT};
use crate::domain::platform::ParsePlatformError;
use crate::domain::Platform;

/// Environment variable that overrides the configured platform
pub const PLATFORM_ENV_VAR: &str = "CREATIONAL_WIDGETS_PLATFORM";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Widget family used by the factory demo
    #[serde(default)]
    pub platform: Platform,

    /// Text written into the text field
    #[serde(default = "default_text")]
    pub text: String,

    /// Title for the "window with title" recipe
    #[serde(default = "default_title")]
    pub title: String,

    /// Log file location (defaults next to the executable)
    #[serde(default)]
    pub log_path: Option<PathBuf>,
}

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

fn default_title() -> String {
    DEFAULT_CUSTOM_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            text: default_text(),
            title: default_title(),
            log_path: None,
        }
    }
}

impl Config {
    /// Find the config file in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("creational-widgets").join("config.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("config.toml"))),
            Some(PathBuf::from("creational-widgets.toml")),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration, returning defaults if no file exists
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => {
                crate::log!("Loading config from {:?}", path);
                Self::load_from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `CREATIONAL_WIDGETS_PLATFORM` if it is set
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_platform_override(std::env::var(PLATFORM_ENV_VAR).ok().as_deref())
    }

    /// Replace the platform with `value` when one is given
    pub fn with_platform_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            self.platform = value.parse()?;
        }
        Ok(self)
    }

    /// Log file to use, configured or default
    pub fn log_path(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(crate::log::default_log_path)
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
    PlatformError(ParsePlatformError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::PlatformError(e) => write!(f, "Platform error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ParsePlatformError> for ConfigError {
    fn from(e: ParsePlatformError) -> Self {
        ConfigError::PlatformError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.platform, Platform::Windows);
        assert_eq!(config.text, "Hello OS");
        assert_eq!(config.title, "New title");
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("platform = \"macos\"\ntitle = \"Settings\"\n").unwrap();
        assert_eq!(config.platform, Platform::MacOS);
        assert_eq!(config.title, "Settings");
        assert_eq!(config.text, "Hello OS");
    }

    #[test]
    fn test_parse_accepts_display_and_alias_names() {
        let config = Config::parse("platform = \"None\"").unwrap();
        assert_eq!(config.platform, Platform::None);

        let config = Config::parse("platform = \"MacOS\"\ntitle = \"Kept\"").unwrap();
        assert_eq!(config.platform, Platform::MacOS);
        assert_eq!(config.title, "Kept");

        let config = Config::parse("platform = \"mac\"").unwrap();
        assert_eq!(config.platform, Platform::MacOS);
    }

    #[test]
    fn test_load_keeps_other_fields_with_display_platform() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform = \"MacOS\"").unwrap();
        writeln!(file, "title = \"Kept\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.platform, Platform::MacOS);
        assert_eq!(config.title, "Kept");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform = [1, 2]").unwrap();

        let result = Config::load_from_path(file.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        assert!(result.unwrap_err().to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_parse_rejects_unknown_platform() {
        let result = Config::parse("platform = \"beos\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "platform = \"none\"").unwrap();
        writeln!(file, "text = \"typed\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.platform, Platform::None);
        assert_eq!(config.text, "typed");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_platform_override() {
        let config = Config::default()
            .with_platform_override(Some("MacOS"))
            .unwrap();
        assert_eq!(config.platform, Platform::MacOS);

        let config = config.with_platform_override(None).unwrap();
        assert_eq!(config.platform, Platform::MacOS);

        let result = Config::default().with_platform_override(Some("amiga"));
        assert!(matches!(result, Err(ConfigError::PlatformError(_))));
    }

    #[test]
    fn test_log_path_override() {
        let config = Config::parse("log_path = \"/tmp/cw.log\"").unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/cw.log"));
    }
}
