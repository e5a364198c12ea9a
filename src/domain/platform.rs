//! Platform selector - which widget family the process works with
//!
//! Resolved once at startup from configuration and passed explicitly to the
//! components that need it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target widget family
///
/// Config files and the environment accept the same names, see `FromStr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOS,
    /// No supported family; creating widgets for it is an error
    None,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Windows
    }
}

impl Platform {
    /// Name used in trace output and window fragments
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "MacOS",
            Platform::None => "None",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a platform name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown platform: '{0}'")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" | "osx" => Ok(Platform::MacOS),
            "none" => Ok(Platform::None),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = ParsePlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("windows".parse(), Ok(Platform::Windows));
        assert_eq!("Win".parse(), Ok(Platform::Windows));
        assert_eq!(" MacOS ".parse(), Ok(Platform::MacOS));
        assert_eq!("osx".parse(), Ok(Platform::MacOS));
        assert_eq!("none".parse(), Ok(Platform::None));
        assert!("linux".parse::<Platform>().is_err());
    }

    #[test]
    fn test_default_is_windows() {
        assert_eq!(Platform::default(), Platform::Windows);
    }

    #[test]
    fn test_display_form_parses_back() {
        for platform in [Platform::Windows, Platform::MacOS, Platform::None] {
            assert_eq!(platform.to_string().parse(), Ok(platform));
            assert_eq!(Platform::try_from(platform.to_string()), Ok(platform));
        }
        assert_eq!(
            Platform::try_from("beos".to_string()),
            Err(ParsePlatformError("beos".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::MacOS.to_string(), "MacOS");
        assert_eq!(Platform::None.to_string(), "None");
    }
}
