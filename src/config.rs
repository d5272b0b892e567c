//! Optional settings file
//!
//! Reads defaults from (in priority order):
//! - the file given with `--config`
//! - `refup.toml` in the current directory, when present
//!
//! ```toml
//! feed_tool = "/opt/nuget/nuget"
//! source = "https://feed.example/v3/index.json"
//! exclude = ["/src/legacy", "/src/third_party"]
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up in the current directory
pub const SETTINGS_FILE: &str = "refup.toml";

/// Defaults read from a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Package-search executable
    pub feed_tool: Option<PathBuf>,
    /// Feed URI passed to the search tool
    pub source: Option<String>,
    /// Directories skipped during project file discovery
    pub exclude: Vec<PathBuf>,
}

impl Settings {
    /// Read settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse settings text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseSettings {
            path: path.to_path_buf(),
            message: e.to_string().trim().to_string(),
        })
    }

    /// Find and load the settings that apply to a run
    ///
    /// An explicit path must exist; the default file is optional. Returns the
    /// settings together with the file they came from, if any.
    pub fn discover(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let default_path = dir.join(SETTINGS_FILE);
        if default_path.is_file() {
            return Ok((Self::load(&default_path)?, Some(default_path)));
        }

        Ok((Self::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let content = r#"
feed_tool = "/opt/nuget/nuget"
source = "https://feed.example/v3/index.json"
exclude = ["/src/legacy"]
"#;
        let settings = Settings::parse(content, Path::new("refup.toml")).unwrap();
        assert_eq!(settings.feed_tool, Some(PathBuf::from("/opt/nuget/nuget")));
        assert_eq!(
            settings.source.as_deref(),
            Some("https://feed.example/v3/index.json")
        );
        assert_eq!(settings.exclude, vec![PathBuf::from("/src/legacy")]);
    }

    #[test]
    fn test_parse_empty() {
        let settings = Settings::parse("", Path::new("refup.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = Settings::parse("colour = true", Path::new("refup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseSettings { .. }));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = Settings::parse("exclude = \"/src\"", Path::new("refup.toml")).unwrap_err();
        assert!(err.to_string().contains("refup.toml"));
    }

    #[test]
    fn test_discover_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "source = \"https://a\"\n").unwrap();

        let (settings, path) = Settings::discover(None, dir.path()).unwrap();
        assert_eq!(settings.source.as_deref(), Some("https://a"));
        assert_eq!(path, Some(dir.path().join(SETTINGS_FILE)));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = TempDir::new().unwrap();
        let (settings, path) = Settings::discover(None, dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_discover_explicit_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("other.toml");
        let err = Settings::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadSettings { .. }));
    }

    #[test]
    fn test_discover_explicit_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "source = \"https://a\"\n").unwrap();
        let other = dir.path().join("other.toml");
        fs::write(&other, "source = \"https://b\"\n").unwrap();

        let (settings, path) = Settings::discover(Some(&other), dir.path()).unwrap();
        assert_eq!(settings.source.as_deref(), Some("https://b"));
        assert_eq!(path, Some(other));
    }
}
