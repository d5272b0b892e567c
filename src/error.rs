//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: A listing entry carries a version that is not dotted-numeric
//! - SelectionError: Nothing survived listing parsing
//! - FeedError: The external package-search tool failed
//! - ScanError: Manifest discovery could not enumerate the file-spec
//! - ManifestError: Reading or writing a single manifest failed
//! - ConfigError: Invalid command-line or settings-file input
//! - RunError: Fatal conditions that stop the orchestrator

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ExitStatus;

/// Errors produced while parsing a dotted version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The text is not one or more dot-separated non-negative integers
    #[error("invalid version '{text}'")]
    InvalidVersion { text: String },
}

/// Errors produced by candidate selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No candidates to choose from
    #[error("no candidate versions to choose from")]
    EmptyCandidateSet,
}

/// Errors from the external package-search tool
#[derive(Error, Debug)]
pub enum FeedError {
    /// The tool could not be started
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited with a non-zero status
    #[error("{tool} exited with status {code}: {stderr}")]
    NonZeroExit {
        tool: String,
        code: i32,
        stderr: String,
    },
}

/// Errors raised while enumerating manifest files
#[derive(Error, Debug)]
pub enum ScanError {
    /// The file-spec has no usable file pattern
    #[error("file-spec '{spec}' does not name a file pattern")]
    MissingPattern { spec: String },

    /// The file pattern could not be compiled
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The search root could not be enumerated
    #[error("cannot scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to a single manifest file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value was given as an empty string
    #[error("missing value for {option}")]
    MissingValue { option: &'static str },

    /// Settings file could not be read
    #[error("failed to read settings file {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the expected schema
    #[error("failed to parse settings file {path}: {message}")]
    ParseSettings { path: PathBuf, message: String },

    /// Excluded directories must be absolute
    #[error("excluded directory must be an absolute path: {path}")]
    RelativeExclude { path: PathBuf },
}

/// Fatal conditions that end a run before or instead of the per-file batch
#[derive(Error, Debug)]
pub enum RunError {
    /// The feed listing could not be obtained
    #[error("package search failed: {0}")]
    Feed(#[from] FeedError),

    /// The listing held no usable entry for the package
    #[error("No packages found matching {package}")]
    NoPackagesFound { package: String },

    /// Manifest enumeration failed outright
    #[error("Error scanning for project files: {0}")]
    ManifestScan(#[from] ScanError),

    /// Enumeration succeeded with no results
    #[error("No project files found matching {spec}")]
    NoManifestsFound { spec: String },

    /// The search patterns for the package name could not be compiled
    #[error("cannot build search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl VersionError {
    /// Creates a new InvalidVersion error
    pub fn invalid(text: impl Into<String>) -> Self {
        VersionError::InvalidVersion { text: text.into() }
    }
}

impl ScanError {
    /// Creates a new Walk error
    pub fn walk(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Walk {
            path: path.into(),
            source,
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl RunError {
    /// Process exit status this fatal condition maps to
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunError::Feed(_) | RunError::NoPackagesFound { .. } => ExitStatus::NoPackagesFound,
            RunError::ManifestScan(_) => ExitStatus::ManifestScanFailure,
            RunError::Pattern(_) => ExitStatus::ArgumentError,
            RunError::NoManifestsFound { .. } => ExitStatus::NoManifestsFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_message() {
        let err = VersionError::invalid("1.x");
        assert_eq!(err.to_string(), "invalid version '1.x'");
    }

    #[test]
    fn test_feed_error_non_zero_exit() {
        let err = FeedError::NonZeroExit {
            tool: "nuget".to_string(),
            code: 1,
            stderr: "Unable to load the service index".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nuget exited with status 1"));
        assert!(msg.contains("service index"));
    }

    #[test]
    fn test_manifest_error_write() {
        let err = ManifestError::write_error(
            "/src/App/App.csproj",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to write manifest file"));
        assert!(msg.contains("App.csproj"));
    }

    #[test]
    fn test_scan_error_missing_pattern() {
        let err = ScanError::MissingPattern {
            spec: "/src/".to_string(),
        };
        assert!(err.to_string().contains("does not name a file pattern"));
    }

    #[test]
    fn test_config_error_missing_value() {
        let err = ConfigError::MissingValue {
            option: "--package",
        };
        assert_eq!(err.to_string(), "missing value for --package");
    }

    #[test]
    fn test_run_error_exit_status() {
        let err = RunError::NoPackagesFound {
            package: "Foo.Bar".to_string(),
        };
        assert_eq!(err.exit_status(), ExitStatus::NoPackagesFound);
        assert_eq!(err.to_string(), "No packages found matching Foo.Bar");

        let err = RunError::from(FeedError::NonZeroExit {
            tool: "nuget".to_string(),
            code: 1,
            stderr: String::new(),
        });
        assert_eq!(err.exit_status(), ExitStatus::NoPackagesFound);

        let err = RunError::NoManifestsFound {
            spec: "/src/*.csproj".to_string(),
        };
        assert_eq!(err.exit_status(), ExitStatus::NoManifestsFound);

        let err = RunError::from(ScanError::MissingPattern {
            spec: "/src/".to_string(),
        });
        assert_eq!(err.exit_status(), ExitStatus::ManifestScanFailure);
    }
}
