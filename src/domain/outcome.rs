//! Per-file outcomes and the process-level exit status
//!
//! Every manifest in a batch produces one `FileReport`. The batch status is
//! derived from the reports in processing order: each per-file failure sets
//! the status, so the result says that at least one failure happened and
//! reflects the most recent one. Successful files never clear it.

use super::ShapeKind;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

/// Process-level outcome codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStatus {
    /// Everything requested was done
    Success,
    /// Malformed or missing input
    ArgumentError,
    /// The feed listing yielded no usable version
    NoPackagesFound,
    /// The file-spec matched nothing
    NoManifestsFound,
    /// At least one manifest could not be read or written
    WriteOrScanFailure,
    /// Manifest enumeration failed outright
    ManifestScanFailure,
}

impl ExitStatus {
    /// Numeric exit code
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::ArgumentError => 1,
            ExitStatus::NoPackagesFound => 2,
            ExitStatus::NoManifestsFound => 3,
            ExitStatus::WriteOrScanFailure => 4,
            ExitStatus::ManifestScanFailure => 5,
        }
    }

    /// Returns true for the success status
    pub fn is_success(&self) -> bool {
        *self == ExitStatus::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// What happened to a single manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The version token was replaced on disk
    Updated {
        shape: ShapeKind,
        from: String,
        to: String,
    },
    /// Dry run: the version token would have been replaced
    WouldUpdate {
        shape: ShapeKind,
        from: String,
        to: String,
    },
    /// No declaration for the package was found
    NoMatch,
    /// The file could not be read
    ReadFailed { message: String },
    /// The rewritten text could not be written back
    WriteFailed { shape: ShapeKind, message: String },
}

impl FileOutcome {
    /// Returns true if the file could not be processed
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            FileOutcome::ReadFailed { .. } | FileOutcome::WriteFailed { .. }
        )
    }

    /// Status this outcome contributes to the batch, if any
    ///
    /// In strict mode a missing declaration counts as a per-file failure.
    pub fn status(&self, strict: bool) -> Option<ExitStatus> {
        match self {
            FileOutcome::ReadFailed { .. } | FileOutcome::WriteFailed { .. } => {
                Some(ExitStatus::WriteOrScanFailure)
            }
            FileOutcome::NoMatch if strict => Some(ExitStatus::WriteOrScanFailure),
            _ => None,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Updated { from, to, .. } => write!(f, "updated {} -> {}", from, to),
            FileOutcome::WouldUpdate { from, to, .. } => {
                write!(f, "would update {} -> {}", from, to)
            }
            FileOutcome::NoMatch => write!(f, "no matching reference"),
            FileOutcome::ReadFailed { message } => write!(f, "read failed: {}", message),
            FileOutcome::WriteFailed { message, .. } => write!(f, "write failed: {}", message),
        }
    }
}

/// Outcome for one manifest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Manifest path
    pub path: PathBuf,
    /// What happened
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Create a new FileReport
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Accumulated outcomes for every manifest in a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Reports in processing order
    pub files: Vec<FileReport>,
    /// Whether missing declarations count as failures
    pub strict: bool,
}

impl BatchReport {
    /// Create an empty report
    pub fn new(strict: bool) -> Self {
        Self {
            files: Vec::new(),
            strict,
        }
    }

    /// Record one file's outcome
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Batch status: the most recent per-file failure, or success
    pub fn exit_status(&self) -> ExitStatus {
        self.files
            .iter()
            .fold(ExitStatus::Success, |status, report| {
                report.outcome.status(self.strict).unwrap_or(status)
            })
    }

    /// Reports whose declaration was not found
    pub fn unmatched(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::NoMatch))
    }

    /// Number of files updated (or that would be, in a dry run)
    pub fn changed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|r| {
                matches!(
                    r.outcome,
                    FileOutcome::Updated { .. } | FileOutcome::WouldUpdate { .. }
                )
            })
            .count()
    }

    /// Number of files that failed
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|r| r.outcome.is_failure()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updated() -> FileOutcome {
        FileOutcome::Updated {
            shape: ShapeKind::Sdk,
            from: "1.0.0".to_string(),
            to: "2.0.0".to_string(),
        }
    }

    fn write_failed() -> FileOutcome {
        FileOutcome::WriteFailed {
            shape: ShapeKind::Sdk,
            message: "read-only".to_string(),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::ArgumentError.code(), 1);
        assert_eq!(ExitStatus::NoPackagesFound.code(), 2);
        assert_eq!(ExitStatus::NoManifestsFound.code(), 3);
        assert_eq!(ExitStatus::WriteOrScanFailure.code(), 4);
        assert_eq!(ExitStatus::ManifestScanFailure.code(), 5);
    }

    #[test]
    fn test_empty_batch_is_success() {
        assert_eq!(BatchReport::new(false).exit_status(), ExitStatus::Success);
    }

    #[test]
    fn test_failure_after_success() {
        let mut batch = BatchReport::new(false);
        batch.push(FileReport::new("a.csproj", updated()));
        batch.push(FileReport::new("b.csproj", write_failed()));
        assert_eq!(batch.exit_status(), ExitStatus::WriteOrScanFailure);
    }

    #[test]
    fn test_success_after_failure_does_not_clear() {
        let mut batch = BatchReport::new(false);
        batch.push(FileReport::new("a.csproj", write_failed()));
        batch.push(FileReport::new("b.csproj", updated()));
        batch.push(FileReport::new("c.csproj", FileOutcome::NoMatch));
        assert_eq!(batch.exit_status(), ExitStatus::WriteOrScanFailure);
        assert_eq!(batch.failed_count(), 1);
        assert_eq!(batch.changed_count(), 1);
    }

    #[test]
    fn test_no_match_only_fails_in_strict_mode() {
        let mut batch = BatchReport::new(false);
        batch.push(FileReport::new("a.csproj", FileOutcome::NoMatch));
        assert_eq!(batch.exit_status(), ExitStatus::Success);
        assert_eq!(batch.unmatched().count(), 1);

        batch.strict = true;
        assert_eq!(batch.exit_status(), ExitStatus::WriteOrScanFailure);
    }

    #[test]
    fn test_read_failure_counts() {
        let outcome = FileOutcome::ReadFailed {
            message: "denied".to_string(),
        };
        assert!(outcome.is_failure());
        assert_eq!(outcome.status(false), Some(ExitStatus::WriteOrScanFailure));
        assert_eq!(outcome.to_string(), "read failed: denied");
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(updated()).unwrap();
        assert_eq!(json["type"], "updated");
        assert_eq!(json["shape"], "sdk");
        assert_eq!(json["to"], "2.0.0");
    }
}
