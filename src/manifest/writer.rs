//! Manifest file writing and update operations
//!
//! This module provides:
//! - ManifestWriter for applying a version to one project file
//! - Dry-run mode support (no actual file modifications)
//! - Per-file failures reported as outcomes rather than errors

use crate::domain::{FileOutcome, FileReport, ReferenceMatch};
use crate::error::ManifestError;
use crate::manifest::reference::{rewrite, ReferenceRewriter};
use std::fs;
use std::path::Path;

/// Writer for project files that applies a version update
pub struct ManifestWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Read one file, replace the package's version, and write it back
    pub fn apply(&self, path: &Path, rewriter: &ReferenceRewriter, new_version: &str) -> FileReport {
        FileReport::new(path, self.apply_outcome(path, rewriter, new_version))
    }

    fn apply_outcome(
        &self,
        path: &Path,
        rewriter: &ReferenceRewriter,
        new_version: &str,
    ) -> FileOutcome {
        let content = match read_manifest(path) {
            Ok(content) => content,
            Err(e) => {
                return FileOutcome::ReadFailed {
                    message: e.to_string(),
                }
            }
        };

        let Some(found) = rewriter.find(&content) else {
            return FileOutcome::NoMatch;
        };

        if self.dry_run {
            return FileOutcome::WouldUpdate {
                shape: found.shape,
                from: found.original_version,
                to: new_version.to_string(),
            };
        }

        commit(path, &content, found, new_version)
    }
}

/// Splice the new version into the content and write it to `path`
fn commit(path: &Path, content: &str, found: ReferenceMatch, new_version: &str) -> FileOutcome {
    let updated = rewrite(content, &found, new_version);
    match write_manifest(path, &updated) {
        Ok(()) => FileOutcome::Updated {
            shape: found.shape,
            from: found.original_version,
            to: new_version.to_string(),
        },
        Err(e) => FileOutcome::WriteFailed {
            shape: found.shape,
            message: e.to_string(),
        },
    }
}

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
