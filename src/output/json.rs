//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the run report
//! - Structured file-by-file outcome information

use crate::domain::{ExitStatus, FileOutcome, FileReport, PackageCandidate};
use crate::orchestrator::{RunReport, SearchReport};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Process-level status
    status: ExitStatus,
    /// Numeric exit code
    exit_code: u8,
    /// Target package
    package: &'a str,
    /// Whether this was a dry-run
    dry_run: bool,
    /// Version text written (or that would be written)
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    /// Feed search details
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<JsonSearch<'a>>,
    /// Per-file results
    files: Vec<JsonFile<'a>>,
    /// Summary statistics
    summary: JsonSummary,
    /// Fatal error that stopped the run
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON representation of the feed search
#[derive(Serialize)]
struct JsonSearch<'a> {
    /// Search keyword
    tag: &'a str,
    /// Feed URI
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    /// Time taken by the feed tool
    elapsed_ms: u128,
    /// Valid listing entries (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<&'a PackageCandidate>,
    /// Entries dropped for unreadable versions
    discarded: usize,
    /// Highest candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a PackageCandidate>,
}

/// JSON representation of a file result
#[derive(Serialize)]
struct JsonFile<'a> {
    /// Path to the project file
    path: String,
    /// What happened
    #[serde(flatten)]
    outcome: &'a FileOutcome,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Files updated (or that would be)
    updated: usize,
    /// Files without the reference
    unmatched: usize,
    /// Files that could not be read or written
    failed: usize,
}

impl JsonFormatter {
    fn search_to_json<'a>(&self, search: &'a SearchReport) -> JsonSearch<'a> {
        let candidates = if self.verbosity == Verbosity::Verbose {
            search.candidates.iter().collect()
        } else {
            Vec::new()
        };

        JsonSearch {
            tag: &search.tag,
            source: search.source.as_deref(),
            elapsed_ms: search.elapsed.as_millis(),
            candidates,
            discarded: search.discarded,
            selected: search.selected.as_ref(),
        }
    }

    fn file_to_json<'a>(file: &'a FileReport) -> JsonFile<'a> {
        JsonFile {
            path: file.path.display().to_string(),
            outcome: &file.outcome,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let batch = &report.batch;
        let status = report.exit_status();

        let output = JsonOutput {
            status,
            exit_code: status.code(),
            package: &report.package,
            dry_run: report.dry_run,
            version: report.replacement.as_deref(),
            search: report.search.as_ref().map(|s| self.search_to_json(s)),
            files: batch.files.iter().map(Self::file_to_json).collect(),
            summary: JsonSummary {
                updated: batch.changed_count(),
                unmatched: batch.unmatched().count(),
                failed: batch.failed_count(),
            },
            error: report.failure.as_ref().map(|e| e.to_string()),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_file(
        &self,
        _package: &str,
        file: &FileReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = Self::file_to_json(file);

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
