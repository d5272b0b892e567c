//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per project file, in processing order
//! - No-match notices deferred until after the batch
//! - Search and discovery details in verbose mode
//! - A closing summary line

use crate::domain::{FileOutcome, FileReport};
use crate::manifest::ManifestScan;
use crate::orchestrator::{RunReport, SearchReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Write the feed search details
    fn format_search(&self, search: &SearchReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let source = search.source.as_deref().unwrap_or("default source");
        writeln!(writer, "Searching for '{}' ({})", search.tag, source)?;
        writeln!(writer, "Listing received in {:.2?}", search.elapsed)?;

        for line in search.listing.lines().filter(|l| !l.trim().is_empty()) {
            if self.color {
                writeln!(writer, "  {}", line.dimmed())?;
            } else {
                writeln!(writer, "  {}", line)?;
            }
        }

        writeln!(writer, "Candidates ({}):", search.candidates.len())?;
        for candidate in &search.candidates {
            writeln!(writer, "  {}", candidate)?;
        }
        if search.discarded > 0 {
            writeln!(
                writer,
                "Discarded {} listing entries with unreadable versions",
                search.discarded
            )?;
        }
        if let Some(selected) = &search.selected {
            if self.color {
                writeln!(writer, "Selected {}", selected.to_string().bold())?;
            } else {
                writeln!(writer, "Selected {}", selected)?;
            }
        }
        Ok(())
    }

    /// Write the project file discovery details
    fn format_scan(&self, scan: &ManifestScan, writer: &mut dyn Write) -> std::io::Result<()> {
        write!(
            writer,
            "Scanning {} for {}",
            scan.root.display(),
            scan.pattern
        )?;
        if scan.adjusted {
            write!(writer, " (resolved against the current directory)")?;
        }
        writeln!(writer)?;

        writeln!(writer, "Found {} project files:", scan.files.len())?;
        for file in &scan.files {
            writeln!(writer, "  {}", file.display())?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write the notice for a file without a matching declaration
    fn format_no_match(&self, file: &FileReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let line = format!(
            "No matching reference found in {}.  File not changed.",
            file.path.display()
        );
        if self.color {
            writeln!(writer, "{}", line.yellow())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Write the closing summary line
    fn format_summary(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let batch = &report.batch;
        let changed = batch.changed_count();
        let unmatched = batch.unmatched().count();
        let failed = batch.failed_count();
        let verb = if self.dry_run {
            "would be updated"
        } else {
            "updated"
        };

        if self.color {
            writeln!(
                writer,
                "{} {}, {} without reference, {} failed",
                changed.to_string().green().bold(),
                verb,
                unmatched.to_string().yellow(),
                if failed > 0 {
                    failed.to_string().red().bold()
                } else {
                    failed.to_string().normal()
                }
            )
        } else {
            writeln!(
                writer,
                "{} {}, {} without reference, {} failed",
                changed, verb, unmatched, failed
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.is_verbose() {
            if let Some(search) = &report.search {
                self.format_search(search, writer)?;
            }
            if let Some(replacement) = &report.replacement {
                writeln!(writer, "Using version {}", replacement)?;
                writeln!(writer)?;
            }
            if let Some(scan) = &report.scan {
                self.format_scan(scan, writer)?;
            }
        }

        for file in &report.batch.files {
            self.format_file(&report.package, file, writer)?;
        }

        for file in report.batch.unmatched() {
            self.format_no_match(file, writer)?;
        }

        if let Some(failure) = &report.failure {
            if self.color {
                writeln!(writer, "{}", failure.to_string().red().bold())?;
            } else {
                writeln!(writer, "{}", failure)?;
            }
            return Ok(());
        }

        if !self.is_quiet() {
            writeln!(writer)?;
            self.format_summary(report, writer)?;
        }

        Ok(())
    }

    fn format_file(
        &self,
        package: &str,
        file: &FileReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let path = file.path.display();

        match &file.outcome {
            FileOutcome::Updated { shape, from, to } => {
                if self.is_quiet() {
                    return Ok(());
                }
                if self.color {
                    writeln!(
                        writer,
                        "Updating {} ({}) PackageReference of {} from {} to {}.",
                        path.to_string().bold(),
                        shape,
                        package,
                        from.dimmed(),
                        to.green().bold()
                    )
                } else {
                    writeln!(
                        writer,
                        "Updating {} ({}) PackageReference of {} from {} to {}.",
                        path, shape, package, from, to
                    )
                }
            }
            FileOutcome::WouldUpdate { shape, from, to } => {
                if self.is_quiet() {
                    return Ok(());
                }
                let prefix = if self.color {
                    "Dry Run:".cyan().to_string()
                } else {
                    "Dry Run:".to_string()
                };
                writeln!(
                    writer,
                    "{} Would have updated {} ({}) PackageReference of {} from {} to {}.  File not changed.",
                    prefix, path, shape, package, from, to
                )
            }
            FileOutcome::WriteFailed { shape, message } => {
                let line = format!(
                    "Failed to update {} ({}).  File locked or read-only?",
                    path, shape
                );
                if self.color {
                    writeln!(writer, "{}", line.red())?;
                } else {
                    writeln!(writer, "{}", line)?;
                }
                if self.is_verbose() {
                    writeln!(writer, "  {}", message)?;
                }
                Ok(())
            }
            FileOutcome::ReadFailed { message } => {
                let line = format!("Error while processing {}: {}", path, message);
                if self.color {
                    writeln!(writer, "{}", line.red())
                } else {
                    writeln!(writer, "{}", line)
                }
            }
            // reported after the whole batch
            FileOutcome::NoMatch => Ok(()),
        }
    }
}
