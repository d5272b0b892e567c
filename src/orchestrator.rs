//! Update orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: resolve version → locate project files → rewrite each
//! - Explicit-version and feed-search modes
//! - Dry-run mode support
//! - Per-file error handling with continuation through the batch

use crate::domain::{BatchReport, ExitStatus, PackageCandidate};
use crate::error::RunError;
use crate::manifest::{ManifestLocator, ManifestScan, ManifestWriter, ReferenceRewriter};
use crate::progress::Progress;
use crate::search::{select_highest, ListingParser, PackageFeed};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How the replacement version is obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionMode {
    /// Use the given text as is
    Explicit { version: String },
    /// Query the feed and take the highest listed version
    Search {
        /// Search keyword passed to the feed tool
        tag: String,
        /// Feed URI, if not the tool's default
        source: Option<String>,
        /// Wrap the chosen version as `[version]`
        exact: bool,
    },
}

/// Everything one run needs, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Package whose references are rewritten
    pub package: String,
    /// Version resolution mode
    pub mode: VersionMode,
    /// Root directory plus filename pattern of the project files
    pub filespec: String,
    /// Absolute directories skipped during discovery
    pub excludes: Vec<PathBuf>,
    /// Report changes without writing
    pub dry_run: bool,
    /// Treat project files without the reference as failures
    pub strict: bool,
}

/// Details of a feed search
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Search keyword
    pub tag: String,
    /// Feed URI
    pub source: Option<String>,
    /// Time taken by the feed tool
    pub elapsed: Duration,
    /// Raw listing text
    pub listing: String,
    /// Valid candidates in listing order
    pub candidates: Vec<PackageCandidate>,
    /// Listing entries dropped because their version did not parse
    pub discarded: usize,
    /// Highest candidate, if any
    pub selected: Option<PackageCandidate>,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct RunReport {
    /// Target package
    pub package: String,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Feed search details (search mode only)
    pub search: Option<SearchReport>,
    /// Version text spliced into project files
    pub replacement: Option<String>,
    /// Project file discovery result
    pub scan: Option<ManifestScan>,
    /// Per-file outcomes
    pub batch: BatchReport,
    /// Fatal condition that stopped the run early
    pub failure: Option<RunError>,
}

impl RunReport {
    fn new(request: &UpdateRequest) -> Self {
        Self {
            package: request.package.clone(),
            dry_run: request.dry_run,
            search: None,
            replacement: None,
            scan: None,
            batch: BatchReport::new(request.strict),
            failure: None,
        }
    }

    /// Process exit status for this run
    pub fn exit_status(&self) -> ExitStatus {
        match &self.failure {
            Some(failure) => failure.exit_status(),
            None => self.batch.exit_status(),
        }
    }
}

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator<F> {
    /// Validated request
    request: UpdateRequest,
    /// Source of feed listings
    feed: F,
    /// Whether to show a spinner during the feed query
    show_progress: bool,
}

impl<F: PackageFeed> Orchestrator<F> {
    /// Create a new orchestrator
    pub fn new(request: UpdateRequest, feed: F) -> Self {
        Self {
            request,
            feed,
            show_progress: false,
        }
    }

    /// Enable or disable the spinner shown while the feed is queried
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the update workflow
    pub fn run(&self) -> RunReport {
        let mut report = RunReport::new(&self.request);
        if let Err(e) = self.execute(&mut report) {
            report.failure = Some(e);
        }
        report
    }

    fn execute(&self, report: &mut RunReport) -> Result<(), RunError> {
        // Step 1: Resolve the replacement text
        let replacement = match &self.request.mode {
            VersionMode::Explicit { version } => version.clone(),
            VersionMode::Search { tag, source, exact } => {
                let selected = self.search(tag, source.as_deref(), report)?;
                if *exact {
                    format!("[{}]", selected.version_text())
                } else {
                    selected.version_text().to_string()
                }
            }
        };
        report.replacement = Some(replacement.clone());

        // Step 2: Locate project files
        let rewriter = ReferenceRewriter::new(&self.request.package)?;
        let scan = ManifestLocator::new(&self.request.excludes).locate(&self.request.filespec)?;
        let files = scan.files.clone();
        report.scan = Some(scan);

        if files.is_empty() {
            return Err(RunError::NoManifestsFound {
                spec: self.request.filespec.clone(),
            });
        }

        // Step 3: Rewrite each file independently
        let writer = ManifestWriter::new(self.request.dry_run);
        for path in &files {
            report.batch.push(writer.apply(path, &rewriter, &replacement));
        }

        Ok(())
    }

    /// Query the feed and pick the highest listed version
    fn search(
        &self,
        tag: &str,
        source: Option<&str>,
        report: &mut RunReport,
    ) -> Result<PackageCandidate, RunError> {
        let parser = ListingParser::new(&self.request.package)?;

        let mut progress = Progress::new(self.show_progress);
        progress.spinner(&format!("Searching for {}...", tag));
        let started = Instant::now();
        let listing = self.feed.fetch_listing(tag, source);
        let elapsed = started.elapsed();
        progress.finish_and_clear();
        let listing = listing?;

        let mut candidates = Vec::new();
        let mut discarded = 0;
        for entry in parser.entries(&listing) {
            match entry {
                Ok(candidate) => candidates.push(candidate),
                Err(_) => discarded += 1,
            }
        }

        let selected = select_highest(candidates.iter().cloned()).ok();
        report.search = Some(SearchReport {
            tag: tag.to_string(),
            source: source.map(str::to_string),
            elapsed,
            listing: listing.clone(),
            candidates,
            discarded,
            selected: selected.clone(),
        });

        selected.ok_or_else(|| RunError::NoPackagesFound {
            package: self.request.package.clone(),
        })
    }
}
