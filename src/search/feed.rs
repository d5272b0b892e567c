//! Package feed listing via an external search tool
//!
//! This module provides:
//! - The `PackageFeed` seam used by the orchestrator
//! - `NugetFeed`, which runs `nuget list <tag> [-Source <uri>]` and returns its stdout

use crate::error::FeedError;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Default search executable
pub const DEFAULT_FEED_TOOL: &str = "nuget";

/// Source of raw feed listings
pub trait PackageFeed {
    /// Return the raw listing text for a search tag, optionally from a specific source
    fn fetch_listing(&self, tag: &str, source: Option<&str>) -> Result<String, FeedError>;
}

/// Feed backed by the NuGet command-line client
#[derive(Debug, Clone)]
pub struct NugetFeed {
    /// Executable to run
    tool: PathBuf,
}

impl NugetFeed {
    /// Create a feed that runs the given executable
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Arguments passed to the tool for a search
    fn list_args(tag: &str, source: Option<&str>) -> Vec<String> {
        let mut args = vec!["list".to_string(), tag.to_string()];
        if let Some(source) = source {
            args.push("-Source".to_string());
            args.push(source.to_string());
        }
        args
    }

    /// Run the tool and capture both output streams to completion
    fn run_command(&self, args: &[String]) -> std::io::Result<Output> {
        Command::new(&self.tool).args(args).output()
    }
}

impl Default for NugetFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_TOOL)
    }
}

impl PackageFeed for NugetFeed {
    fn fetch_listing(&self, tag: &str, source: Option<&str>) -> Result<String, FeedError> {
        let tool = self.tool.display().to_string();
        let args = Self::list_args(tag, source);

        let output = self
            .run_command(&args)
            .map_err(|source| FeedError::Spawn {
                tool: tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FeedError::NonZeroExit {
                tool,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
