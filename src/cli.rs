//! CLI argument parsing module for refup

use crate::config::Settings;
use crate::error::ConfigError;
use crate::orchestrator::{UpdateRequest, VersionMode};
use crate::output::OutputConfig;
use crate::search::DEFAULT_FEED_TOOL;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  refup -p Contoso.Logging -c /src/*.csproj
  refup -p Contoso.Logging -t contoso -s https://feed.example/v3/index.json -c /src/*.csproj -x
  refup -p Contoso.Logging -e [2.1.0] -c /src/*.csproj --exclude /src/legacy -d";

/// PackageReference version updater for project files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "refup",
    version,
    about = "Point PackageReference declarations at the newest (or a given) package version",
    after_help = AFTER_HELP
)]
pub struct CliArgs {
    /// Package whose references are updated
    #[arg(short, long)]
    pub package: String,

    /// Search keyword for the feed listing (default: the package name)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Feed URI to search
    #[arg(short, long)]
    pub source: Option<String>,

    /// Root directory and filename pattern of the project files, e.g. /src/*.csproj
    #[arg(short, long = "csproj", value_name = "FILESPEC")]
    pub csproj: String,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short, long)]
    pub dry_run: bool,

    /// Pin to the exact version found, written as [version]
    #[arg(short = 'x', long)]
    pub exact: bool,

    /// Use this version instead of searching the feed
    #[arg(short, long, value_name = "VERSION")]
    pub explicit: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Skip this directory and everything below it (absolute path, can be specified multiple times)
    #[arg(long, value_name = "DIR", action = ArgAction::Append)]
    pub exclude: Vec<PathBuf>,

    /// Treat project files without the reference as failures
    #[arg(long)]
    pub strict: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Package search executable
    #[arg(long, value_name = "PATH")]
    pub feed_tool: Option<PathBuf>,

    /// Settings file (default: refup.toml in the current directory, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Combine the arguments with file settings into a validated request
    pub fn into_request(&self, settings: &Settings) -> Result<UpdateRequest, ConfigError> {
        let package = non_empty(&self.package, "--package")?;
        let filespec = non_empty(&self.csproj, "--csproj")?;

        let mode = match &self.explicit {
            Some(version) => VersionMode::Explicit {
                version: non_empty(version, "--explicit")?,
            },
            None => VersionMode::Search {
                tag: self
                    .tag
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .unwrap_or(package.as_str())
                    .to_string(),
                source: self
                    .source
                    .clone()
                    .or_else(|| settings.source.clone())
                    .filter(|s| !s.trim().is_empty()),
                exact: self.exact,
            },
        };

        let excludes: Vec<PathBuf> = settings
            .exclude
            .iter()
            .chain(&self.exclude)
            .cloned()
            .collect();
        if let Some(relative) = excludes.iter().find(|p| !p.is_absolute()) {
            return Err(ConfigError::RelativeExclude {
                path: relative.clone(),
            });
        }

        Ok(UpdateRequest {
            package,
            mode,
            filespec,
            excludes,
            dry_run: self.dry_run,
            strict: self.strict,
        })
    }

    /// Search executable, from the command line, the settings file, or the default
    pub fn feed_tool(&self, settings: &Settings) -> PathBuf {
        self.feed_tool
            .clone()
            .or_else(|| settings.feed_tool.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FEED_TOOL))
    }

    /// Output options selected on the command line
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.json, self.verbose, self.quiet, self.dry_run)
    }
}

fn non_empty(value: &str, option: &'static str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingValue { option });
    }
    Ok(value.to_string())
}
