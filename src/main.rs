//! refup - PackageReference version updater CLI tool
//!
//! Finds the newest version of a package on a NuGet feed (or takes an explicit
//! one) and rewrites the matching PackageReference in every project file under
//! a directory.

use clap::Parser;
use refup::cli::CliArgs;
use refup::config::Settings;
use refup::domain::ExitStatus;
use refup::orchestrator::Orchestrator;
use refup::output::create_formatter;
use refup::search::NugetFeed;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through the same path
            let _ = e.print();
            return if e.use_stderr() {
                ExitStatus::ArgumentError.into()
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::ArgumentError.into()
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let (settings, settings_path) = match Settings::discover(args.config.as_deref(), &cwd) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitStatus::ArgumentError.into());
        }
    };

    let request = match args.into_request(&settings) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitStatus::ArgumentError.into());
        }
    };

    // Print version info in verbose mode
    if args.verbose {
        eprintln!("refup v{}", env!("CARGO_PKG_VERSION"));
        if let Some(path) = &settings_path {
            eprintln!("Settings: {}", path.display());
        }
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let output_config = args.output_config();
    let feed = NugetFeed::new(args.feed_tool(&settings));

    // Create and run the orchestrator
    let orchestrator =
        Orchestrator::new(request, feed).with_progress(output_config.show_progress());
    let report = orchestrator.run();

    // Output results
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(report.exit_status().into())
}
