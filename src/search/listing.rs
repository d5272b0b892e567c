//! Feed listing parser
//!
//! The listing printed by the package-search tool is free-form. The only
//! structure relied on is "package name, whitespace, dotted number" appearing
//! somewhere in the text for each published package.

use crate::domain::PackageCandidate;
use crate::error::VersionError;
use regex::{CaptureMatches, Regex};

/// Extracts `(name, version)` candidates for one package from listing text
#[derive(Debug, Clone)]
pub struct ListingParser {
    pattern: Regex,
}

impl ListingParser {
    /// Build a parser for the given package name (matched case-insensitively)
    pub fn new(package: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"(?i)(?P<name>{})\s+(?P<version>\d+(?:\.\d+)+)",
            regex::escape(package)
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Every occurrence in the listing, including ones whose version fails to parse
    pub fn entries<'a>(&'a self, text: &'a str) -> Entries<'a> {
        Entries {
            matches: self.pattern.captures_iter(text),
        }
    }

    /// Occurrences with a valid version, in listing order
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PackageCandidate> + 'a {
        self.entries(text).filter_map(Result::ok)
    }
}

/// Single pass over the occurrences of a package in a listing
pub struct Entries<'a> {
    matches: CaptureMatches<'a, 'a>,
}

impl Iterator for Entries<'_> {
    type Item = Result<PackageCandidate, VersionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
        let version = caps.name("version").map(|m| m.as_str()).unwrap_or_default();
        Some(PackageCandidate::new(name, version))
    }
}
