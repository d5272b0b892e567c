//! A package/version pair found in a feed listing

use super::DottedVersion;
use crate::error::VersionError;
use serde::Serialize;
use std::fmt;

/// A listing entry whose version parsed successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCandidate {
    /// Package name as it appears in the listing
    name: String,
    /// Version text exactly as it appears in the listing
    version_text: String,
    /// Parsed form of `version_text`
    #[serde(skip)]
    version: DottedVersion,
}

impl PackageCandidate {
    /// Creates a candidate, rejecting version text that does not parse
    pub fn new(
        name: impl Into<String>,
        version_text: impl Into<String>,
    ) -> Result<Self, VersionError> {
        let version_text = version_text.into();
        let version = DottedVersion::parse(&version_text)?;
        Ok(Self {
            name: name.into(),
            version_text,
            version,
        })
    }

    /// Package name as listed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version text as listed
    pub fn version_text(&self) -> &str {
        &self.version_text
    }

    /// Ordered version
    pub fn version(&self) -> &DottedVersion {
        &self.version
    }
}

impl fmt::Display for PackageCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version_text)
    }
}
