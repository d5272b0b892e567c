//! PackageReference location and version splicing
//!
//! Handles:
//! - SDK-style projects: `<PackageReference Include="X" Version="1.0.0" />`
//! - Classic projects: `<PackageReference Include="X"><Version>1.0.0</Version></PackageReference>`
//! - Range and wildcard versions: `[1.0,2.0)`, `1.0.*`
//!
//! Only the version token is ever replaced; the rest of the file is left as is.

use crate::domain::{ReferenceMatch, ShapeKind};
use regex::Regex;

/// A version token, optionally wrapped in range brackets
const VERSION_TOKEN: &str = r"[\[(]?[\d.,*]+[\])]?";

/// Finds the PackageReference for one package in project file text
#[derive(Debug, Clone)]
pub struct ReferenceRewriter {
    sdk: Regex,
    classic: Regex,
}

impl ReferenceRewriter {
    /// Build the declaration patterns for a package name
    pub fn new(package: &str) -> Result<Self, regex::Error> {
        let name = regex::escape(package);
        let sdk = format!(
            r#"<PackageReference\s+Include="{name}"\s+Version="(?P<version>{VERSION_TOKEN})"\s*/>"#
        );
        let classic = format!(
            r#"<PackageReference\s+Include="{name}"\s*>\s*<Version>(?P<version>{VERSION_TOKEN})</Version>\s*</PackageReference>"#
        );

        Ok(Self {
            sdk: Regex::new(&sdk)?,
            classic: Regex::new(&classic)?,
        })
    }

    /// Locate the declaration, trying the SDK form first
    pub fn find(&self, text: &str) -> Option<ReferenceMatch> {
        [(ShapeKind::Sdk, &self.sdk), (ShapeKind::Classic, &self.classic)]
            .into_iter()
            .find_map(|(shape, pattern)| {
                let version = pattern.captures(text)?.name("version")?;
                Some(ReferenceMatch {
                    shape,
                    version_start: version.start(),
                    version_len: version.len(),
                    original_version: version.as_str().to_string(),
                })
            })
    }
}

/// Replace the matched version token with `new_version`
///
/// `found` must have been produced by [`ReferenceRewriter::find`] on `text`.
pub fn rewrite(text: &str, found: &ReferenceMatch, new_version: &str) -> String {
    let mut updated = String::with_capacity(text.len() + new_version.len());
    updated.push_str(&text[..found.version_start]);
    updated.push_str(new_version);
    updated.push_str(&text[found.span().end..]);
    updated
}
