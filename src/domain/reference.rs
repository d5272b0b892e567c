//! Located dependency-reference declarations

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The structural form a PackageReference declaration takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// `<PackageReference Include="x"><Version>v</Version></PackageReference>`
    Classic,
    /// `<PackageReference Include="x" Version="v" />`
    Sdk,
}

impl ShapeKind {
    /// Short label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Classic => "classic",
            ShapeKind::Sdk => "sdk",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The version token of one matched declaration
///
/// The span covers only the version token (range delimiters included) and
/// always lies within the text it was matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Which declaration form matched
    pub shape: ShapeKind,
    /// Byte offset where the version token starts
    pub version_start: usize,
    /// Byte length of the version token
    pub version_len: usize,
    /// The version token as it appeared
    pub original_version: String,
}

impl ReferenceMatch {
    /// Byte range of the version token
    pub fn span(&self) -> Range<usize> {
        self.version_start..self.version_start + self.version_len
    }
}
