//! Project file discovery and PackageReference rewriting
//!
//! This module provides functionality to:
//! - Locate project files under a root with an optional exclusion list
//! - Find a package's PackageReference in a project file
//! - Splice in a new version and write the file back (or report it in a dry run)

mod locator;
mod reference;
mod writer;

pub use locator::{ManifestLocator, ManifestScan};
pub use reference::{rewrite, ReferenceRewriter};
pub use writer::{read_manifest, write_manifest, ManifestWriter};
