//! Core domain models for refup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dotted numeric versions and their ordering
//! - Package candidates parsed from a feed listing
//! - Located PackageReference declarations
//! - Per-file outcomes and process exit status

mod candidate;
mod outcome;
mod reference;
mod version;

pub use candidate::PackageCandidate;
pub use outcome::{BatchReport, ExitStatus, FileOutcome, FileReport};
pub use reference::{ReferenceMatch, ShapeKind};
pub use version::DottedVersion;
