//! Resolving the newest published version of a package
//!
//! This module provides:
//! - Feed access through the external search tool
//! - Listing parsing into package candidates
//! - Highest-version selection

mod feed;
mod listing;
mod selector;

pub use feed::{NugetFeed, PackageFeed, DEFAULT_FEED_TOOL};
pub use listing::{Entries, ListingParser};
pub use selector::select_highest;
