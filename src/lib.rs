//! refup - PackageReference version updater library
//!
//! This library provides the core functionality for pointing every
//! `<PackageReference>` of one package in a source tree at a single version:
//! - Feed listing parsing and highest-version selection
//! - Project file discovery with directory exclusions
//! - In-place version token rewriting for SDK-style and classic projects

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod search;
