//! Module registry synchronizer library.
//!
//! This crate reads a JSON registry mapping module names to git
//! repository URLs and brings a local checkout of each module up to date by:
//! - Cloning modules whose directory does not exist yet
//! - Fetching and pulling modules that are already checked out
//! - Reporting per-module outcomes and a final summary

pub mod config;
pub mod constants;
pub mod git;
pub mod output;
pub mod registry;
pub mod sync;
