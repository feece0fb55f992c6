//! Semantic version numbers with build-metadata precedence, version stamps
//! and process-monitor diagnostics.
//!
//! # Modules
//!
//! - [`version`]: The version number type, its parser and precedence rules
//! - [`diagnostics`]: Process monitor device output and its `tracing` adapter
//! - [`config`]: JSON configuration and data directories
//! - [`logging`]: Tracing subscriber setup
//! - [`cli`]: Command-line commands

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod version;

pub use version::{VersionError, VersionNumber, VersionStamp};
