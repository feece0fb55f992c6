//! Semantic version numbers
//!
//! This module provides the version number value type together with its
//! parser, precedence rules and formatting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │   Parser    │────▶│ VersionNumber │────▶│  Display    │
//! │ (grammar)   │     │  (immutable)  │     │ (canonical) │
//! └─────────────┘     └───────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Compare   │────▶│ Identifier  │
//!                     │(precedence) │     │ (per token) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`number`]: The `VersionNumber` value type
//! - [`parser`]: Anchored grammar match
//! - [`compare`]: Precedence rules and checked comparison
//! - [`identifier`]: Prerelease and build identifiers
//! - [`error`]: Argument and format errors
//! - [`semver`]: Version selection helpers and `semver` crate interop
//! - [`stamp`]: Version stamps for labelling builds

pub mod compare;
pub mod error;
pub mod identifier;
pub mod number;
pub mod parser;
pub mod semver;
pub mod stamp;

pub use error::{Component, VersionError};
pub use identifier::Identifier;
pub use number::{VersionNumber, VersionSummary};
pub use stamp::VersionStamp;
