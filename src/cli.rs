//! Command-line commands
//!
//! Each command turns its arguments into the text printed on stdout, so the
//! binary only parses arguments and prints.

use std::cmp::Ordering;

use clap::{Subcommand, ValueEnum};
use tracing::info;

use crate::version::semver::{
    calculate_latest_major, calculate_latest_minor, calculate_latest_patch, latest,
};
use crate::version::{VersionError, VersionNumber, VersionStamp};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a version number and print its components
    Parse {
        version: String,
        /// Print the components as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two version numbers
    Compare { left: String, right: String },
    /// Sort version numbers by precedence
    Sort {
        /// Print the highest version first
        #[arg(long)]
        reverse: bool,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Find the latest version, optionally relative to a current version
    Latest {
        #[arg(long)]
        current: Option<String>,
        #[arg(long, value_enum, default_value_t = Scope::Major)]
        scope: Scope,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print the version this build is stamped with
    Stamp,
}

/// How far an update may move from the current version
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Patch,
    Minor,
    Major,
}

/// Run a command and return its output
pub fn run(command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Parse { version, json } => parse(version, *json),
        Command::Compare { left, right } => Ok(compare(left, right)?),
        Command::Sort { reverse, versions } => Ok(sort(versions, *reverse)?),
        Command::Latest {
            current,
            scope,
            versions,
        } => Ok(find_latest(current.as_deref(), *scope, versions)),
        Command::Stamp => Ok(VersionStamp::current().to_string()),
    }
}

fn parse(text: &str, json: bool) -> anyhow::Result<String> {
    let version = VersionNumber::parse(text)?;
    let summary = version.summary();

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut lines = vec![
        format!("major: {}", summary.major),
        format!("minor: {}", summary.minor),
        format!("patch: {}", summary.patch),
    ];
    if let Some(prerelease) = &summary.prerelease {
        lines.push(format!("prerelease: {}", prerelease));
    }
    if let Some(build) = &summary.build {
        lines.push(format!("build: {}", build));
    }
    Ok(lines.join("\n"))
}

fn compare(left: &str, right: &str) -> Result<String, VersionError> {
    let left = VersionNumber::parse(left)?;
    let right = VersionNumber::parse(right)?;

    let symbol = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(format!("{} {} {}", left, symbol, right))
}

fn sort(versions: &[String], reverse: bool) -> Result<String, VersionError> {
    let mut parsed = versions
        .iter()
        .map(|v| VersionNumber::parse(v))
        .collect::<Result<Vec<_>, _>>()?;
    parsed.sort();
    if reverse {
        parsed.reverse();
    }
    info!("Sorted {} version numbers", parsed.len());

    Ok(parsed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn find_latest(current: Option<&str>, scope: Scope, versions: &[String]) -> String {
    let found = match current {
        None => latest(versions).map(|v| v.to_string()),
        Some(current) => match scope {
            Scope::Patch => calculate_latest_patch(current, versions),
            Scope::Minor => calculate_latest_minor(current, versions),
            Scope::Major => calculate_latest_major(current, versions),
        },
    };
    found.unwrap_or_default()
}
