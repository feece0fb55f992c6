//! Version number grammar
//!
//! ```text
//! version    = major "." minor "." patch [ "-" prerelease ] [ "+" build ]
//! major      = "0" | [1-9][0-9]*           ; likewise minor and patch
//! prerelease = identifier ( "." identifier )*
//! build      = identifier ( "." identifier )*
//! identifier = [0-9A-Za-z-]+
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::version::error::{Component, VersionError};
use crate::version::number::VersionNumber;

/// Anchored at both ends, so no partial match is ever accepted.
/// `[0-9]` rather than `\d`, which would admit non-ASCII digits. Leading
/// zeros in major, minor and patch would not survive formatting.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
        r"(?:-(?P<prerelease>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    ))
    .expect("version grammar is a valid regex")
});

pub(crate) fn parse_version_number(text: &str) -> Result<VersionNumber, VersionError> {
    if text.is_empty() {
        return Err(VersionError::EmptyInput);
    }

    let Some(caps) = VERSION_RE.captures(text) else {
        debug!("Rejected version number '{}'", text);
        return Err(VersionError::InvalidFormat {
            input: text.to_string(),
        });
    };

    let version = VersionNumber::from_parts(
        numeric_component(&caps, Component::Major, text)?,
        numeric_component(&caps, Component::Minor, text)?,
        numeric_component(&caps, Component::Patch, text)?,
        caps.name("prerelease").map(|m| m.as_str().to_string()),
        caps.name("build").map(|m| m.as_str().to_string()),
    );

    trace!("Parsed version number '{}'", version);
    Ok(version)
}

fn numeric_component(
    caps: &Captures<'_>,
    component: Component,
    text: &str,
) -> Result<u64, VersionError> {
    caps[component.as_str()]
        .parse::<u64>()
        .map_err(|_| VersionError::ComponentOverflow {
            component,
            input: text.to_string(),
        })
}
