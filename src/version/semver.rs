
use crate::version::number::VersionNumber;

/// Parse a version string leniently, normalizing partial versions.
///
/// Strips a leading `v` and pads partial versions with zeros.
///
/// Examples:
/// - "1" -> 1.0.0
/// - "1.2" -> 1.2.0
/// - "v1.2.3-rc.1" -> 1.2.3-rc.1
pub fn parse_version(version: &str) -> Option<VersionNumber> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let core_end = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(core_end);

    let normalized = match core.split('.').count() {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => version.to_string(),
    };
    VersionNumber::parse(&normalized).ok()
}

/// Greatest parseable version in the list
pub fn latest(available_versions: &[String]) -> Option<VersionNumber> {
    available_versions
        .iter()
        .filter_map(|v| parse_version(v))
        .max()
}

/// Calculate the latest patch version within the same major.minor
///
/// Returns the latest patch version if a newer patch exists,
/// or None if the current version is already the latest patch.
pub fn calculate_latest_patch(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    newer_than(current_version, available_versions, |current, v| {
        v.major() == current.major() && v.minor() == current.minor()
    })
}

/// Calculate the latest minor version within the same major
///
/// Returns the latest minor.patch version if a newer minor exists,
/// or None if the current version is already the latest minor.
pub fn calculate_latest_minor(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    newer_than(current_version, available_versions, |current, v| {
        v.major() == current.major()
    })
}

/// Calculate the latest major version
///
/// Returns the latest version if a newer major version exists,
/// or None if the current version is already the latest.
pub fn calculate_latest_major(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    newer_than(current_version, available_versions, |_, _| true)
}

fn newer_than(
    current_version: &str,
    available_versions: &[String],
    in_scope: impl Fn(&VersionNumber, &VersionNumber) -> bool,
) -> Option<String> {
    let current = parse_version(current_version)?;

    let latest = available_versions
        .iter()
        .filter_map(|v| parse_version(v))
        .filter(|v| in_scope(&current, v))
        .max()?;

    (latest > current).then(|| latest.to_string())
}

impl From<&semver::Version> for VersionNumber {
    fn from(version: &semver::Version) -> Self {
        let prerelease = (!version.pre.is_empty()).then(|| version.pre.to_string());
        let build = (!version.build.is_empty()).then(|| version.build.to_string());
        VersionNumber::from_parts(
            version.major,
            version.minor,
            version.patch,
            prerelease,
            build,
        )
    }
}

/// Fails for values that are not strict SemVer 2.0, such as numeric
/// prerelease identifiers with leading zeros.
impl TryFrom<&VersionNumber> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &VersionNumber) -> Result<Self, Self::Error> {
        semver::Version::parse(&version.to_string())
    }
}
