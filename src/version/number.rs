//! The semantic version number value type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::{Component, VersionError};
use crate::version::identifier::{Identifier, identifiers};
use crate::version::parser::parse_version_number;

/// An immutable semantic version number
///
/// ```text
/// 1.2.3-alpha.1+build.123
/// │ │ │ └──┬──┘ └───┬───┘
/// │ │ │    │        └── build (optional)
/// │ │ │    └── prerelease (optional)
/// └─┴─┴── major.minor.patch
/// ```
///
/// The prerelease and build suffixes are kept exactly as written so that
/// formatting a parsed value reproduces its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl VersionNumber {
    /// Create a release version with no prerelease or build suffix
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Create a release version from signed components, rejecting negatives
    pub fn try_new(major: i64, minor: i64, patch: i64) -> Result<Self, VersionError> {
        Ok(Self::new(
            non_negative(Component::Major, major)?,
            non_negative(Component::Minor, minor)?,
            non_negative(Component::Patch, patch)?,
        ))
    }

    /// Parse a version number such as `1.0.0-rc.1+build.5`
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parse_version_number(text)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease suffix as written, without the leading `-`
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// The build metadata as written, without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn prerelease_identifiers(&self) -> Vec<Identifier<'_>> {
        self.prerelease().map(|p| identifiers(p).collect()).unwrap_or_default()
    }

    pub fn build_identifiers(&self) -> Vec<Identifier<'_>> {
        self.build().map(|b| identifiers(b).collect()).unwrap_or_default()
    }

    /// Component-wise view for structured output
    pub fn summary(&self) -> VersionSummary {
        VersionSummary {
            version: self.to_string(),
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: self.prerelease.clone(),
            build: self.build.clone(),
            prerelease_identifiers: to_strings(self.prerelease_identifiers()),
            build_identifiers: to_strings(self.build_identifiers()),
        }
    }
}

fn to_strings(ids: Vec<Identifier<'_>>) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_string()).collect()
}

fn non_negative(component: Component, value: i64) -> Result<u64, VersionError> {
    u64::try_from(value).map_err(|_| VersionError::NegativeComponent { component, value })
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Structured rendering of a version number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build: Option<String>,
    pub prerelease_identifiers: Vec<String>,
    pub build_identifiers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn new_creates_release_without_suffixes() {
        let version = VersionNumber::new(1, 2, 3);

        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.prerelease(), None);
        assert_eq!(version.build(), None);
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[rstest]
    #[case(-1, 0, 0, Component::Major)]
    #[case(0, -1, 0, Component::Minor)]
    #[case(0, 0, -1, Component::Patch)]
    fn try_new_rejects_negative_components(
        #[case] major: i64,
        #[case] minor: i64,
        #[case] patch: i64,
        #[case] component: Component,
    ) {
        let error = VersionNumber::try_new(major, minor, patch).unwrap_err();

        assert_eq!(
            error,
            VersionError::NegativeComponent {
                component,
                value: -1
            }
        );
        assert!(error.is_argument_error());
    }

    #[test]
    fn try_new_accepts_zero() {
        assert_eq!(
            VersionNumber::try_new(0, 0, 0).unwrap(),
            VersionNumber::new(0, 0, 0)
        );
    }

    #[test]
    fn identifiers_are_split_on_demand() {
        let version = VersionNumber::parse("1.2.3-alpha.1+build.123").unwrap();

        assert_eq!(
            version.prerelease_identifiers(),
            vec![Identifier::AlphaNumeric("alpha"), Identifier::Numeric("1")]
        );
        assert_eq!(
            version.build_identifiers(),
            vec![Identifier::AlphaNumeric("build"), Identifier::Numeric("123")]
        );
        assert!(VersionNumber::new(1, 0, 0).build_identifiers().is_empty());
    }

    #[test]
    fn serializes_as_canonical_string() {
        let version = VersionNumber::parse("1.0.0-rc.1+sha.abc").unwrap();

        assert_eq!(serde_json::to_value(&version).unwrap(), json!("1.0.0-rc.1+sha.abc"));
    }

    #[test]
    fn deserialize_rejects_invalid_text() {
        let result = serde_json::from_value::<VersionNumber>(json!("1.0"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("'1.0'"));
    }

    #[test]
    fn summary_lists_components_and_identifiers() {
        let version = VersionNumber::parse("2.1.0-beta.2").unwrap();

        assert_eq!(
            serde_json::to_value(version.summary()).unwrap(),
            json!({
                "version": "2.1.0-beta.2",
                "major": 2,
                "minor": 1,
                "patch": 0,
                "prerelease": "beta.2",
                "build": null,
                "prereleaseIdentifiers": ["beta", "2"],
                "buildIdentifiers": []
            })
        );
    }
}
