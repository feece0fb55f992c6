//! Version stamps for labelling a build with its semantic version

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// The semantic version a build or product is labelled with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionStamp {
    version: VersionNumber,
}

impl VersionStamp {
    pub fn new(version: &str) -> Result<Self, VersionError> {
        if version.is_empty() {
            return Err(VersionError::EmptyInput);
        }
        Ok(Self {
            version: VersionNumber::parse(version)?,
        })
    }

    /// Stamp of this crate's package version
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
            .expect("CARGO_PKG_VERSION is always a valid semantic version")
    }

    pub fn version(&self) -> &VersionNumber {
        &self.version
    }
}

impl From<VersionNumber> for VersionStamp {
    fn from(version: VersionNumber) -> Self {
        Self { version }
    }
}

impl std::fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.version.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_parses_version_number() {
        let stamp = VersionStamp::new("1.0.0").unwrap();

        assert_eq!(stamp.version(), &VersionNumber::new(1, 0, 0));
    }

    #[test]
    fn new_rejects_empty_text() {
        assert_eq!(VersionStamp::new(""), Err(VersionError::EmptyInput));
    }

    #[test]
    fn new_rejects_malformed_text() {
        let error = VersionStamp::new("1.0").unwrap_err();

        assert!(error.is_format_error());
    }

    #[test]
    fn current_matches_package_version() {
        let stamp = VersionStamp::current();

        assert_eq!(stamp.to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn from_pre_parsed_version() {
        let version = VersionNumber::parse("2.0.0-rc.1+build.9").unwrap();

        let stamp = VersionStamp::from(version.clone());

        assert_eq!(stamp.version(), &version);
        assert_eq!(stamp.to_string(), "2.0.0-rc.1+build.9");
    }
}
