//! Precedence of version numbers
//!
//! Versions are ordered by major, minor and patch, then by prerelease, then
//! by build metadata. A prerelease lowers precedence: `1.0.0-rc.1 < 1.0.0`.
//! Build metadata raises it: `1.0.0 < 1.0.0+build.1`. Two suffixes of the
//! same kind are compared identifier by identifier.

use std::any::Any;
use std::cmp::Ordering;

use crate::version::error::VersionError;
use crate::version::identifier::compare_identifiers;
use crate::version::number::VersionNumber;

impl VersionNumber {
    /// Compare against a version that may be missing.
    ///
    /// A missing operand is an error, never the lowest version.
    pub fn compare_to(&self, other: Option<&VersionNumber>) -> Result<Ordering, VersionError> {
        other
            .map(|other| self.cmp(other))
            .ok_or(VersionError::MissingOperand)
    }

    /// Compare against a type-erased value. Only another `VersionNumber`
    /// can be compared; anything else is an argument error.
    ///
    /// A `Box<dyn Any>` is looked through, so `&boxed` and `&*boxed` behave
    /// the same.
    pub fn compare_to_any(&self, other: &dyn Any) -> Result<Ordering, VersionError> {
        let other = match other.downcast_ref::<Box<dyn Any>>() {
            Some(boxed) => &**boxed,
            None => other,
        };

        other
            .downcast_ref::<VersionNumber>()
            .map(|other| self.cmp(other))
            .ok_or(VersionError::NotAVersion)
    }

    /// Precedence alone, without the final tie-break that keeps `Ord`
    /// consistent with equality. `1.0.0-rc.01` and `1.0.0-rc.1` have equal
    /// precedence but are different values.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| compare_prerelease(self.prerelease(), other.prerelease()))
            .then_with(|| compare_build(self.build(), other.build()))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }

        self.cmp_precedence(other)
            .then_with(|| self.prerelease().cmp(&other.prerelease()))
            .then_with(|| self.build().cmp(&other.build()))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A version with a prerelease comes before the same version without one.
fn compare_prerelease(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => compare_identifiers(a, b),
    }
}

/// A version with build metadata comes after the same version without it.
fn compare_build(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (Some(a), Some(b)) => compare_identifiers(a, b),
    }
}
