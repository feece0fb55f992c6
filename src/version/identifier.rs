//! Dot-separated identifiers of the prerelease and build suffixes

use std::cmp::Ordering;

/// One identifier of a prerelease or build suffix
///
/// An identifier made only of ASCII digits is numeric and compares by value.
/// Anything else, including mixed tokens like `1a`, compares ordinally.
/// Numeric identifiers sort before all others, which keeps the order
/// transitive (`9 < 10 < 1a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    Numeric(&'a str),
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn new(text: &'a str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(text)
        } else {
            Identifier::AlphaNumeric(text)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(text) | Identifier::AlphaNumeric(text) => text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Precedence of two identifiers. Leading zeros do not change the value
    /// of a numeric identifier, so this is coarser than equality.
    pub fn precedence(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_numeric(a, b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

/// Split a suffix into its identifiers
pub fn identifiers(suffix: &str) -> impl Iterator<Item = Identifier<'_>> {
    suffix.split('.').map(Identifier::new)
}

/// Compare two dot-separated identifier sequences position by position.
///
/// The first differing position decides. When one sequence is a prefix of
/// the other, the shorter one sorts first.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let mut left = identifiers(a);
    let mut right = identifiers(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.precedence(&r) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
        }
    }
}

/// Compare two digit strings by integer value, without an upper bound.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
