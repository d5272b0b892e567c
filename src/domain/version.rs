//! Dotted numeric version ordering
//!
//! A version such as `1.2.0.1` is held as its integer components. Comparison
//! walks the components left to right, padding the shorter side with zeros,
//! so `1.2` and `1.2.0` are equal and `1.2.0 < 1.2.0.1 < 1.3`.

use crate::error::VersionError;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparable form of a dotted numeric version string
#[derive(Debug, Clone)]
pub struct DottedVersion {
    components: Vec<u64>,
}

impl DottedVersion {
    /// Parse one or more dot-separated non-negative integers
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Err(VersionError::invalid(text));
        }

        let components = text
            .split('.')
            .map(|group| {
                // u64::from_str accepts a leading '+'
                if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(VersionError::invalid(text));
                }
                group.parse::<u64>().map_err(|_| VersionError::invalid(text))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    /// The integer components as written
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for DottedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DottedVersion {}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl Serialize for DottedVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> DottedVersion {
        DottedVersion::parse(text).unwrap()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(v("1").components(), &[1]);
        assert_eq!(v("1.10.0").components(), &[1, 10, 0]);
        assert_eq!(v("4.0.30319.42").components(), &[4, 0, 30319, 42]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DottedVersion::parse("").is_err());
        assert!(DottedVersion::parse("1.").is_err());
        assert!(DottedVersion::parse(".1").is_err());
        assert!(DottedVersion::parse("1..2").is_err());
        assert!(DottedVersion::parse("1.2-beta").is_err());
        assert!(DottedVersion::parse("v1.2").is_err());
        assert!(DottedVersion::parse("1.+2").is_err());
        assert!(DottedVersion::parse("1.-2").is_err());
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        let err = DottedVersion::parse("1.99999999999999999999999").unwrap_err();
        assert_eq!(err, VersionError::invalid("1.99999999999999999999999"));
    }

    #[test]
    fn test_numeric_not_lexical() {
        assert!(v("1.10.0") > v("1.2.0"));
        assert!(v("10.0") > v("9.9.9"));
    }

    #[test]
    fn test_trailing_zero_padding() {
        assert_eq!(v("1.2"), v("1.2.0"));
        assert_eq!(v("1.2.0.0").cmp(&v("1.2")), Ordering::Equal);
        assert!(v("1.2.0") < v("1.2.0.1"));
        assert!(v("1.2.0.1") < v("1.3"));
    }

    #[test]
    fn test_total_order_properties() {
        let samples = ["0.9", "1", "1.0.1", "1.2", "1.2.0", "1.10", "2.0.0.1"];
        let parsed: Vec<_> = samples.iter().map(|s| v(s)).collect();

        for a in &parsed {
            for b in &parsed {
                // antisymmetry
                if a <= b && b <= a {
                    assert_eq!(a, b);
                }
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                for c in &parsed {
                    if a <= b && b <= c {
                        assert!(a <= c, "{} <= {} <= {}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(v("1.10.0").to_string(), "1.10.0");
        assert_eq!(v("007.1").to_string(), "7.1");
    }

    #[test]
    fn test_from_str() {
        let parsed: DottedVersion = "3.1.4".parse().unwrap();
        assert_eq!(parsed, v("3.1.4"));
    }
}
