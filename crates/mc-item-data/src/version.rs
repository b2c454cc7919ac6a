//! Game versions and their ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Prefix used for Bedrock version strings, e.g. `"bedrock_1.16.220"`.
const BEDROCK_PREFIX: &str = "bedrock_";

/// Client platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edition {
    Java,
    Bedrock,
}

/// A released game version, e.g. Java `1.12.2` or Bedrock `1.16.220`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameVersion {
    pub edition: Edition,
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl GameVersion {
    pub const fn java(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            edition: Edition::Java,
            major,
            minor,
            patch,
        }
    }

    pub const fn bedrock(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            edition: Edition::Bedrock,
            major,
            minor,
            patch,
        }
    }

    /// Parse `"1.13"`, `"1.12.2"` or `"bedrock_1.16.220"`.
    pub fn parse(s: &str) -> Result<Self, DataError> {
        let (edition, rest) = match s.strip_prefix(BEDROCK_PREFIX) {
            Some(rest) => (Edition::Bedrock, rest),
            None => (Edition::Java, s),
        };

        let mut parts = rest.split('.');
        let mut next = |required: bool| -> Result<u16, DataError> {
            match parts.next() {
                Some(p) => p.parse().map_err(|_| DataError::InvalidVersion(s.to_string())),
                None if required => Err(DataError::InvalidVersion(s.to_string())),
                None => Ok(0),
            }
        };
        let major = next(true)?;
        let minor = next(true)?;
        let patch = next(false)?;
        if parts.next().is_some() {
            return Err(DataError::InvalidVersion(s.to_string()));
        }

        Ok(Self {
            edition,
            major,
            minor,
            patch,
        })
    }

    /// The dotted number without the edition.
    pub fn number(&self) -> (u16, u16, u16) {
        (self.major, self.minor, self.patch)
    }

    /// Whether this version predates `other`. Editions are not compared: the
    /// predicate looks at the dotted number only.
    pub fn is_older_than(&self, other: GameVersion) -> bool {
        self.number() < other.number()
    }

    pub fn is_newer_or_equal_to(&self, other: GameVersion) -> bool {
        !self.is_older_than(other)
    }
}

impl Ord for GameVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number()
            .cmp(&other.number())
            .then(self.edition.cmp(&other.edition))
    }
}

impl PartialOrd for GameVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for GameVersion {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edition == Edition::Bedrock {
            f.write_str(BEDROCK_PREFIX)?;
        }
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_java() {
        assert_eq!(GameVersion::parse("1.12.2").unwrap(), GameVersion::java(1, 12, 2));
        assert_eq!(GameVersion::parse("1.13").unwrap(), GameVersion::java(1, 13, 0));
    }

    #[test]
    fn parse_bedrock() {
        let v: GameVersion = "bedrock_1.16.220".parse().unwrap();
        assert_eq!(v, GameVersion::bedrock(1, 16, 220));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(GameVersion::parse("").is_err());
        assert!(GameVersion::parse("1").is_err());
        assert!(GameVersion::parse("1.x").is_err());
        assert!(GameVersion::parse("1.2.3.4").is_err());
        assert!(GameVersion::parse("pe_1.2").is_err());
    }

    #[test]
    fn display_roundtrip() {
        for s in ["1.8.9", "1.13", "bedrock_1.16.220"] {
            assert_eq!(GameVersion::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn ordering() {
        assert!(GameVersion::java(1, 12, 2) < GameVersion::java(1, 13, 0));
        assert!(GameVersion::java(1, 13, 2) < GameVersion::java(1, 14, 0));
        assert!(GameVersion::java(1, 9, 0) > GameVersion::java(1, 8, 9));
        assert!(GameVersion::bedrock(1, 16, 220) >= GameVersion::bedrock(1, 16, 220));
        assert!(GameVersion::bedrock(1, 16, 201) < GameVersion::bedrock(1, 16, 220));
    }

    #[test]
    fn predicates_ignore_edition() {
        let bedrock = GameVersion::bedrock(1, 16, 220);
        assert!(bedrock.is_newer_or_equal_to(GameVersion::java(1, 13, 0)));
        assert!(!bedrock.is_older_than(GameVersion::java(1, 13, 0)));
        assert!(GameVersion::java(1, 8, 9).is_older_than(GameVersion::java(1, 9, 0)));
    }
}
