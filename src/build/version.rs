// ABOUTME: Semantic version parsing for generated headers
// ABOUTME: Splits major.minor.alter strings into numeric components

use std::fmt;
use std::str::FromStr;

use super::error::BuildError;

/// A `major.minor.alter` version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub alter: u64,
}

impl FromStr for Version {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| BuildError::InvalidVersion {
            version: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid(format!(
                "expected 3 dot-separated components, found {}",
                parts.len()
            )));
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| invalid(format!("component '{}' is not a number", part)))?;
        }

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            alter: numbers[2],
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.alter)
    }
}
