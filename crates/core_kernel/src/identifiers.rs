//! Strongly-typed identifiers for domain entities
//!
//! Fund records are keyed by a store-assigned positive integer. Wrapping it
//! in a newtype keeps it from being confused with counts or row numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a persisted fund record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundId(i64);

impl FundId {
    /// Wraps a raw store identifier
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FundId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for FundId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<FundId> for i64 {
    fn from(id: FundId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_id_display() {
        assert_eq!(FundId::new(42).to_string(), "42");
    }

    #[test]
    fn test_fund_id_parsing() {
        let parsed: FundId = " 7 ".parse().unwrap();
        assert_eq!(parsed, FundId::new(7));
        assert!("abc".parse::<FundId>().is_err());
    }
}
