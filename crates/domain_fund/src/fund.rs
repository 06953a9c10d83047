//! Fund definition
//!
//! This module defines the persisted Fund record and the `NewFund` creation
//! request, along with the storage constraints every adapter enforces.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::FundId;

use crate::error::FundError;

/// Maximum length of a fund name, in characters
pub const NAME_MAX_LEN: usize = 200;

/// Maximum length of a strategy label, in characters
pub const STRATEGY_MAX_LEN: usize = 50;

/// AUM is stored with cent precision
pub const AUM_DECIMAL_PLACES: u32 = 2;

/// Exclusive upper bound on the magnitude of a stored AUM (15 digits, 2 fractional)
pub const AUM_LIMIT: Decimal = dec!(10000000000000);

/// Strategy labels the registry was designed around
///
/// Any non-empty label is accepted; these are the ones offered by default.
pub const STANDARD_STRATEGIES: [&str; 3] = ["Long/Short Equity", "Global Macro", "Arbitrage"];

/// A persisted investment fund record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Store-assigned identifier
    pub id: FundId,
    /// Fund name
    pub name: String,
    /// Investment strategy label
    pub strategy: String,
    /// Assets under management
    pub aum: Option<Decimal>,
    /// Date the fund started trading
    pub inception_date: Option<NaiveDate>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Fund {
    /// Whether the strategy is one of [`STANDARD_STRATEGIES`]
    pub fn has_standard_strategy(&self) -> bool {
        STANDARD_STRATEGIES.contains(&self.strategy.as_str())
    }
}

/// A fund that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFund {
    pub name: String,
    pub strategy: String,
    pub aum: Option<Decimal>,
    pub inception_date: Option<NaiveDate>,
}

impl NewFund {
    /// Creates a fund request from a name and strategy
    ///
    /// Both values are trimmed; an empty result is rejected.
    ///
    /// # Errors
    ///
    /// Returns `FundError::MissingField` if either value is blank
    pub fn new(name: &str, strategy: &str) -> Result<Self, FundError> {
        let name = name.trim();
        let strategy = strategy.trim();

        if name.is_empty() {
            return Err(FundError::MissingField("name"));
        }
        if strategy.is_empty() {
            return Err(FundError::MissingField("strategy"));
        }

        Ok(Self {
            name: name.to_string(),
            strategy: strategy.to_string(),
            aum: None,
            inception_date: None,
        })
    }

    /// Sets the assets under management
    pub fn with_aum(mut self, aum: Decimal) -> Self {
        self.aum = Some(aum);
        self
    }

    /// Sets the inception date
    pub fn with_inception_date(mut self, date: NaiveDate) -> Self {
        self.inception_date = Some(date);
        self
    }

    /// AUM rounded to storage precision
    pub fn stored_aum(&self) -> Option<Decimal> {
        self.aum.map(round_aum)
    }

    /// Checks the request against the storage constraints
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a `FundError`
    pub fn validate(&self) -> Result<(), FundError> {
        if self.name.trim().is_empty() {
            return Err(FundError::MissingField("name"));
        }
        if self.strategy.trim().is_empty() {
            return Err(FundError::MissingField("strategy"));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(FundError::invalid(
                "name",
                format!("must be at most {} characters", NAME_MAX_LEN),
            ));
        }
        if self.strategy.chars().count() > STRATEGY_MAX_LEN {
            return Err(FundError::invalid(
                "strategy",
                format!("must be at most {} characters", STRATEGY_MAX_LEN),
            ));
        }
        if let Some(aum) = self.stored_aum() {
            if aum.abs() >= AUM_LIMIT {
                return Err(FundError::invalid(
                    "aum",
                    format!("{} exceeds the storable range", aum),
                ));
            }
        }
        Ok(())
    }

    /// Turns the request into a persisted record
    pub fn into_fund(self, id: FundId, created_at: DateTime<Utc>) -> Fund {
        let aum = self.stored_aum();
        Fund {
            id,
            name: self.name,
            strategy: self.strategy,
            aum,
            inception_date: self.inception_date,
            created_at,
        }
    }
}

/// Rounds an AUM value to cent precision, half away from zero
pub fn round_aum(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AUM_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fund_trims_values() {
        let fund = NewFund::new("  Alpha Fund ", "\tGlobal Macro\n").unwrap();
        assert_eq!(fund.name, "Alpha Fund");
        assert_eq!(fund.strategy, "Global Macro");
    }

    #[test]
    fn test_new_fund_rejects_blank_strategy() {
        let err = NewFund::new("Alpha", "   ").unwrap_err();
        assert_eq!(err.field(), Some("strategy"));
    }

    #[test]
    fn test_round_aum_half_away_from_zero() {
        assert_eq!(round_aum(dec!(10.005)), dec!(10.01));
        assert_eq!(round_aum(dec!(-10.005)), dec!(-10.01));
        assert_eq!(round_aum(dec!(10.004)), dec!(10.00));
    }

    #[test]
    fn test_validate_aum_limit() {
        let ok = NewFund::new("A", "Arbitrage").unwrap().with_aum(dec!(9999999999999.99));
        assert!(ok.validate().is_ok());

        let too_big = NewFund::new("A", "Arbitrage").unwrap().with_aum(dec!(10000000000000));
        assert_eq!(too_big.validate().unwrap_err().field(), Some("aum"));
    }
}
