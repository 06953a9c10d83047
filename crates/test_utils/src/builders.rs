//! Test Data Builders
//!
//! Tests set only the fields they care about; everything else gets a
//! sensible default.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_fund::NewFund;

/// Builder for `NewFund` test data
///
/// Unlike `NewFund::new`, the builder does not trim or reject values, so it
/// can produce the invalid inputs validation tests need.
#[derive(Debug, Clone)]
pub struct NewFundBuilder {
    name: String,
    strategy: String,
    aum: Option<Decimal>,
    inception_date: Option<NaiveDate>,
}

impl Default for NewFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewFundBuilder {
    pub fn new() -> Self {
        Self {
            name: "Test Fund".to_string(),
            strategy: "Long/Short Equity".to_string(),
            aum: Some(dec!(1000000.00)),
            inception_date: NaiveDate::from_ymd_opt(2020, 1, 15),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    pub fn with_aum(mut self, aum: Decimal) -> Self {
        self.aum = Some(aum);
        self
    }

    pub fn without_aum(mut self) -> Self {
        self.aum = None;
        self
    }

    /// Sets the inception date
    ///
    /// # Panics
    ///
    /// Panics if the date is not a valid calendar date
    pub fn with_inception_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.inception_date = Some(
            NaiveDate::from_ymd_opt(year, month, day).expect("valid inception date"),
        );
        self
    }

    pub fn without_inception_date(mut self) -> Self {
        self.inception_date = None;
        self
    }

    pub fn build(self) -> NewFund {
        NewFund {
            name: self.name,
            strategy: self.strategy,
            aum: self.aum,
            inception_date: self.inception_date,
        }
    }
}
